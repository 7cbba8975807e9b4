//! Reference CPI series loaded from configuration, and the comparison table
//! that places the user's monthly figure next to them.
use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReferencePoint {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReferenceSeries {
    /// Series names, one per value column.
    pub series: Vec<String>,
    /// Column that receives the user's own monthly figure.
    #[serde(default)]
    pub user_series: Option<String>,
    pub points: Vec<ReferencePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Reference points plus, optionally, the user's figure as a last row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub series: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ReferenceSeries {
    /// Checks that every point has exactly one value per series.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.series.is_empty(), "Reference series has no series names");
        for point in &self.points {
            ensure!(
                point.values.len() == self.series.len(),
                "Reference point {} has {} values, expected {}",
                point.label,
                point.values.len(),
                self.series.len()
            );
        }
        if let Some(user) = &self.user_series {
            ensure!(
                self.series.contains(user),
                "User series {user} is not one of the reference series"
            );
        }
        Ok(())
    }

    fn user_column(&self) -> Result<usize> {
        match &self.user_series {
            Some(name) => match self.series.iter().position(|s| s == name) {
                Some(index) => Ok(index),
                None => bail!("User series {name} is not one of the reference series"),
            },
            None => Ok(0),
        }
    }

    /// Merges the user's monthly figure into the reference data for display.
    /// The reference values themselves are passed through untouched.
    pub fn compare(&self, user_label: &str, user_value: Option<f64>) -> Result<Comparison> {
        self.validate()?;

        let mut rows: Vec<ComparisonRow> = self
            .points
            .iter()
            .map(|p| ComparisonRow {
                label: p.label.clone(),
                values: p.values.iter().copied().map(Some).collect(),
            })
            .collect();

        if let Some(value) = user_value {
            let column = self.user_column()?;
            let mut values = vec![None; self.series.len()];
            values[column] = Some(value);
            rows.push(ComparisonRow {
                label: user_label.to_string(),
                values,
            });
        }

        Ok(Comparison {
            series: self.series.clone(),
            rows,
        })
    }
}
