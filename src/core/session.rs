//! A user session: one set of entries and the last explicit evaluation.
use crate::core::basket::{Basket, LeafId};
use crate::core::chart::{ChartSlice, build_chart_series};
use crate::core::entries::ExpenditureEntries;
use crate::core::error::EntryError;
use crate::core::shares::{ShareOutcome, ShareResult, calculate};
use anyhow::Result;
use serde::Serialize;
use tracing::info;

/// Result of the last calculate trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// Total expenditure was zero. Callers show an explanatory message instead of a chart.
    Empty,
    Computed {
        result: ShareResult,
        chart: Vec<ChartSlice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unevaluated,
    Evaluated,
}

#[derive(Debug, Clone)]
pub struct Session {
    entries: ExpenditureEntries,
    evaluation: Option<Evaluation>,
}

impl Session {
    pub fn new(basket: &'static Basket) -> Self {
        Self {
            entries: ExpenditureEntries::new(basket),
            evaluation: None,
        }
    }

    pub fn entries(&self) -> &ExpenditureEntries {
        &self.entries
    }

    /// Mutable access to the entries. Changes do not affect the current
    /// evaluation until [`Session::calculate`] runs again.
    pub fn entries_mut(&mut self) -> &mut ExpenditureEntries {
        &mut self.entries
    }

    pub fn set_value(&mut self, leaf: LeafId, value: f64) -> Result<(), EntryError> {
        self.entries.set_value(leaf, value)
    }

    pub fn state(&self) -> SessionState {
        match self.evaluation {
            Some(_) => SessionState::Evaluated,
            None => SessionState::Unevaluated,
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Runs the full pipeline on the entries as they stand now.
    pub fn calculate(&mut self) -> Result<&Evaluation> {
        let evaluation = match calculate(&self.entries) {
            ShareOutcome::Empty => {
                info!("No expenditure entered");
                Evaluation::Empty
            }
            ShareOutcome::Computed(result) => {
                let chart = build_chart_series(&result)?;
                info!(
                    total = result.total,
                    slices = chart.len(),
                    "Calculated expenditure shares"
                );
                Evaluation::Computed { result, chart }
            }
        };
        Ok(self.evaluation.insert(evaluation))
    }
}
