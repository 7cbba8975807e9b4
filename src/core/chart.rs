//! Data series for a composition (pie/donut) chart.
use crate::core::shares::ShareResult;
use anyhow::{Result, ensure};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Builds the composition chart series from computed shares.
///
/// Zero-valued leaves are dropped. The remaining slices keep basket order,
/// which is also the legend order.
pub fn build_chart_series(result: &ShareResult) -> Result<Vec<ChartSlice>> {
    let slices: Vec<ChartSlice> = result
        .shares
        .iter()
        .filter(|s| s.amount != 0.0)
        .map(|s| ChartSlice {
            label: s.leaf.as_str(),
            value: s.amount,
        })
        .collect();

    // A positive total always leaves at least one slice
    ensure!(
        !slices.is_empty(),
        "Chart series is empty for a total of {}",
        result.total
    );
    Ok(slices)
}
