use super::ui;
use crate::core::basket::{CategoryNode, LeafId};
use crate::core::chart::ChartSlice;
use crate::core::config::AppConfig;
use crate::core::entries::ExpenditureEntries;
use crate::core::reference::Comparison;
use crate::core::session::{Evaluation, Session};
use crate::core::shares::ShareResult;
use crate::core::Basket;
use anyhow::{Context, Result};
use comfy_table::Cell;
use dialoguer::Input;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Label of the comparison row that carries the user's own figure.
pub const USER_ROW_LABEL: &str = "Current month";

/// Shown instead of a chart when nothing was entered.
pub const EMPTY_MESSAGE: &str = "Enter at least one expenditure to calculate the shares";

/// How the entries for a calculation are collected.
#[derive(Debug, Clone, Default)]
pub struct CalcOptions {
    /// YAML file mapping item names to amounts
    pub entries_path: Option<PathBuf>,
    /// `<item>=<amount>` assignments, applied after the file
    pub assignments: Vec<String>,
    /// Prompt for every item
    pub interactive: bool,
    /// Print the report as JSON
    pub json: bool,
    /// The user's own monthly CPI figure, in percent
    pub monthly_ipc: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    pub currency_symbol: &'a str,
    pub evaluation: &'a Evaluation,
    pub comparison: Option<Comparison>,
}

pub fn run(config: &AppConfig, options: &CalcOptions) -> Result<()> {
    let mut session = Session::new(Basket::standard());

    if let Some(path) = &options.entries_path {
        session.entries_mut().load_sheet(path)?;
    }
    for assignment in &options.assignments {
        session.entries_mut().apply_assignment(assignment)?;
    }
    if options.interactive {
        prompt_entries(session.entries_mut(), &config.currency_symbol)?;
    }

    let evaluation = session.calculate()?.clone();
    let report = build_report(config, &evaluation, options.monthly_ipc)?;

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", render_report(session.entries(), &report));
    }
    Ok(())
}

pub fn build_report<'a>(
    config: &'a AppConfig,
    evaluation: &'a Evaluation,
    monthly_ipc: Option<f64>,
) -> Result<CalcReport<'a>> {
    // The comparison is only displayed next to a chart
    let comparison = match (evaluation, &config.reference) {
        (Evaluation::Computed { .. }, Some(reference)) => {
            Some(reference.compare(USER_ROW_LABEL, monthly_ipc)?)
        }
        _ => None,
    };
    Ok(CalcReport {
        currency_symbol: &config.currency_symbol,
        evaluation,
        comparison,
    })
}

/// Asks for every leaf in basket order. Rejected values are asked again.
fn prompt_entries(entries: &mut ExpenditureEntries, symbol: &str) -> Result<()> {
    for category in entries.basket().categories() {
        if let CategoryNode::Container { .. } = category {
            println!(
                "{}",
                ui::style_text(
                    format!("{} {}", category.marker(), category.name()).trim(),
                    ui::StyleType::TotalLabel
                )
            );
        }
        for leaf in category.leaves() {
            loop {
                let value: f64 = Input::new()
                    .with_prompt(format!("{leaf} ({symbol})"))
                    .default(entries.get(leaf))
                    .interact_text()?;
                match entries.set_value(leaf, value) {
                    Ok(()) => break,
                    Err(e) => {
                        warn!(%leaf, value, "Rejected entry");
                        println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
                    }
                }
            }
        }
    }
    debug!("Interactive entry finished");
    Ok(())
}

/// Renders the entry table, the share column being filled only when shares
/// were computed.
pub fn render_share_table(
    entries: &ExpenditureEntries,
    result: Option<&ShareResult>,
    symbol: &str,
) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category / item"),
        ui::header_cell("Expenditure"),
        ui::header_cell("Share"),
    ]);

    let share_cell = |leaf: LeafId| match result.and_then(|r| r.share_of(leaf)) {
        Some(share) => ui::share_cell(share),
        None => Cell::new(""),
    };

    for category in entries.basket().categories() {
        let title = format!("{} {}", category.marker(), category.name())
            .trim()
            .to_string();
        match category {
            CategoryNode::Leaf { .. } => {
                for leaf in category.leaves() {
                    table.add_row(vec![
                        Cell::new(title.clone()),
                        ui::amount_cell(symbol, entries.get(leaf)),
                        share_cell(leaf),
                    ]);
                }
            }
            CategoryNode::Container { .. } => {
                table.add_row(vec![Cell::new(title), Cell::new(""), Cell::new("")]);
                for leaf in category.leaves() {
                    table.add_row(vec![
                        Cell::new(format!("  • {leaf}")),
                        ui::amount_cell(symbol, entries.get(leaf)),
                        share_cell(leaf),
                    ]);
                }
            }
        }
    }
    table.to_string()
}

/// Renders the composition chart series as a legend-ordered table.
pub fn render_chart_series(chart: &[ChartSlice], result: &ShareResult, symbol: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Expenditure"),
        ui::header_cell("Share"),
    ]);
    for slice in chart {
        table.add_row(vec![
            Cell::new(slice.label),
            ui::amount_cell(symbol, slice.value),
            result
                .share_of_label(slice.label)
                .map_or_else(|| Cell::new("N/A"), ui::share_cell),
        ]);
    }
    table.to_string()
}

pub fn render_comparison(comparison: &Comparison) -> String {
    let mut table = ui::new_styled_table();
    let mut header = vec![ui::header_cell("Period")];
    header.extend(comparison.series.iter().map(|s| ui::header_cell(s)));
    table.set_header(header);

    for row in &comparison.rows {
        let mut cells = vec![Cell::new(&row.label)];
        cells.extend(
            row.values
                .iter()
                .map(|v| ui::format_optional_cell(*v, |v| format!("{v:.1}%"))),
        );
        table.add_row(cells);
    }
    table.to_string()
}

pub fn render_report(entries: &ExpenditureEntries, report: &CalcReport<'_>) -> String {
    let symbol = report.currency_symbol;
    match report.evaluation {
        Evaluation::Empty => format!(
            "{}\n\n{}",
            render_share_table(entries, None, symbol),
            ui::style_text(EMPTY_MESSAGE, ui::StyleType::Warning)
        ),
        Evaluation::Computed { result, chart } => {
            let mut output = render_share_table(entries, Some(result), symbol);

            output.push_str(&format!(
                "\n\n{}: {}\n\n",
                ui::style_text("Total expenditure", ui::StyleType::TotalLabel),
                ui::style_text(
                    &ui::format_amount(symbol, result.total),
                    ui::StyleType::TotalValue
                )
            ));

            output.push_str(&format!(
                "{}\n\n{}",
                ui::style_text("Expenditure distribution", ui::StyleType::Title),
                render_chart_series(chart, result, symbol)
            ));

            if let Some(comparison) = &report.comparison {
                output.push_str(&format!(
                    "\n\n{}\n\n{}",
                    ui::style_text("CPI comparison", ui::StyleType::Title),
                    render_comparison(comparison)
                ));
            }
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::{ReferencePoint, ReferenceSeries};

    fn scenario_session() -> Session {
        let mut session = Session::new(Basket::standard());
        let entries = session.entries_mut();
        entries.set_by_name("Carnes y derivados", 300.0).unwrap();
        entries.set_by_name("Frutas", 100.0).unwrap();
        entries.set_by_name("Transporte público", 600.0).unwrap();
        session
    }

    fn config_with_reference() -> AppConfig {
        AppConfig {
            currency_symbol: "$".to_string(),
            reference: Some(ReferenceSeries {
                series: vec!["Tu IPC mensual".to_string(), "IPC NOA".to_string()],
                user_series: None,
                points: vec![ReferencePoint {
                    label: "Ago-2025".to_string(),
                    values: vec![2.3, 2.2],
                }],
            }),
        }
    }

    #[test]
    fn test_report_for_scenario() -> Result<()> {
        let mut session = scenario_session();
        let config = config_with_reference();
        let evaluation = session.calculate()?.clone();
        let report = build_report(&config, &evaluation, Some(4.0))?;

        let comparison = report.comparison.as_ref().expect("Expected comparison");
        assert_eq!(comparison.rows.len(), 2);
        assert_eq!(comparison.rows[1].label, USER_ROW_LABEL);

        let output = render_report(session.entries(), &report);
        assert!(output.contains("30.00%"));
        assert!(output.contains("10.00%"));
        assert!(output.contains("60.00%"));
        assert!(output.contains("$1,000"));
        assert!(!output.contains(EMPTY_MESSAGE));
        Ok(())
    }

    #[test]
    fn test_empty_report_has_no_chart_or_comparison() -> Result<()> {
        let mut session = Session::new(Basket::standard());
        let config = config_with_reference();
        let evaluation = session.calculate()?.clone();
        let report = build_report(&config, &evaluation, Some(4.0))?;
        assert!(report.comparison.is_none());

        let output = render_report(session.entries(), &report);
        assert!(output.contains(EMPTY_MESSAGE));
        assert!(!output.contains("%"));
        Ok(())
    }

    #[test]
    fn test_chart_table_reads_computed_shares() {
        let basket = Basket::standard();
        let frutas = basket.leaf("Frutas").unwrap();
        let result = ShareResult {
            total: 1000.0,
            shares: vec![crate::core::shares::LeafShare {
                leaf: frutas,
                amount: 250.0,
                share_percent: 12.34,
            }],
        };
        let chart = vec![ChartSlice {
            label: "Frutas",
            value: 250.0,
        }];

        let output = render_chart_series(&chart, &result, "$");
        assert!(output.contains("12.34%"));
        assert!(!output.contains("25.00%"));
    }

    #[test]
    fn test_report_json_shape() -> Result<()> {
        let mut session = scenario_session();
        let config = AppConfig::default();
        let evaluation = session.calculate()?.clone();
        let report = build_report(&config, &evaluation, None)?;

        let json: serde_json::Value = serde_json::to_value(&report)?;
        assert_eq!(json["evaluation"]["status"], "computed");
        assert_eq!(json["evaluation"]["result"]["total"], 1000.0);
        let chart = json["evaluation"]["chart"].as_array().unwrap();
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[0]["label"], "Carnes y derivados");
        assert_eq!(chart[2]["value"], 600.0);
        assert!(json["comparison"].is_null());
        Ok(())
    }
}
