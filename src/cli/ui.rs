use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use num_format::{Locale, ToFormattedString as _};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an `Option<T>` into a `Cell`. `None` is displayed as "N/A".
pub fn format_optional_cell<T>(value: Option<T>, format_fn: impl Fn(T) -> String) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        |v| Cell::new(format_fn(v)).set_alignment(CellAlignment::Right),
    )
}

/// Formats a share cell. Positive shares are bold and green, zero is dimmed.
pub fn share_cell(share: f64) -> Cell {
    let cell = Cell::new(format!("{share:.2}%")).set_alignment(CellAlignment::Right);
    if share > 0.0 {
        cell.add_attribute(Attribute::Bold).fg(Color::Green)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

/// Formats a peso amount rounded to whole units with thousands separators.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!(
        "{symbol}{}",
        (amount.round() as i64).to_formatted_string(&Locale::en)
    )
}

/// Creates a right aligned amount cell.
pub fn amount_cell(symbol: &str, amount: f64) -> Cell {
    Cell::new(format_amount(symbol, amount)).set_alignment(CellAlignment::Right)
}
