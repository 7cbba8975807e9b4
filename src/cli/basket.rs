use super::ui;
use crate::core::basket::{Basket, CategoryNode};
use comfy_table::Cell;

/// Renders the basket hierarchy, one row per leaf.
pub fn render_basket(basket: &Basket) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Item"),
    ]);

    for category in basket.categories() {
        let title = format!("{} {}", category.marker(), category.name())
            .trim()
            .to_string();
        table.add_row(vec![Cell::new(title), Cell::new("")]);
        if let CategoryNode::Container { children, .. } = category {
            for child in children.iter() {
                table.add_row(vec![Cell::new(""), Cell::new(format!("• {child}"))]);
            }
        }
    }

    let footer = format!(
        "{} categories, {} items accept entries",
        basket.categories().len(),
        basket.leaf_count()
    );
    format!(
        "{}\n\n{}\n\n{}",
        ui::style_text("CPI basket", ui::StyleType::Title),
        table,
        ui::style_text(&footer, ui::StyleType::Subtle)
    )
}

pub fn run(basket: &Basket) {
    println!("{}", render_basket(basket));
}
