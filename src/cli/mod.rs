//! Command handlers and terminal presentation

pub mod basket;
pub mod calc;
pub mod setup;
pub mod ui;
