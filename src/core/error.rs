use thiserror::Error;

/// Rejections raised while collecting expenditure entries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Invalid expenditure for {leaf}: {value} (must be a non-negative amount)")]
    InvalidInput { leaf: String, value: f64 },

    #[error("Unknown basket item: {0}")]
    UnknownLeaf(String),
}
