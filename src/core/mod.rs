//! Core business logic: the basket, entries, shares and chart data

pub mod basket;
pub mod chart;
pub mod config;
pub mod entries;
pub mod error;
pub mod log;
pub mod reference;
pub mod session;
pub mod shares;

// Re-export main types for cleaner imports
pub use basket::{Basket, CategoryNode, LeafId};
pub use chart::ChartSlice;
pub use entries::ExpenditureEntries;
pub use error::EntryError;
pub use session::{Evaluation, Session, SessionState};
pub use shares::{ShareOutcome, ShareResult};
