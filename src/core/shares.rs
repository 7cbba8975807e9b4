//! Percentage share of each leaf in the total declared expenditure.
use crate::core::basket::LeafId;
use crate::core::entries::ExpenditureEntries;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafShare {
    pub leaf: LeafId,
    pub amount: f64,
    /// Share of the total in percent, rounded to two decimals.
    pub share_percent: f64,
}

/// Shares computed from a non-zero total. Covers every leaf, zeros included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareResult {
    pub total: f64,
    pub shares: Vec<LeafShare>,
}

impl ShareResult {
    pub fn share_of(&self, leaf: LeafId) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.leaf == leaf)
            .map(|s| s.share_percent)
    }

    /// Share of the leaf displayed as `label`, as used by chart slices.
    pub fn share_of_label(&self, label: &str) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.leaf.as_str() == label)
            .map(|s| s.share_percent)
    }
}

/// Outcome of a share calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareOutcome {
    /// Total expenditure is zero; no shares can be computed.
    Empty,
    Computed(ShareResult),
}

/// Rounds half-up to two decimal digits.
///
/// Rounding goes through the shortest decimal form of `value`, so 0.285
/// becomes 0.29 even though its binary value sits just below the midpoint.
pub fn round_percent(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Computes the total and the share of every leaf.
///
/// Shares are rounded independently and are not renormalized, so they may
/// sum to slightly more or less than 100. Entries are trusted to be
/// non-negative and finite.
///
/// Ratios are taken against the largest entry, so shares stay exact even
/// when the plain total overflows to infinity.
pub fn calculate(entries: &ExpenditureEntries) -> ShareOutcome {
    let largest = entries
        .all()
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        debug!("Total expenditure is zero, nothing to share");
        return ShareOutcome::Empty;
    }

    let total: f64 = entries.all().iter().map(|(_, v)| v).sum();
    let scaled_total: f64 = entries.all().iter().map(|(_, v)| v / largest).sum();

    let shares = entries
        .all()
        .iter()
        .map(|(leaf, amount)| LeafShare {
            leaf: *leaf,
            amount: *amount,
            share_percent: round_percent(amount / largest / scaled_total * 100.0),
        })
        .collect();
    debug!(total, "Computed expenditure shares");

    ShareOutcome::Computed(ShareResult { total, shares })
}
