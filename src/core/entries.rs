//! Per-session expenditure entries, one value per basket leaf.
use crate::core::basket::{Basket, LeafId};
use crate::core::error::EntryError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::{fs, path::Path};
use tracing::debug;

/// Expenditure entries keyed by leaf, always covering the whole basket.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenditureEntries {
    basket: &'static Basket,
    values: Vec<(LeafId, f64)>,
}

impl ExpenditureEntries {
    /// Creates a collector with every leaf of `basket` set to zero.
    pub fn new(basket: &'static Basket) -> Self {
        Self {
            basket,
            values: basket.leaves().map(|leaf| (leaf, 0.0)).collect(),
        }
    }

    pub fn basket(&self) -> &'static Basket {
        self.basket
    }

    /// Stores `value` for `leaf`. Negative and non-finite values are rejected
    /// and the previously stored value is kept.
    pub fn set_value(&mut self, leaf: LeafId, value: f64) -> Result<(), EntryError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EntryError::InvalidInput {
                leaf: leaf.to_string(),
                value,
            });
        }
        let slot = self
            .values
            .iter_mut()
            .find(|(l, _)| *l == leaf)
            .ok_or_else(|| EntryError::UnknownLeaf(leaf.to_string()))?;
        slot.1 = value;
        debug!(%leaf, value, "Entry updated");
        Ok(())
    }

    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), EntryError> {
        let leaf = self
            .basket
            .leaf(name)
            .ok_or_else(|| EntryError::UnknownLeaf(name.to_string()))?;
        self.set_value(leaf, value)
    }

    pub fn get(&self, leaf: LeafId) -> f64 {
        self.values
            .iter()
            .find(|(l, _)| *l == leaf)
            .map_or(0.0, |(_, v)| *v)
    }

    /// Every leaf with its value, in basket traversal order.
    pub fn all(&self) -> &[(LeafId, f64)] {
        &self.values
    }

    /// Applies a `name=value` assignment as given on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .rsplit_once('=')
            .with_context(|| format!("Expected <item>=<amount>, got: {assignment}"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid amount in assignment: {assignment}"))?;
        self.set_by_name(name.trim(), value)?;
        Ok(())
    }

    /// Applies every entry of a YAML mapping of item name to amount.
    /// Either the whole sheet is applied or, on the first rejection, none of it.
    pub fn apply_sheet(&mut self, sheet: &BTreeMap<String, f64>) -> Result<(), EntryError> {
        let mut staged = self.clone();
        for (name, value) in sheet {
            staged.set_by_name(name, *value)?;
        }
        *self = staged;
        Ok(())
    }

    pub fn load_sheet<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let sheet_str = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read entries file: {}", path.as_ref().display())
        })?;
        let sheet: BTreeMap<String, f64> = serde_yaml::from_str(&sheet_str).with_context(|| {
            format!("Failed to parse entries file: {}", path.as_ref().display())
        })?;
        self.apply_sheet(&sheet)
            .with_context(|| format!("Invalid entries file: {}", path.as_ref().display()))?;
        debug!(entries = sheet.len(), "Loaded entries file");
        Ok(())
    }
}
