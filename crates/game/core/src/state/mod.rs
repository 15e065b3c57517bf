//! Persistent session state mutated by scripts.
//!
//! This module owns the data a play session accumulates: boolean flags,
//! scalar variables, and the inventory. Scripts are the only writers during
//! play; reads of keys nothing has set yet return the caller's default, so a
//! stage can test a flag before anything touched it.
pub mod inventory;
pub mod value;

pub use inventory::{Inventory, ItemSlot};
pub use value::Value;

use std::collections::BTreeMap;

use tracing::debug;

/// Scripted session state: flags, variables, and the player inventory.
///
/// This is the whole save file. `BTreeMap` keys keep the JSON encoding
/// canonical, so two states with the same contents serialize identically
/// regardless of the order scripts set things in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub flags: BTreeMap<String, bool>,
    pub variables: BTreeMap<String, Value>,
    pub inventory: Inventory,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag read with a caller-supplied default for unset keys.
    pub fn flag_or(&self, name: &str, default: bool) -> bool {
        self.flags.get(name).copied().unwrap_or(default)
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    /// Variable read; `None` when unset.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Numeric variable read with a caller-supplied default for unset or
    /// non-numeric values.
    pub fn number_or(&self, name: &str, default: f64) -> f64 {
        self.variables
            .get(name)
            .and_then(Value::as_number)
            .unwrap_or(default)
    }

    /// Adds to a numeric variable. Unset variables count as zero. A
    /// non-numeric current value also counts as zero; that is a designer
    /// mistake worth a log line, not a failure.
    pub fn add_number(&mut self, name: &str, amount: f64) {
        let current = match self.variables.get(name) {
            None => 0.0,
            Some(Value::Number(n)) => *n,
            Some(other) => {
                debug!(
                    variable = name,
                    current = ?other,
                    "add on non-numeric variable treats it as zero"
                );
                0.0
            }
        };
        self.variables
            .insert(name.to_string(), Value::Number(current + amount));
    }
}
