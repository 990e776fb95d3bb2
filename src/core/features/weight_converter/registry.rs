//! Unit registry
//!
//! Fixed, ordered table of weight units. Every factor is grams-per-unit and
//! the table order is the canonical display order for selection controls.

use crate::shared::errors::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Closed set of supported weight units
///
/// Serialized as the unit identifier so the frontend can bind select values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WeightUnit {
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "st")]
    Stone,
    #[serde(rename = "ton")]
    Ton,
}

/// Unit definition with its factor to the base unit (grams)
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    pub unit: WeightUnit,
    pub symbol: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

impl UnitDefinition {
    /// Text shown in selection controls, e.g. "Kilograms (kg)"
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

// Order must match the `WeightUnit` declaration order.
static UNIT_REGISTRY: [UnitDefinition; 7] = [
    UnitDefinition { unit: WeightUnit::Milligram, symbol: "mg", name: "Milligrams", factor: 0.001 },
    UnitDefinition { unit: WeightUnit::Gram, symbol: "g", name: "Grams", factor: 1.0 },
    UnitDefinition { unit: WeightUnit::Kilogram, symbol: "kg", name: "Kilograms", factor: 1000.0 },
    UnitDefinition { unit: WeightUnit::Pound, symbol: "lb", name: "Pounds", factor: 453.59237 },
    UnitDefinition { unit: WeightUnit::Ounce, symbol: "oz", name: "Ounces", factor: 28.349523125 },
    UnitDefinition { unit: WeightUnit::Stone, symbol: "st", name: "Stones", factor: 6350.29318 },
    UnitDefinition { unit: WeightUnit::Ton, symbol: "ton", name: "Tons", factor: 1_000_000.0 },
];

/// Look up a unit by its identifier
///
/// Selection controls are populated from `list()`, so a miss here means the
/// caller passed an identifier that never came from the registry.
pub fn lookup(id: &str) -> CommandResult<&'static UnitDefinition> {
    UNIT_REGISTRY
        .iter()
        .find(|def| def.symbol == id)
        .ok_or_else(|| {
            tracing::warn!("[lookup] Unknown unit identifier: {:?}", id);
            CommandError::UnknownUnit(id.to_string())
        })
}

/// All units in canonical display order
pub fn list() -> &'static [UnitDefinition] {
    &UNIT_REGISTRY
}

/// Footer line naming every supported unit, e.g. "Supports: MG, G, KG, ..."
pub fn supported_summary() -> String {
    let symbols: Vec<&str> = UNIT_REGISTRY.iter().map(|def| def.symbol).collect();
    format!("Supports: {}", symbols.join(", ").to_uppercase())
}

impl WeightUnit {
    pub fn definition(self) -> &'static UnitDefinition {
        &UNIT_REGISTRY[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        self.definition().symbol
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).map(|def| def.unit)
    }
}
