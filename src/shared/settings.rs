use serde::{Deserialize, Serialize};
use ts_rs::TS;
use crate::core::features::weight_converter::registry::WeightUnit;
use crate::shared::errors::{CommandError, CommandResult};

/// Converter configuration supplied by the host
///
/// Nothing is persisted: the host passes these in (e.g. through the plugin
/// block of its app config) and missing fields fall back to kg -> lb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ConverterSettings {
    pub default_from_unit: WeightUnit,
    pub default_to_unit: WeightUnit,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_from_unit: WeightUnit::Kilogram,
            default_to_unit: WeightUnit::Pound,
        }
    }
}

impl ConverterSettings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(content: &str) -> CommandResult<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The two defaults must name different units
    pub fn validate(&self) -> CommandResult<()> {
        if self.default_from_unit == self.default_to_unit {
            return Err(CommandError::Config(format!(
                "Default source and target units are both '{}'",
                self.default_from_unit
            )));
        }
        Ok(())
    }
}
