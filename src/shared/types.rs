use serde::{Deserialize, Serialize};
use ts_rs::TS;
use crate::core::features::weight_converter::registry::WeightUnit;

// Rich Unit Data Transfer Object for frontend selection controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDTO {
    pub id: WeightUnit,       // Unit identifier (e.g., "kg")
    pub label: String,        // Display name (e.g., "Kilograms")
    pub option_label: String, // Select option text (e.g., "Kilograms (kg)")
    pub factor: f64,          // Grams per unit
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
    pub supported_summary: String,
}

/// Everything the widget renders after an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionSnapshot {
    pub raw_input: String,
    pub from_unit: WeightUnit,
    pub to_unit: WeightUnit,
    /// Empty when there is no valid input yet
    pub display_result: String,
    /// Info line, e.g. "1 kg = 2.205 lb"
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: WeightUnit,
    pub to_unit: WeightUnit,
}

// Action types for command palette actions
// Using adjacently tagged serialization for frontend compatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export)]
pub enum ActionType {
    /// Convert a weight found in the captured text to `target`
    ConvertWeight { target: WeightUnit },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub action_type: Option<ActionType>,
    pub widget_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    #[ts(type = "any")]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteActionResponse {
    pub result: String,
    #[ts(type = "any")]
    pub metadata: Option<serde_json::Value>,
}
