use crate::shared::errors::{CommandError, CommandResult, ERR_MISSING_TEXT_PARAM};
use crate::shared::types::{
    ActionType, CommandItem, ConvertUnitsRequest, ConvertUnitsResponse, ExecuteActionResponse,
    GetUnitsResponse, UnitDTO,
};
use super::FeatureSync;
use serde_json::json;

pub mod conversion;
pub mod formatter;
pub mod parsing;
pub mod registry;
pub mod sanitizer;
pub mod session;

use registry::WeightUnit;

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightConverterFeature;

impl FeatureSync for WeightConverterFeature {
    fn id(&self) -> &'static str {
        "weight_converter"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_weight_converter".to_string(),
            label: "Weight Converter".to_string(),
            description: Some("Convert between different weight units instantly".to_string()),
            action_type: None,
            widget_type: Some("weight_converter".to_string()),
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        // One palette action per registry unit, in display order
        registry::list()
            .iter()
            .map(|def| CommandItem {
                id: format!("convert_to_{}", def.symbol),
                label: format!("Convert to {}", def.name),
                description: None,
                action_type: Some(ActionType::ConvertWeight { target: def.unit }),
                widget_type: None,
            })
            .collect()
    }

    fn execute_action(
        &self,
        action_type: &ActionType,
        params: &serde_json::Value,
    ) -> CommandResult<ExecuteActionResponse> {
        match action_type {
            ActionType::ConvertWeight { target } => {
                let text = params
                    .get("text")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| CommandError::InvalidInput(ERR_MISSING_TEXT_PARAM.to_string()))?;

                let (amount, source_unit) = parsing::parse_quantity(text)?;
                let amount = ensure_finite(amount)?;
                let converted = ensure_finite(conversion::convert(
                    amount,
                    source_unit.definition(),
                    target.definition(),
                ))?;
                let formatted = formatter::format_result(converted);

                tracing::debug!(
                    "[execute_action] {} {} -> {} {}",
                    amount, source_unit, formatted, target
                );

                Ok(ExecuteActionResponse {
                    result: format!("{} {}", formatted, target),
                    metadata: Some(json!({
                        "from_unit": source_unit,
                        "target_unit": target,
                        "original_amount": amount,
                        "converted_amount": converted,
                        "widget": "weight_converter"
                    })),
                })
            }
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// All units for the frontend selection controls, in canonical order
pub fn get_all_units() -> GetUnitsResponse {
    let units = registry::list()
        .iter()
        .map(|def| UnitDTO {
            id: def.unit,
            label: def.name.to_string(),
            option_label: def.option_label(),
            factor: def.factor,
        })
        .collect();

    GetUnitsResponse {
        units,
        supported_summary: registry::supported_summary(),
    }
}

/// One-shot numeric conversion with unit identifiers from the frontend
pub fn convert_units(request: &ConvertUnitsRequest) -> CommandResult<ConvertUnitsResponse> {
    let from = registry::lookup(&request.from_unit)?;
    let to = registry::lookup(&request.to_unit)?;
    let amount = ensure_finite(request.amount)?;
    let result = ensure_finite(conversion::convert(amount, from, to))?;

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: formatter::format_result(result),
        from_unit: from.unit,
        to_unit: to.unit,
    })
}

// Non-finite amounts or results have no displayable conversion
fn ensure_finite(value: f64) -> CommandResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!("[ensure_finite] Rejected non-finite value {}", value);
        Err(CommandError::InvalidInput(format!("Weight out of range: {}", value)))
    }
}

/// Parse a unit identifier coming from the frontend
pub fn parse_unit_id(id: &str) -> CommandResult<WeightUnit> {
    id.parse()
}
