//! Widget feature surface
//!
//! A feature contributes widget commands (open its window) and action
//! commands (act on captured text without opening a window) to the host's
//! command palette.

use crate::shared::errors::CommandResult;
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};

pub mod weight_converter;

pub trait FeatureSync: Send + Sync {
    /// Unique identifier for this feature
    fn id(&self) -> &str;

    /// Widget commands open the feature's UI window.
    fn widget_commands(&self) -> Vec<CommandItem>;

    /// Action commands perform immediate conversions on captured text.
    fn action_commands(&self) -> Vec<CommandItem>;

    /// Execute an action for this feature
    fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> CommandResult<ExecuteActionResponse>;
}

/// Widget and action commands of the weight converter, widgets first
pub fn get_all_command_items() -> Vec<CommandItem> {
    let feature = weight_converter::WeightConverterFeature;
    let mut items = feature.widget_commands();
    items.extend(feature.action_commands());
    tracing::debug!("[get_all_command_items] {} commands from '{}'", items.len(), feature.id());
    items
}

/// Execute a palette action request
pub fn execute_feature_action(request: &ExecuteActionRequest) -> CommandResult<ExecuteActionResponse> {
    weight_converter::WeightConverterFeature.execute_action(&request.action_type, &request.params)
}
