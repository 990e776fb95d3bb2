//! Weight converter command module
//!
//! Each stateful command mutates the managed session and returns the
//! resulting snapshot, so the frontend re-renders from one value.

use std::sync::Mutex;
use tauri::State;
use crate::core::features::{self, weight_converter};
use crate::core::features::weight_converter::session::ConverterSession;
use crate::shared::errors::{CommandError, CommandResult};
use crate::shared::types::{
    CommandItem, ConversionSnapshot, ConvertUnitsRequest, ConvertUnitsResponse, ExecuteActionRequest,
    ExecuteActionResponse, GetUnitsResponse,
};

/// Managed converter session shared by the widget window
pub struct SessionState(Mutex<ConverterSession>);

impl SessionState {
    pub fn new(session: ConverterSession) -> Self {
        Self(Mutex::new(session))
    }

    fn update<F>(&self, f: F) -> CommandResult<ConversionSnapshot>
    where
        F: FnOnce(&mut ConverterSession),
    {
        let mut session = self
            .0
            .lock()
            .map_err(|e| CommandError::StateUnavailable(e.to_string()))?;
        f(&mut session);
        Ok(session.snapshot())
    }
}

/// Get all units in display order plus the footer summary
#[tauri::command]
pub fn get_units() -> CommandResult<GetUnitsResponse> {
    Ok(weight_converter::get_all_units())
}

/// Get the current conversion state
#[tauri::command]
pub fn get_state(state: State<'_, SessionState>) -> CommandResult<ConversionSnapshot> {
    state.update(|_| {})
}

/// Text field changed; rejected text leaves the state as it was
#[tauri::command]
pub fn set_input(state: State<'_, SessionState>, text: String) -> CommandResult<ConversionSnapshot> {
    state.update(|session| {
        session.input_changed(&text);
    })
}

#[tauri::command]
pub fn select_source(state: State<'_, SessionState>, unit: String) -> CommandResult<ConversionSnapshot> {
    let unit = weight_converter::parse_unit_id(&unit)?;
    state.update(|session| session.select_source(unit))
}

#[tauri::command]
pub fn select_target(state: State<'_, SessionState>, unit: String) -> CommandResult<ConversionSnapshot> {
    let unit = weight_converter::parse_unit_id(&unit)?;
    state.update(|session| session.select_target(unit))
}

#[tauri::command]
pub fn swap_units(state: State<'_, SessionState>) -> CommandResult<ConversionSnapshot> {
    state.update(ConverterSession::swap)
}

/// Convert a number directly, without touching the session
#[tauri::command]
pub fn convert_units(request: ConvertUnitsRequest) -> CommandResult<ConvertUnitsResponse> {
    weight_converter::convert_units(&request)
}

/// Palette entries contributed by the converter
#[tauri::command]
pub fn get_command_items() -> CommandResult<Vec<CommandItem>> {
    Ok(features::get_all_command_items())
}

/// Run a palette action against captured text
#[tauri::command]
pub fn execute_action(request: ExecuteActionRequest) -> CommandResult<ExecuteActionResponse> {
    features::execute_feature_action(&request)
}
