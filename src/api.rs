//! Tauri plugin exposing the converter to the widget frontend
//!
//! The host registers it with `.plugin(weight_converter_lib::api::init())` and
//! may configure defaults under `plugins.weight-converter` in its app config.

pub mod commands;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use crate::core::features::weight_converter::session::ConverterSession;
use crate::shared::settings::ConverterSettings;

pub const PLUGIN_NAME: &str = "weight-converter";

pub fn init<R: Runtime>() -> TauriPlugin<R, Option<ConverterSettings>> {
    Builder::<R, Option<ConverterSettings>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::get_units,
            commands::get_state,
            commands::set_input,
            commands::select_source,
            commands::select_target,
            commands::swap_units,
            commands::convert_units,
            commands::get_command_items,
            commands::execute_action,
        ])
        .setup(|app, api| {
            let settings = api.config().clone().unwrap_or_default();
            settings.validate()?;

            tracing::info!(
                "[init] Weight converter ready ({} -> {})",
                settings.default_from_unit,
                settings.default_to_unit
            );
            app.manage(commands::SessionState::new(ConverterSession::with_settings(&settings)));
            Ok(())
        })
        .build()
}
