// Generates the plugin's command permissions when built as a Tauri plugin

#[cfg(feature = "tauri")]
const COMMANDS: &[&str] = &[
    "get_units",
    "get_state",
    "set_input",
    "select_source",
    "select_target",
    "swap_units",
    "convert_units",
    "get_command_items",
    "execute_action",
];

fn main() {
    #[cfg(feature = "tauri")]
    tauri_plugin::Builder::new(COMMANDS).build();
}
