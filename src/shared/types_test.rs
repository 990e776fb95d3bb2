//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::features::weight_converter::registry::WeightUnit;
    use crate::shared::settings::ConverterSettings;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Types crossing the IPC boundary to the widget frontend
        WeightUnit::export().expect("Failed to export WeightUnit");
        ConversionSnapshot::export().expect("Failed to export ConversionSnapshot");
        GetUnitsResponse::export().expect("Failed to export GetUnitsResponse");
        ConvertUnitsResponse::export().expect("Failed to export ConvertUnitsResponse");
        ActionType::export().expect("Failed to export ActionType");
        ConverterSettings::export().expect("Failed to export ConverterSettings");
    }

    #[test]
    fn weight_unit_binding_is_identifier_union() {
        let decl = WeightUnit::decl();
        for id in ["\"mg\"", "\"g\"", "\"kg\"", "\"lb\"", "\"oz\"", "\"st\"", "\"ton\""] {
            assert!(decl.contains(id), "missing {} in {}", id, decl);
        }
    }
}
