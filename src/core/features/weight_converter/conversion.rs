use super::registry::UnitDefinition;

/// Convert `value` between two units via the base unit (grams)
///
/// The same unit on both sides returns `value` untouched so no floating-point
/// drift is introduced by the round trip through grams.
pub fn convert(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    if from.unit == to.unit {
        return value;
    }

    // Step 1: source unit to grams
    let grams = value * from.factor;

    // Step 2: grams to target unit
    grams / to.factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::weight_converter::registry::{list, WeightUnit};
    use proptest::prelude::*;

    fn def(unit: WeightUnit) -> &'static UnitDefinition {
        unit.definition()
    }

    #[test]
    fn test_kg_to_lb() {
        let result = convert(1.0, def(WeightUnit::Kilogram), def(WeightUnit::Pound));
        assert!((result - 2.2046226218).abs() < 1e-9);
    }

    #[test]
    fn test_g_to_kg() {
        assert_eq!(convert(1000.0, def(WeightUnit::Gram), def(WeightUnit::Kilogram)), 1.0);
    }

    #[test]
    fn test_stone_to_lb() {
        let result = convert(1.0, def(WeightUnit::Stone), def(WeightUnit::Pound));
        assert!((result - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_ton_to_mg() {
        assert_eq!(convert(1.0, def(WeightUnit::Ton), def(WeightUnit::Milligram)), 1e9);
    }

    #[test]
    fn test_negative_and_zero_pass_through() {
        assert_eq!(convert(0.0, def(WeightUnit::Ounce), def(WeightUnit::Ton)), 0.0);
        let result = convert(-2.0, def(WeightUnit::Kilogram), def(WeightUnit::Gram));
        assert_eq!(result, -2000.0);
    }

    #[test]
    fn test_identity_keeps_exact_value() {
        // 0.1 oz -> g -> oz would drift without the identity short-circuit
        for unit_def in list() {
            assert_eq!(convert(0.1, unit_def, unit_def).to_bits(), 0.1f64.to_bits());
        }
    }

    fn any_unit() -> impl Strategy<Value = &'static UnitDefinition> {
        (0..list().len()).prop_map(|i| &list()[i])
    }

    proptest! {
        #[test]
        fn prop_identity_is_exact(v in any::<f64>(), unit_def in any_unit()) {
            let out = convert(v, unit_def, unit_def);
            prop_assert_eq!(out.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_round_trip(v in -1e9f64..1e9f64, from in any_unit(), to in any_unit()) {
            let back = convert(convert(v, from, to), to, from);
            let tolerance = 1e-12 * v.abs().max(1.0);
            prop_assert!((back - v).abs() <= tolerance, "{} -> {}", v, back);
        }
    }
}
