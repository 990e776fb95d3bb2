use once_cell::sync::Lazy;
use regex::Regex;
use super::registry::WeightUnit;
use crate::shared::errors::{CommandError, CommandResult};

// Compile regex patterns once at module level (compile-time constants)
static RE_LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("Failed to compile leading number pattern")
});

// Number followed by unit (e.g., "12kg", "2.5 lbs")
static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?(?:\d+(?:\.\d+)?|\.\d+))\s*([a-zA-Z]+)")
        .expect("Failed to compile amount-unit pattern")
});

// Unit followed by number (e.g., "kg 12")
static RE_UNIT_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z]+)\s*([+-]?(?:\d+(?:\.\d+)?|\.\d+))")
        .expect("Failed to compile unit-amount pattern")
});

/// Parse the leading numeric content of `text`
///
/// Trailing garbage is ignored ("1." -> 1, "12abc" -> 12). Returns `None`
/// when there is no leading number or the value is not finite.
pub fn parse_input(text: &str) -> Option<f64> {
    let matched = RE_LEADING_NUMBER.find(text)?;
    let value = matched.as_str().trim_start().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Map a unit alias to its registry unit (case-insensitive)
pub fn normalize_unit(alias: &str) -> Option<WeightUnit> {
    match alias.to_lowercase().as_str() {
        "mg" | "milligram" | "milligrams" | "milligramme" | "milligrammes" => Some(WeightUnit::Milligram),
        "g" | "gram" | "grams" | "gramme" | "grammes" => Some(WeightUnit::Gram),
        "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" | "kilogramme" | "kilogrammes" => {
            Some(WeightUnit::Kilogram)
        }
        "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
        "oz" | "ounce" | "ounces" => Some(WeightUnit::Ounce),
        "st" | "stone" | "stones" => Some(WeightUnit::Stone),
        "t" | "ton" | "tons" | "tonne" | "tonnes" => Some(WeightUnit::Ton),
        _ => None,
    }
}

/// Extract an amount and unit from free text (e.g., "2.5 lbs", "kg 3", "12 stone to kg")
///
/// The first number/unit pair with a recognised unit wins.
pub fn parse_quantity(text: &str) -> CommandResult<(f64, WeightUnit)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::InvalidInput("Empty text".to_string()));
    }

    // Normalize comma decimal separators to dots
    let normalized = text.replace(',', ".");

    // Pattern 1: number then unit
    for caps in RE_AMOUNT_UNIT.captures_iter(&normalized) {
        if let (Ok(amount), Some(unit)) = (caps[1].parse::<f64>(), normalize_unit(&caps[2])) {
            tracing::debug!("[parse_quantity] Extracted {} {} from {:?}", amount, unit, text);
            return Ok((amount, unit));
        }
    }

    // Pattern 2: unit then number
    for caps in RE_UNIT_AMOUNT.captures_iter(&normalized) {
        if let (Some(unit), Ok(amount)) = (normalize_unit(&caps[1]), caps[2].parse::<f64>()) {
            tracing::debug!("[parse_quantity] Extracted {} {} from {:?}", amount, unit, text);
            return Ok((amount, unit));
        }
    }

    tracing::debug!("[parse_quantity] Failed to parse {:?}", text);
    Err(CommandError::InvalidInput(format!("Could not parse a weight from text: {}", text)))
}
