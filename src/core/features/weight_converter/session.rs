//! Conversion session state
//!
//! Holds the (input text, source unit, target unit) triple and the derived
//! display result. Every mutation recomputes the result before returning, so
//! callers never observe a stale display.

use super::conversion::convert;
use super::formatter::format_result;
use super::parsing::parse_input;
use super::registry::WeightUnit;
use super::sanitizer::is_acceptable;
use crate::shared::settings::ConverterSettings;
use crate::shared::types::ConversionSnapshot;

/// Shown in the result area while `display_result` is empty
pub const RESULT_PLACEHOLDER: &str = "Enter a value to convert";

/// Derive the display result from the current state triple
///
/// Unparseable or non-finite input, and conversions that overflow, yield "".
pub fn recompute(raw_input: &str, from: WeightUnit, to: WeightUnit) -> String {
    let Some(value) = parse_input(raw_input) else {
        return String::new();
    };

    let converted = convert(value, from.definition(), to.definition());
    if !converted.is_finite() {
        tracing::debug!("[recompute] {} {} -> {} overflowed", value, from, to);
        return String::new();
    }

    format_result(converted)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSession {
    raw_input: String,
    from_unit: WeightUnit,
    to_unit: WeightUnit,
    display_result: String,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterSession {
    /// Empty input, kilograms to pounds
    pub fn new() -> Self {
        Self::with_settings(&ConverterSettings::default())
    }

    pub fn with_settings(settings: &ConverterSettings) -> Self {
        Self {
            raw_input: String::new(),
            from_unit: settings.default_from_unit,
            to_unit: settings.default_to_unit,
            display_result: String::new(),
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn from_unit(&self) -> WeightUnit {
        self.from_unit
    }

    pub fn to_unit(&self) -> WeightUnit {
        self.to_unit
    }

    pub fn display_result(&self) -> &str {
        &self.display_result
    }

    /// Result text, or the placeholder when there is nothing to show
    pub fn display_text(&self) -> &str {
        if self.display_result.is_empty() {
            RESULT_PLACEHOLDER
        } else {
            &self.display_result
        }
    }

    /// Offer new text from the input field
    ///
    /// Returns false (and leaves the state untouched) when the text is rejected.
    pub fn input_changed(&mut self, candidate: &str) -> bool {
        if !is_acceptable(candidate) {
            tracing::debug!("[input_changed] Rejected {:?}, keeping {:?}", candidate, self.raw_input);
            return false;
        }
        self.raw_input = candidate.to_string();
        self.recompute();
        true
    }

    pub fn select_source(&mut self, unit: WeightUnit) {
        self.from_unit = unit;
        self.recompute();
    }

    pub fn select_target(&mut self, unit: WeightUnit) {
        self.to_unit = unit;
        self.recompute();
    }

    /// Exchange source and target; the input text is kept
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        tracing::debug!("[swap] Now converting {} -> {}", self.from_unit, self.to_unit);
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.display_result = recompute(&self.raw_input, self.from_unit, self.to_unit);
        tracing::debug!(
            "[recompute] {:?} {} -> {:?} {}",
            self.raw_input,
            self.from_unit,
            self.display_result,
            self.to_unit
        );
    }

    /// Info line shown under the widget, e.g. "1 kg = 2.205 lb"
    pub fn summary(&self) -> Option<String> {
        if self.raw_input.is_empty() || self.display_result.is_empty() {
            return None;
        }
        Some(format!(
            "{} {} = {} {}",
            self.raw_input, self.from_unit, self.display_result, self.to_unit
        ))
    }

    pub fn snapshot(&self) -> ConversionSnapshot {
        ConversionSnapshot {
            raw_input: self.raw_input.clone(),
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            display_result: self.display_result.clone(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = ConverterSession::new();
        assert_eq!(session.raw_input(), "");
        assert_eq!(session.from_unit(), WeightUnit::Kilogram);
        assert_eq!(session.to_unit(), WeightUnit::Pound);
        assert_eq!(session.display_result(), "");
        assert_eq!(session.display_text(), RESULT_PLACEHOLDER);
        assert_eq!(session.summary(), None);
    }

    #[test]
    fn test_kg_to_lb() {
        let mut session = ConverterSession::new();
        assert!(session.input_changed("1"));
        assert_eq!(session.display_result(), "2.205");
        assert_eq!(session.summary().as_deref(), Some("1 kg = 2.205 lb"));
    }

    #[test]
    fn test_g_to_kg() {
        let mut session = ConverterSession::new();
        session.select_source(WeightUnit::Gram);
        session.select_target(WeightUnit::Kilogram);
        session.input_changed("1000");
        assert_eq!(session.display_result(), "1.000");
    }

    #[test]
    fn test_zero_for_any_units() {
        let mut session = ConverterSession::new();
        session.input_changed("0");
        assert_eq!(session.display_result(), "0");
        session.select_source(WeightUnit::Ton);
        session.select_target(WeightUnit::Milligram);
        assert_eq!(session.display_result(), "0");
    }

    #[test]
    fn test_rejected_input_keeps_state() {
        let mut session = ConverterSession::new();
        session.input_changed("12.3");
        let before = session.clone();
        assert!(!session.input_changed("12.3.4"));
        assert!(!session.input_changed("12a"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_partial_input_gives_empty_result() {
        let mut session = ConverterSession::new();
        for text in ["-", ".", "-.", ""] {
            assert!(session.input_changed(text));
            assert_eq!(session.display_result(), "");
            assert_eq!(session.summary(), None);
        }
        assert!(session.input_changed("1."));
        assert_eq!(session.display_result(), "2.205");
    }

    #[test]
    fn test_swap_recomputes_with_same_input() {
        let mut session = ConverterSession::new();
        session.input_changed("1");
        session.swap();
        assert_eq!(session.from_unit(), WeightUnit::Pound);
        assert_eq!(session.to_unit(), WeightUnit::Kilogram);
        assert_eq!(session.raw_input(), "1");
        assert_eq!(session.display_result(), "0.4536");
    }

    #[test]
    fn test_same_units_identity() {
        let mut session = ConverterSession::new();
        session.select_target(WeightUnit::Kilogram);
        session.input_changed("0.1");
        assert_eq!(session.display_result(), "0.1000");
    }

    #[test]
    fn test_overflow_gives_empty_result() {
        assert_eq!(recompute("1e308", WeightUnit::Ton, WeightUnit::Milligram), "");
        let huge = "9".repeat(400);
        assert_eq!(recompute(&huge, WeightUnit::Gram, WeightUnit::Gram), "");
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(recompute("-5", WeightUnit::Kilogram, WeightUnit::Gram), "-5000.00");
    }

    #[test]
    fn test_tiny_result_uses_scientific() {
        assert_eq!(recompute("1", WeightUnit::Milligram, WeightUnit::Ton), "1.00e-9");
    }

    #[test]
    fn test_with_settings() {
        let settings = ConverterSettings {
            default_from_unit: WeightUnit::Stone,
            default_to_unit: WeightUnit::Pound,
        };
        let mut session = ConverterSession::with_settings(&settings);
        session.input_changed("1");
        assert_eq!(session.display_result(), "14.000");
    }

    #[test]
    fn test_snapshot() {
        let mut session = ConverterSession::new();
        session.input_changed("2");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.raw_input, "2");
        assert_eq!(snapshot.from_unit, WeightUnit::Kilogram);
        assert_eq!(snapshot.to_unit, WeightUnit::Pound);
        assert_eq!(snapshot.display_result, "4.409");
        assert_eq!(snapshot.summary.as_deref(), Some("2 kg = 4.409 lb"));
    }
}
