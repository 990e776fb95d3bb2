//! Weight converter widget backend
//!
//! Converts a typed weight between a fixed set of units and formats the
//! result for live display. The presentation layer calls into
//! [`ConverterSession`] after every keystroke, unit selection, or swap.

pub mod core;
pub mod shared;

#[cfg(feature = "tauri")]
pub mod api;

pub use crate::core::features::weight_converter::conversion::convert;
pub use crate::core::features::weight_converter::formatter::format_result;
pub use crate::core::features::weight_converter::registry::{lookup, list, UnitDefinition, WeightUnit};
pub use crate::core::features::weight_converter::sanitizer::sanitize;
pub use crate::core::features::weight_converter::session::{recompute, ConverterSession};
pub use crate::shared::{CommandError, CommandResult};
pub use crate::shared::settings::ConverterSettings;
