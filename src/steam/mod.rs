//! 물/증기 포화 관련 계산 모듈 모음.

pub mod comparison;
pub mod if97;
pub mod saturation;

pub use comparison::{compare_at_pressure, compare_at_temperature, SaturationComparison};
pub use saturation::{pressure_from_temperature, temperature_from_pressure};
