//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;

pub use pressure::{convert_pressure, PressureUnit};
