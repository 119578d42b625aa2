//! 다중효용 증발관 예비설계 계산 라이브러리. 계산 엔진은 표시 계층과 분리되어 있어
//! CLI 외의 화면에서도 `evaporator::compute_design`을 그대로 호출할 수 있다.

pub mod app;
pub mod config;
pub mod evaporator;
pub mod i18n;
pub mod interpolation;
pub mod steam;
pub mod ui_cli;
pub mod units;

pub use evaporator::{compute_design, compute_design_with, ProcessInput, ProcessReport};
