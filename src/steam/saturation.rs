//! 설계용 물 포화 모델.
//!
//! 정방향(온도 → 압력)은 Antoine 식, 역방향(압력 → 온도)은 15점 포화표 보간을 사용한다.
//! 저정밀 예비설계용이므로 초월방정식을 역산하지 않고 표를 쓴다.

use crate::interpolation::InterpTable;

/// Antoine 상수 (물, mmHg/°C 기준)
pub const ANTOINE_A: f64 = 8.07131;
pub const ANTOINE_B: f64 = 1730.63;
pub const ANTOINE_C: f64 = 233.426;

/// mmHg → kPa
pub const KPA_PER_MMHG: f64 = 0.133322;

// (절대압 kPa, 포화온도 °C). 0.6~500 kPa 범위.
const SATURATION_POINTS: [(f64, f64); 15] = [
    (0.6, 0.0),
    (1.2, 10.0),
    (2.3, 20.0),
    (4.2, 30.0),
    (7.4, 40.0),
    (12.3, 50.0),
    (19.9, 60.0),
    (31.8, 70.0),
    (47.4, 80.0),
    (67.0, 90.0),
    (101.3, 100.0),
    (200.0, 120.0),
    (300.0, 134.0),
    (400.0, 144.0),
    (500.0, 151.0),
];

/// 압력(kPa abs) → 포화온도(°C) 표.
pub const SATURATION_TABLE: InterpTable<'static> = InterpTable::new(&SATURATION_POINTS);

/// 포화온도(°C)에서의 절대압(kPa)을 Antoine 식으로 계산한다.
///
/// 상수가 맞춰진 1~100 °C 밖에서도 값은 반환하지만 외삽이므로 정확도는 보장하지 않는다.
pub fn pressure_from_temperature(temp_c: f64) -> f64 {
    let p_mmhg = 10f64.powf(ANTOINE_A - ANTOINE_B / (temp_c + ANTOINE_C));
    p_mmhg * KPA_PER_MMHG
}

/// 절대압(kPa)에서의 포화온도(°C)를 표 보간으로 계산한다.
///
/// 0.6 kPa 미만은 0 °C, 500 kPa 초과는 151 °C로 고정된다.
pub fn temperature_from_pressure(pressure_kpa: f64) -> f64 {
    SATURATION_TABLE.interpolate(pressure_kpa)
}
