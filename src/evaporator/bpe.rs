//! 비점상승(BPE) 상관식.
//!
//! 지원하는 곡선은 NaCl 기준 하나뿐이며, 다른 용질도 이 곡선으로 근사된다는 가정을
//! 호출자에게 그대로 전달한다.

use crate::interpolation::InterpTable;

// (용질 농도 %, BPE °C)
const NACL_POINTS: [(f64, f64); 5] = [
    (0.0, 0.0),
    (1.0, 0.3),
    (5.0, 1.5),
    (10.0, 4.0),
    (15.0, 7.0),
];

/// 이름이 붙은 BPE 곡선.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoluteCurve {
    pub name: &'static str,
    pub table: InterpTable<'static>,
}

/// NaCl 기준 곡선. 15 % 초과는 7 °C로 고정.
pub const NACL: SoluteCurve = SoluteCurve {
    name: "NaCl",
    table: InterpTable::new(&NACL_POINTS),
};

impl SoluteCurve {
    /// 농도(%)에서의 BPE(°C). 0 이하 농도는 0.
    pub fn elevation(&self, concentration_pct: f64) -> f64 {
        if concentration_pct <= 0.0 {
            return 0.0;
        }
        self.table.interpolate(concentration_pct)
    }
}

/// 기준 곡선(NaCl)으로 BPE를 계산한다.
pub fn boiling_point_elevation(concentration_pct: f64) -> f64 {
    NACL.elevation(concentration_pct)
}
