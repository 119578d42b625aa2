use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 가열증기 압력 입력 단위. 모두 게이지 기준이며 내부 기준은 bar(g)이다.
/// mmHg는 0을 대기압, 음수를 진공으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[default]
    Bar,
    #[value(name = "mbar")]
    MilliBar,
    #[value(name = "kpa")]
    KiloPascal,
    #[value(name = "mpa")]
    MegaPascal,
    #[value(name = "kgcm2")]
    KgPerCm2,
    Psi,
    #[value(name = "mmhg")]
    MmHg,
}

const MMHG_PER_BAR: f64 = 750.062;
const KPA_PER_BAR: f64 = 100.0;

impl PressureUnit {
    /// 표시용 단위 기호
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar(g)",
            PressureUnit::MilliBar => "mbar(g)",
            PressureUnit::KiloPascal => "kPa(g)",
            PressureUnit::MegaPascal => "MPa(g)",
            PressureUnit::KgPerCm2 => "kg/cm²(g)",
            PressureUnit::Psi => "psi(g)",
            PressureUnit::MmHg => "mmHg(g)",
        }
    }
}

/// 주어진 게이지 압력을 bar(g)로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::MilliBar => value / 1000.0,
        PressureUnit::KiloPascal => value / KPA_PER_BAR,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::KgPerCm2 => value * 0.980665,
        PressureUnit::Psi => value * 0.0689476,
        PressureUnit::MmHg => value / MMHG_PER_BAR,
    }
}

/// bar(g) 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::MilliBar => value_bar * 1000.0,
        PressureUnit::KiloPascal => value_bar * KPA_PER_BAR,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::KgPerCm2 => value_bar / 0.980665,
        PressureUnit::Psi => value_bar / 0.0689476,
        PressureUnit::MmHg => value_bar * MMHG_PER_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_bar(to_bar(value, from), to)
}
