use serde::Serialize;

use super::if97::{self, If97Error};
use super::saturation;

/// 설계 포화 모델과 IF97 기준값을 한 점에서 나란히 비교한 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaturationComparison {
    /// 비교 기준 포화온도(°C)
    pub temperature_c: f64,
    /// 비교 기준 절대압(kPa)
    pub pressure_kpa: f64,
    /// 설계 모델 값. 온도 기준 비교면 Antoine 압력(kPa), 압력 기준 비교면 표 보간 온도(°C)
    pub design_value: f64,
    /// IF97 값 (design_value와 같은 물리량)
    pub reference_value: f64,
    /// IF97 증발잠열(kJ/kg)
    pub latent_heat_kj_per_kg: f64,
}

impl SaturationComparison {
    /// 설계 모델의 편차 (design − reference)
    pub fn deviation(&self) -> f64 {
        self.design_value - self.reference_value
    }
}

/// 온도 기준: Antoine 압력 vs IF97 포화압력.
pub fn compare_at_temperature(temp_c: f64) -> Result<SaturationComparison, If97Error> {
    let reference = if97::saturation_pressure_kpa(temp_c)?;
    let latent = if97::latent_heat_kj_per_kg(temp_c)?;
    Ok(SaturationComparison {
        temperature_c: temp_c,
        pressure_kpa: reference,
        design_value: saturation::pressure_from_temperature(temp_c),
        reference_value: reference,
        latent_heat_kj_per_kg: latent,
    })
}

/// 압력 기준: 표 보간 포화온도 vs IF97 포화온도.
pub fn compare_at_pressure(pressure_kpa: f64) -> Result<SaturationComparison, If97Error> {
    let reference = if97::saturation_temperature_c(pressure_kpa)?;
    let latent = if97::latent_heat_kj_per_kg(reference)?;
    Ok(SaturationComparison {
        temperature_c: reference,
        pressure_kpa,
        design_value: saturation::temperature_from_pressure(pressure_kpa),
        reference_value: reference,
        latent_heat_kj_per_kg: latent,
    })
}
