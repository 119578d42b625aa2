//! IAPWS-IF97 기준 포화 물성. 설계 모델(Antoine + 표)의 정확도를 비교하기 위한 참조용.
//! 입력: 온도(°C), 압력(kPa, 절대)
//! 잠열 계산은 seuif97 크레이트의 Region 1/2 식에 위임한다.

use seuif97::{pt, OH};
use thiserror::Error;

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// Region 1/2 강제 계산을 허용하는 포화온도 상한(°C).
const LATENT_HEAT_MAX_C: f64 = 350.0;

/// IF97 참조 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum If97Error {
    #[error("temperature {0} °C is outside the IF97 saturation range (0–373.9 °C)")]
    TemperatureOutOfRange(f64),
    #[error("pressure {0} kPa is outside the IF97 saturation range (0–22064 kPa)")]
    PressureOutOfRange(f64),
    #[error("IF97 evaluation failed at {t_c} °C (outside region validity or no convergence)")]
    Evaluation { t_c: f64 },
}

fn region4_sum(theta: f64) -> f64 {
    R4_N[0] * theta
        + R4_N[1] * theta.powf(1.5)
        + R4_N[2] * theta.powi(3)
        + R4_N[3] * theta.powf(3.5)
        + R4_N[4] * theta.powi(4)
        + R4_N[5] * theta.powf(7.5)
}

/// 포화압력(kPa abs) - 입력 온도는 °C.
pub fn saturation_pressure_kpa(t_c: f64) -> Result<f64, If97Error> {
    let t_k = t_c + 273.15;
    if !(t_k > 0.0 && t_k <= T4_STAR_K) {
        return Err(If97Error::TemperatureOutOfRange(t_c));
    }
    let theta = 1.0 - t_k / T4_STAR_K;
    let p_mpa = P4_STAR_MPA * ((T4_STAR_K / t_k) * region4_sum(theta)).exp();
    Ok(p_mpa * 1000.0)
}

/// 포화온도(°C) - 입력 압력은 kPa abs. Newton 반복으로 Region 4 식을 역산한다.
pub fn saturation_temperature_c(p_kpa: f64) -> Result<f64, If97Error> {
    let p_mpa = p_kpa / 1000.0;
    if !(p_mpa > 0.0 && p_mpa <= P4_STAR_MPA) {
        return Err(If97Error::PressureOutOfRange(p_kpa));
    }
    let target = (p_mpa / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..30 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let sum = region4_sum(theta);
        let f = (T4_STAR_K / t_k) * sum - target;
        let dsum_dtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let df_dt = -(T4_STAR_K / t_k.powi(2)) * sum - (1.0 / t_k) * dsum_dtheta;
        let delta = f / df_dt;
        t_k -= delta;
        if delta.abs() < 1e-8 {
            break;
        }
    }
    if !t_k.is_finite() {
        return Err(If97Error::Evaluation { t_c: t_k - 273.15 });
    }
    Ok(t_k - 273.15)
}

/// 포화온도(°C)에서의 증발잠열(kJ/kg) = h″(Region 2) − h′(Region 1).
pub fn latent_heat_kj_per_kg(t_c: f64) -> Result<f64, If97Error> {
    if t_c > LATENT_HEAT_MAX_C {
        return Err(If97Error::TemperatureOutOfRange(t_c));
    }
    let p_mpa = saturation_pressure_kpa(t_c)? / 1000.0;
    let h_liquid = pt(p_mpa, t_c, (OH, 1));
    let h_vapour = pt(p_mpa, t_c, (OH, 2));
    if h_liquid.is_nan() || h_vapour.is_nan() {
        return Err(If97Error::Evaluation { t_c });
    }
    Ok(h_vapour - h_liquid)
}
