//! 역방향 압력/온도 캐스케이드.
//!
//! 마지막 효용의 복수기 압력을 고정하고, 증기 온도까지의 온도차를 효용 수로 균등 배분해
//! 마지막 효용부터 첫 효용까지 거꾸로 채운다. 각 효용의 비점은 다음 효용 결과에 의존한다.

use tracing::debug;

use super::bpe::SoluteCurve;
use super::constants::DesignConstants;
use crate::steam::saturation;

/// 한 효용의 열역학 운전점 (반올림 전 값).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeStage {
    /// 절대압(kPa)
    pub pressure_kpa: f64,
    /// 용액 비점(°C)
    pub boiling_temp_c: f64,
    /// 비점상승(°C)
    pub bpe_c: f64,
    /// 구동 온도차(°C, LMTD 대용). 하한 적용 후 값
    pub driving_delta_t_c: f64,
    /// 하한 적용 전 구동 온도차
    pub raw_driving_delta_t_c: f64,
}

impl CascadeStage {
    /// 구동 온도차가 하한으로 보정되었는지
    pub fn is_driving_delta_t_floored(&self) -> bool {
        self.raw_driving_delta_t_c != self.driving_delta_t_c
    }
}

/// 캐스케이드 계산 결과. `stages[0]`이 첫(가장 뜨거운) 효용.
#[derive(Debug, Clone, PartialEq)]
pub struct Cascade {
    /// 가열증기 포화온도(°C)
    pub steam_temp_c: f64,
    /// 효용당 균등 온도 강하(°C)
    pub step_c: f64,
    pub stages: Vec<CascadeStage>,
}

/// 캐스케이드를 푼다.
///
/// `dm_trajectory`는 원액 포함 효용 수+1개 DM(%) 값이며, 효용 i의 BPE는
/// `dm_trajectory[i] − feed_tss_pct`(하한 적용)로 계산한다.
pub fn solve_cascade(
    effects: usize,
    steam_temp_c: f64,
    dm_trajectory: &[f64],
    feed_tss_pct: f64,
    curve: &SoluteCurve,
    constants: &DesignConstants,
) -> Cascade {
    if effects == 0 {
        return Cascade {
            steam_temp_c,
            step_c: 0.0,
            stages: Vec::new(),
        };
    }

    let bpes: Vec<f64> = (1..=effects)
        .map(|i| {
            let dm = dm_trajectory.get(i).copied().unwrap_or(0.0);
            curve.elevation((dm - feed_tss_pct).max(constants.min_bpe_concentration_pct))
        })
        .collect();

    let last = effects - 1;
    let terminal_sat_c = saturation::temperature_from_pressure(constants.terminal_pressure_kpa);
    let terminal_boiling_c = terminal_sat_c + bpes[last];
    let step_c = (steam_temp_c - terminal_boiling_c) / effects as f64;

    let mut pressures = vec![0.0; effects];
    let mut boiling = vec![0.0; effects];
    pressures[last] = constants.terminal_pressure_kpa;
    boiling[last] = terminal_boiling_c;
    for i in (0..last).rev() {
        boiling[i] = boiling[i + 1] + step_c;
        // 순수 물 기준 비점으로 되돌려 압력을 구한다
        pressures[i] = saturation::pressure_from_temperature(boiling[i] - bpes[i]);
    }

    let stages = (0..effects)
        .map(|i| {
            let hot = if i == 0 { steam_temp_c } else { boiling[i - 1] };
            let raw = hot - boiling[i];
            let driving = if raw <= constants.min_driving_delta_t_c {
                constants.min_driving_delta_t_c
            } else {
                raw
            };
            CascadeStage {
                pressure_kpa: pressures[i],
                boiling_temp_c: boiling[i],
                bpe_c: bpes[i],
                driving_delta_t_c: driving,
                raw_driving_delta_t_c: raw,
            }
        })
        .collect();

    debug!(effects, steam_temp_c, terminal_boiling_c, step_c, "cascade solved");

    Cascade {
        steam_temp_c,
        step_c,
        stages,
    }
}
