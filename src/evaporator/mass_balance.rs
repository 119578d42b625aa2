//! 효용별 물질수지.
//!
//! 건물은 증기로 빠져나가지 않으므로 효용을 지나도 질량이 보존된다.
//! 비물리적인 단계가 나오면 첫 오류만 기록하고, 그 단계부터 끝까지 0 유량을 채워
//! 결과의 모양(효용 수만큼의 레코드)을 항상 유지한다.

use thiserror::Error;
use tracing::warn;

/// 물질수지가 성립하지 않는 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MassBalanceError {
    /// 효용의 목표 DM이 0 이하
    #[error("Error: Dry matter in effect {effect} is zero or negative.")]
    NonPositiveDryMatter { effect: usize },
    /// 효용으로 들어오는 건물 질량이 0
    #[error("Error: Zero dry matter in effect {effect}.")]
    ZeroDryMatter { effect: usize },
}

impl MassBalanceError {
    /// 오류가 발생한 효용 번호(1부터)
    pub fn effect(&self) -> usize {
        match self {
            MassBalanceError::NonPositiveDryMatter { effect }
            | MassBalanceError::ZeroDryMatter { effect } => *effect,
        }
    }
}

/// 한 효용의 유량 (kg/h, 반올림 전).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageFlows {
    /// 효용을 떠나는 농축액
    pub concentrate_kg_per_h: f64,
    /// 효용에서 발생한 증기
    pub vapor_kg_per_h: f64,
}

/// 물질수지 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct MassBalance {
    /// 원액 질량유량(kg/h)
    pub feed_kg_per_h: f64,
    /// 원액 건물 질량유량(kg/h)
    pub feed_dm_kg_per_h: f64,
    /// 효용 1..N
    pub stages: Vec<StageFlows>,
    /// 첫 번째로 발견된 오류
    pub error: Option<MassBalanceError>,
}

impl MassBalance {
    /// 전체 효용 증기 합(kg/h)
    pub fn total_vapor_kg_per_h(&self) -> f64 {
        self.stages.iter().map(|s| s.vapor_kg_per_h).sum()
    }

    /// 마지막 효용 농축액(kg/h). 효용이 없으면 원액 그대로.
    pub fn final_concentrate_kg_per_h(&self) -> f64 {
        self.stages
            .last()
            .map_or(self.feed_kg_per_h, |s| s.concentrate_kg_per_h)
    }
}

/// 원액 유량/건물과 DM 궤적으로 효용별 물질수지를 푼다.
///
/// `dm_trajectory[0]`은 원액, `dm_trajectory[i]`는 효용 i의 목표 DM(%)이다.
/// 제품(마지막) DM이 0 이하이면 궤적 전체가 비물리적이므로 효용 1부터 실패로 처리한다.
/// NaN 등 유한하지 않은 DM 값도 0 이하와 같이 취급한다.
pub fn solve_mass_balance(
    feed_kg_per_h: f64,
    feed_dm_kg_per_h: f64,
    dm_trajectory: &[f64],
    effects: usize,
) -> MassBalance {
    let mut stages = Vec::with_capacity(effects);
    let mut error = None;

    let product_dm_pct = dm_trajectory.get(effects).copied().unwrap_or(0.0);
    if effects > 0 && !(product_dm_pct > 0.0 && product_dm_pct.is_finite()) {
        error = Some(MassBalanceError::NonPositiveDryMatter { effect: 1 });
    }

    let mut prev_concentrate = feed_kg_per_h;
    let dm_mass = feed_dm_kg_per_h;
    for effect in 1..=effects {
        if error.is_none() {
            let target_fraction = dm_trajectory.get(effect).copied().unwrap_or(0.0) / 100.0;
            if !(target_fraction > 0.0 && target_fraction.is_finite()) {
                error = Some(MassBalanceError::NonPositiveDryMatter { effect });
            } else if dm_mass == 0.0 || !dm_mass.is_finite() {
                error = Some(MassBalanceError::ZeroDryMatter { effect });
            } else {
                let concentrate = dm_mass / target_fraction;
                stages.push(StageFlows {
                    concentrate_kg_per_h: concentrate,
                    vapor_kg_per_h: prev_concentrate - concentrate,
                });
                prev_concentrate = concentrate;
                continue;
            }
        }
        stages.push(StageFlows::default());
    }

    if let Some(err) = error {
        warn!(effect = err.effect(), "mass balance infeasible: {err}");
    }

    MassBalance {
        feed_kg_per_h,
        feed_dm_kg_per_h,
        stages,
        error,
    }
}
