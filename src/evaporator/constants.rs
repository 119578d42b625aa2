use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// 엔진이 계산을 시도하는 최대 효용 수. CLI 입력 범위도 이 값으로 제한한다.
pub const MAX_EFFECTS: usize = 64;

/// 제품 건물 농도 구간별 증기 경제성 한 단계.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyTier {
    /// 제품 DM(%)이 이 값 미만이면 적용
    pub below_product_dm_pct: f64,
    /// kg 증발수 / kg 가열증기
    pub economy: f64,
}

/// 설계 계산에 쓰이는 고정 상수 묶음. 배포 환경별로 config.toml `[design]`에서 바꿀 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConstants {
    /// 마지막 효용 복수기 절대압(kPa)
    pub terminal_pressure_kpa: f64,
    /// 게이지압을 절대압으로 바꿀 때 더하는 대기압(bar)
    pub atmospheric_pressure_bar: f64,
    /// 원액 밀도(kg/L)
    pub feed_density_kg_per_l: f64,
    /// 증발 잠열(kJ/kg)
    pub latent_heat_evaporation_kj_per_kg: f64,
    /// 최종 복수기 잠열(kJ/kg, 약 65~70 °C 기준)
    pub latent_heat_condenser_kj_per_kg: f64,
    /// BPE 보간 인자(용질 농도 %) 하한
    pub min_bpe_concentration_pct: f64,
    /// 효용별 구동 온도차 하한(°C)
    pub min_driving_delta_t_c: f64,
    /// 권장 효용 수 하한
    pub min_recommended_effects: usize,
    /// 권장 효용 수 상한
    pub max_recommended_effects: usize,
    /// 계산 상한. 넘으면 효용 레코드 없이 오류 보고서를 돌려준다.
    pub max_effects: usize,
    /// 모든 구간을 넘을 때의 증기 경제성
    pub fallback_economy: f64,
    /// 오름차순 증기 경제성 구간
    pub economy_tiers: Vec<EconomyTier>,
}

impl Default for DesignConstants {
    fn default() -> Self {
        Self {
            terminal_pressure_kpa: 25.0,
            atmospheric_pressure_bar: 1.0,
            feed_density_kg_per_l: 1.0,
            latent_heat_evaporation_kj_per_kg: 2300.0,
            latent_heat_condenser_kj_per_kg: 2350.0,
            min_bpe_concentration_pct: 0.01,
            min_driving_delta_t_c: 0.1,
            min_recommended_effects: 2,
            max_recommended_effects: 4,
            max_effects: MAX_EFFECTS,
            fallback_economy: 1.8,
            economy_tiers: vec![
                EconomyTier {
                    below_product_dm_pct: 12.0,
                    economy: 2.3,
                },
                EconomyTier {
                    below_product_dm_pct: 18.0,
                    economy: 2.1,
                },
            ],
        }
    }
}

impl DesignConstants {
    pub fn recommended_effects(&self) -> RangeInclusive<usize> {
        self.min_recommended_effects..=self.max_recommended_effects
    }
}
