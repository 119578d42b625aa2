//! 증기 경제성과 열부하 추정.
//!
//! 경제성은 캐스케이드에서 유도하지 않고 제품 DM 구간별 경험값을 쓴다.
//! 잠열은 실제 운전압력에서 다시 계산하지 않는 고정 상수다.

use tracing::debug;

use super::constants::DesignConstants;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 에너지 수지 결과 (반올림 전).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    /// 제품 질량유량(kg/h)
    pub product_kg_per_h: f64,
    /// 증발수(kg/h)
    pub evaporated_kg_per_h: f64,
    /// kg 증발수 / kg 증기
    pub steam_economy: f64,
    /// 가열증기 소비량(kg/h)
    pub steam_kg_per_h: f64,
    /// 전체 증발 열부하(kW)
    pub total_thermal_kw: f64,
    /// 증기측 열량(kW)
    pub steam_power_kw: f64,
    /// 최종 복수기 열부하(kW)
    pub condenser_kw: f64,
}

/// 제품 DM(%)에 해당하는 증기 경제성.
pub fn steam_economy(product_dm_pct: f64, constants: &DesignConstants) -> f64 {
    constants
        .economy_tiers
        .iter()
        .find(|tier| product_dm_pct < tier.below_product_dm_pct)
        .map_or(constants.fallback_economy, |tier| tier.economy)
}

/// kg/h × kJ/kg → kW
pub fn power_kw(mass_kg_per_h: f64, latent_heat_kj_per_kg: f64) -> f64 {
    mass_kg_per_h * latent_heat_kj_per_kg / SECONDS_PER_HOUR
}

/// 제품 질량유량(kg/h). 제품 DM이 0 이하이면 0.
pub fn product_flow_kg_per_h(feed_dm_kg_per_h: f64, product_dm_pct: f64) -> f64 {
    if product_dm_pct > 0.0 {
        feed_dm_kg_per_h / (product_dm_pct / 100.0)
    } else {
        0.0
    }
}

/// 원액/제품 조건으로 증기량과 열부하를 계산한다.
pub fn estimate_energy(
    feed_kg_per_h: f64,
    feed_dm_kg_per_h: f64,
    product_dm_pct: f64,
    constants: &DesignConstants,
) -> EnergyBalance {
    let product_kg_per_h = product_flow_kg_per_h(feed_dm_kg_per_h, product_dm_pct);
    let evaporated_kg_per_h = feed_kg_per_h - product_kg_per_h;
    let economy = steam_economy(product_dm_pct, constants);
    let steam_kg_per_h = if economy > 0.0 {
        evaporated_kg_per_h / economy
    } else {
        0.0
    };
    let balance = EnergyBalance {
        product_kg_per_h,
        evaporated_kg_per_h,
        steam_economy: economy,
        steam_kg_per_h,
        total_thermal_kw: power_kw(evaporated_kg_per_h, constants.latent_heat_evaporation_kj_per_kg),
        steam_power_kw: power_kw(steam_kg_per_h, constants.latent_heat_evaporation_kj_per_kg),
        condenser_kw: power_kw(evaporated_kg_per_h, constants.latent_heat_condenser_kj_per_kg),
    };
    debug!(
        evaporated_kg_per_h,
        steam_kg_per_h, economy, "energy balance estimated"
    );
    balance
}
