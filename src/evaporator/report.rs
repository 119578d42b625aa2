use serde::Serialize;

use super::cascade::Cascade;
use super::energy::EnergyBalance;
use super::input::ProcessInput;
use super::mass_balance::MassBalance;

/// 효용 하나의 표시용 결과. 숫자는 표시 정밀도로 반올림되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectRecord {
    /// 효용 번호(1 = 첫/가장 뜨거운 효용)
    pub effect: usize,
    pub pressure_kpa: f64,
    pub boiling_temp_c: f64,
    pub bpe_c: f64,
    /// 구동 온도차(LMTD 대용)
    pub driving_delta_t_c: f64,
    pub vapor_kg_per_h: i64,
    pub vapor_m3_per_h: f64,
    /// 효용을 떠나는 농축액
    pub concentrate_kg_per_h: i64,
    pub concentrate_m3_per_h: f64,
}

/// 설계 계산 전체 결과.
///
/// `error`가 비어 있지 않으면 효용별 유량은 실패한 효용부터 0이다.
/// 원액/제품 요약 값은 오류와 관계없이 항상 읽을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    pub feed_flow_m3_per_h: f64,
    pub feed_dm_pct: f64,
    pub feed_tss_pct: f64,
    pub feed_tds_pct: f64,
    pub product_flow_m3_per_h: f64,
    pub product_dm_pct: f64,
    pub water_evaporated_kg_per_h: i64,
    pub steam_needed_kg_per_h: i64,
    pub steam_power_kw: i64,
    pub steam_economy: f64,
    pub steam_temp_c: f64,
    pub total_thermal_load_kw: i64,
    pub condenser_load_kw: i64,
    /// BPE 계산에 쓴 용질 곡선 이름
    pub bpe_curve: String,
    pub effects: Vec<EffectRecord>,
    /// 계산은 됐지만 확인이 필요한 조건
    pub warnings: Vec<String>,
    /// 빈 문자열 = 오류 없음
    pub error: String,
}

impl ProcessReport {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// 소수점 `decimals` 자리 반올림.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// 정수 표시(소수부 버림).
fn truncate(value: f64) -> i64 {
    value as i64
}

fn to_m3_per_h(kg_per_h: f64, density_kg_per_l: f64) -> f64 {
    if density_kg_per_l > 0.0 {
        kg_per_h / (1000.0 * density_kg_per_l)
    } else {
        0.0
    }
}

/// 각 계산기의 반올림 전 결과를 하나의 보고서로 묶는다.
pub(crate) struct ReportParts<'a> {
    pub input: &'a ProcessInput,
    pub density_kg_per_l: f64,
    pub bpe_curve: &'static str,
    pub cascade: &'a Cascade,
    pub mass_balance: &'a MassBalance,
    pub energy: &'a EnergyBalance,
    pub feed_tds_pct: f64,
    pub warnings: Vec<String>,
    /// 물질수지 오류보다 우선하는 입력 오류
    pub error: Option<String>,
}

pub(crate) fn assemble(parts: ReportParts<'_>) -> ProcessReport {
    let ReportParts {
        input,
        density_kg_per_l,
        bpe_curve,
        cascade,
        mass_balance,
        energy,
        feed_tds_pct,
        warnings,
        error,
    } = parts;

    let effects = cascade
        .stages
        .iter()
        .zip(&mass_balance.stages)
        .enumerate()
        .map(|(i, (stage, flows))| EffectRecord {
            effect: i + 1,
            pressure_kpa: round_to(stage.pressure_kpa, 1),
            boiling_temp_c: round_to(stage.boiling_temp_c, 1),
            bpe_c: round_to(stage.bpe_c, 2),
            driving_delta_t_c: round_to(stage.driving_delta_t_c, 1),
            vapor_kg_per_h: truncate(flows.vapor_kg_per_h),
            vapor_m3_per_h: round_to(to_m3_per_h(flows.vapor_kg_per_h, density_kg_per_l), 2),
            concentrate_kg_per_h: truncate(flows.concentrate_kg_per_h),
            concentrate_m3_per_h: round_to(
                to_m3_per_h(flows.concentrate_kg_per_h, density_kg_per_l),
                2,
            ),
        })
        .collect();

    ProcessReport {
        feed_flow_m3_per_h: input.feed_flow_m3_per_h,
        feed_dm_pct: input.feed_dm_pct,
        feed_tss_pct: input.feed_tss_pct,
        feed_tds_pct: round_to(feed_tds_pct, 2),
        product_flow_m3_per_h: round_to(to_m3_per_h(energy.product_kg_per_h, density_kg_per_l), 2),
        product_dm_pct: input.product_dm_pct,
        water_evaporated_kg_per_h: truncate(energy.evaporated_kg_per_h),
        steam_needed_kg_per_h: truncate(energy.steam_kg_per_h),
        steam_power_kw: truncate(energy.steam_power_kw),
        steam_economy: round_to(energy.steam_economy, 2),
        steam_temp_c: round_to(cascade.steam_temp_c, 1),
        total_thermal_load_kw: truncate(energy.total_thermal_kw),
        condenser_load_kw: truncate(energy.condenser_kw),
        bpe_curve: bpe_curve.to_string(),
        effects,
        warnings,
        error: error
            .or_else(|| mass_balance.error.map(|e| e.to_string()))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(3.14159, 2), 3.14);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(truncate(2576.9), 2576);
        assert_eq!(truncate(-0.7), 0);
        assert_eq!(truncate(f64::NAN), 0);
    }

    #[test]
    fn volume_guards_zero_density() {
        assert_eq!(to_m3_per_h(5000.0, 1.0), 5.0);
        assert_eq!(to_m3_per_h(5000.0, 0.0), 0.0);
    }
}
