//! 다중효용 증발관 예비설계 엔진.
//!
//! 원액/유틸리티 입력 한 세트로 효용별 압력·비점·유량과 플랜트 증기 소비량,
//! 열부하, 복수기 열량을 계산한다. 정상상태 모델이며 호출 사이에 상태를 갖지 않는다.
//! 어떤 숫자 입력에도 패닉하거나 `Err`를 돌려주지 않고, 문제가 있으면 보고서의
//! `error`/`warnings`에 기록한다.

pub mod bpe;
pub mod cascade;
pub mod constants;
pub mod energy;
pub mod input;
pub mod mass_balance;
pub mod report;

use tracing::{debug, warn};

use crate::steam::saturation;

pub use cascade::{solve_cascade, Cascade, CascadeStage};
pub use constants::{DesignConstants, EconomyTier, MAX_EFFECTS};
pub use energy::{estimate_energy, EnergyBalance};
pub use input::ProcessInput;
pub use mass_balance::{solve_mass_balance, MassBalance, MassBalanceError, StageFlows};
pub use report::{EffectRecord, ProcessReport};

/// 기본 설계 상수로 계산한다.
pub fn compute_design(input: &ProcessInput) -> ProcessReport {
    compute_design_with(input, &DesignConstants::default())
}

/// 지정한 설계 상수로 계산한다.
pub fn compute_design_with(input: &ProcessInput, constants: &DesignConstants) -> ProcessReport {
    let steam_pressure_kpa = steam_pressure_kpa_abs(input.steam_pressure_barg, constants);
    let steam_temp_c = saturation::temperature_from_pressure(steam_pressure_kpa);

    let feed_kg_per_h = input.feed_flow_m3_per_h * 1000.0 * constants.feed_density_kg_per_l;
    let feed_dm_kg_per_h = input.feed_dm_pct / 100.0 * feed_kg_per_h;
    let feed_tss_kg_per_h = input.feed_tss_pct / 100.0 * feed_kg_per_h;
    let feed_tds_pct = if feed_kg_per_h > 0.0 {
        (feed_dm_kg_per_h - feed_tss_kg_per_h) / feed_kg_per_h * 100.0
    } else {
        0.0
    };

    let energy = estimate_energy(
        feed_kg_per_h,
        feed_dm_kg_per_h,
        input.product_dm_pct,
        constants,
    );

    // 상한을 넘는 효용 수는 할당 없이 오류 보고서로 끝낸다
    if input.effects > constants.max_effects {
        let error = format!(
            "Error: Effect count {} exceeds the supported maximum of {}.",
            input.effects, constants.max_effects
        );
        warn!(effects = input.effects, max = constants.max_effects, "{error}");
        let cascade = Cascade {
            steam_temp_c,
            step_c: 0.0,
            stages: Vec::new(),
        };
        let mass_balance = MassBalance {
            feed_kg_per_h,
            feed_dm_kg_per_h,
            stages: Vec::new(),
            error: None,
        };
        return report::assemble(report::ReportParts {
            input,
            density_kg_per_l: constants.feed_density_kg_per_l,
            bpe_curve: bpe::NACL.name,
            cascade: &cascade,
            mass_balance: &mass_balance,
            energy: &energy,
            feed_tds_pct,
            warnings: Vec::new(),
            error: Some(error),
        });
    }

    let trajectory = input.dry_matter_trajectory();
    let cascade = solve_cascade(
        input.effects,
        steam_temp_c,
        &trajectory,
        input.feed_tss_pct,
        &bpe::NACL,
        constants,
    );
    let mass_balance =
        solve_mass_balance(feed_kg_per_h, feed_dm_kg_per_h, &trajectory, input.effects);

    let warnings = collect_warnings(input, steam_pressure_kpa, &cascade, constants);
    debug!(
        effects = input.effects,
        warnings = warnings.len(),
        error = mass_balance.error.is_some(),
        "design computed"
    );

    report::assemble(report::ReportParts {
        input,
        density_kg_per_l: constants.feed_density_kg_per_l,
        bpe_curve: bpe::NACL.name,
        cascade: &cascade,
        mass_balance: &mass_balance,
        energy: &energy,
        feed_tds_pct,
        warnings,
        error: None,
    })
}

/// 게이지압(bar g) → 절대압(kPa).
pub fn steam_pressure_kpa_abs(steam_pressure_barg: f64, constants: &DesignConstants) -> f64 {
    (steam_pressure_barg + constants.atmospheric_pressure_bar) * 100.0
}

fn collect_warnings(
    input: &ProcessInput,
    steam_pressure_kpa: f64,
    cascade: &Cascade,
    constants: &DesignConstants,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if !constants.recommended_effects().contains(&input.effects) {
        warnings.push(format!(
            "Effect count {} is outside the recommended range {}–{}.",
            input.effects, constants.min_recommended_effects, constants.max_recommended_effects
        ));
    }
    if input.feed_tss_pct > input.feed_dm_pct {
        warnings.push(format!(
            "Feed TSS ({} %) exceeds feed dry matter ({} %); BPE uses the minimum solute concentration.",
            input.feed_tss_pct, input.feed_dm_pct
        ));
    }
    if input.product_dm_pct > 0.0 && input.product_dm_pct < input.feed_dm_pct {
        warnings.push(format!(
            "Product dry matter ({} %) is below feed dry matter ({} %); vapor flows are negative.",
            input.product_dm_pct, input.feed_dm_pct
        ));
    }

    let table = &saturation::SATURATION_TABLE;
    if steam_pressure_kpa < table.x_min() || steam_pressure_kpa > table.x_max() {
        warnings.push(format!(
            "Steam pressure {:.1} kPa(abs) is outside the saturation table ({}–{} kPa); steam temperature is clamped.",
            steam_pressure_kpa,
            table.x_min(),
            table.x_max()
        ));
    }

    if !cascade.stages.is_empty() && cascade.step_c <= 0.0 {
        warnings.push(format!(
            "Steam temperature {:.1} °C does not exceed the last effect boiling point; the cascade is infeasible.",
            cascade.steam_temp_c
        ));
    }
    for (i, stage) in cascade.stages.iter().enumerate() {
        if stage.is_driving_delta_t_floored() {
            warnings.push(format!(
                "Driving temperature difference in effect {} ({:.2} °C) was raised to {} °C.",
                i + 1,
                stage.raw_driving_delta_t_c,
                constants.min_driving_delta_t_c
            ));
        }
    }

    warnings
}
