//! 설계 엔진 시나리오/불변식 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use evaporator_design_toolbox::evaporator::{
    self, bpe, compute_design, compute_design_with, energy, solve_cascade, solve_mass_balance,
    DesignConstants, MassBalanceError, ProcessInput,
};
use evaporator_design_toolbox::steam::saturation;

fn scenario_a() -> ProcessInput {
    ProcessInput {
        effects: 3,
        feed_flow_m3_per_h: 41.67,
        feed_dm_pct: 2.38,
        feed_tss_pct: 1.5,
        feed_temp_c: 25.0,
        product_dm_pct: 15.0,
        steam_pressure_barg: 1.0,
    }
}

#[test]
fn scenario_a_reference_design() {
    let report = compute_design(&scenario_a());

    assert!(report.error.is_empty(), "unexpected error: {}", report.error);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.effects.len(), 3);

    // 원액 41 670 kg/h, 건물 991.746 kg/h, 제품 6 611.64 kg/h
    assert_eq!(report.water_evaporated_kg_per_h, 35_058);
    assert_eq!(report.steam_needed_kg_per_h, 16_694);
    assert_eq!(report.steam_power_kw, 10_665);
    assert_eq!(report.total_thermal_load_kw, 22_398);
    assert_eq!(report.condenser_load_kw, 22_885);
    assert_relative_eq!(report.steam_economy, 2.1);
    assert_relative_eq!(report.steam_temp_c, 120.0);
    assert_relative_eq!(report.product_flow_m3_per_h, 6.61);
    assert_relative_eq!(report.feed_tds_pct, 0.88);

    let last = &report.effects[2];
    assert_eq!(last.effect, 3);
    assert_relative_eq!(last.pressure_kpa, 25.0);
    assert_relative_eq!(last.bpe_c, 6.1);
    let expected_last_bp = saturation::temperature_from_pressure(25.0) + 6.1;
    assert_abs_diff_eq!(last.boiling_temp_c, expected_last_bp, epsilon = 0.05);

    let boiling: Vec<f64> = report.effects.iter().map(|e| e.boiling_temp_c).collect();
    assert_eq!(boiling, vec![103.5, 86.9, 70.4]);
    let bpe: Vec<f64> = report.effects.iter().map(|e| e.bpe_c).collect();
    assert_eq!(bpe, vec![1.54, 3.65, 6.1]);
    for e in &report.effects {
        assert_relative_eq!(e.driving_delta_t_c, 16.5);
    }
    assert_abs_diff_eq!(report.effects[0].pressure_kpa, 108.5, epsilon = 0.11);
    assert_abs_diff_eq!(report.effects[1].pressure_kpa, 53.9, epsilon = 0.11);

    let vapor: Vec<i64> = report.effects.iter().map(|e| e.vapor_kg_per_h).collect();
    assert_eq!(vapor, vec![26_613, 5_868, 2_576]);
    let concentrate: Vec<i64> = report
        .effects
        .iter()
        .map(|e| e.concentrate_kg_per_h)
        .collect();
    assert_eq!(concentrate, vec![15_056, 9_188, 6_611]);
    assert_relative_eq!(report.effects[2].concentrate_m3_per_h, 6.61);
}

#[test]
fn scenario_b_zero_product_dry_matter() {
    let input = ProcessInput {
        product_dm_pct: 0.0,
        ..scenario_a()
    };
    let report = compute_design(&input);

    assert_eq!(report.error, "Error: Dry matter in effect 1 is zero or negative.");
    assert_eq!(report.effects.len(), 3);
    for e in &report.effects {
        assert_eq!(e.vapor_kg_per_h, 0);
        assert_eq!(e.concentrate_kg_per_h, 0);
        assert_eq!(e.vapor_m3_per_h, 0.0);
        assert_eq!(e.concentrate_m3_per_h, 0.0);
    }
    // 요약 값은 항상 읽을 수 있다
    assert_eq!(report.product_flow_m3_per_h, 0.0);
    assert_eq!(report.water_evaporated_kg_per_h, 41_670);
    assert_relative_eq!(report.steam_economy, 2.3);
}

#[test]
fn scenario_c_zero_feed_dry_matter() {
    let input = ProcessInput {
        feed_dm_pct: 0.0,
        feed_tss_pct: 0.0,
        ..scenario_a()
    };
    let report = compute_design(&input);

    assert_eq!(report.error, "Error: Zero dry matter in effect 1.");
    assert!(report
        .effects
        .iter()
        .all(|e| e.vapor_kg_per_h == 0 && e.concentrate_kg_per_h == 0));
}

#[test]
fn negative_intermediate_target_fails_from_that_effect() {
    let trajectory = [4.0, 2.0, -1.0, 8.0];
    let balance = solve_mass_balance(10_000.0, 400.0, &trajectory, 3);

    assert_eq!(
        balance.error,
        Some(MassBalanceError::NonPositiveDryMatter { effect: 2 })
    );
    assert_eq!(balance.stages.len(), 3);
    assert_relative_eq!(balance.stages[0].concentrate_kg_per_h, 20_000.0);
    assert_relative_eq!(balance.stages[0].vapor_kg_per_h, -10_000.0);
    assert_eq!(balance.stages[1].concentrate_kg_per_h, 0.0);
    // 첫 오류 이후는 계산하지 않는다
    assert_eq!(balance.stages[2].concentrate_kg_per_h, 0.0);
    assert_eq!(balance.stages[2].vapor_kg_per_h, 0.0);
}

#[test]
fn dry_matter_is_conserved_and_vapor_sums_to_evaporation() {
    let constants = DesignConstants::default();
    for effects in 1..=6 {
        for &(feed_dm, product_dm) in &[(2.38, 15.0), (5.0, 45.0), (0.5, 11.0), (12.0, 20.0)] {
            let input = ProcessInput {
                effects,
                feed_dm_pct: feed_dm,
                product_dm_pct: product_dm,
                ..scenario_a()
            };
            let feed = input.feed_flow_m3_per_h * 1000.0;
            let feed_dm_mass = feed * feed_dm / 100.0;
            let trajectory = input.dry_matter_trajectory();
            let balance = solve_mass_balance(feed, feed_dm_mass, &trajectory, effects);
            assert!(balance.error.is_none());

            let final_conc = balance.final_concentrate_kg_per_h();
            assert_relative_eq!(
                final_conc * trajectory[effects] / 100.0,
                feed_dm_mass,
                max_relative = 1e-12
            );

            let energy =
                energy::estimate_energy(feed, feed_dm_mass, product_dm, &constants);
            assert_relative_eq!(
                energy.evaporated_kg_per_h,
                feed - energy.product_kg_per_h,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                balance.total_vapor_kg_per_h(),
                energy.evaporated_kg_per_h,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn boiling_points_fall_along_the_cascade() {
    for effects in 2..=4 {
        let input = ProcessInput {
            effects,
            ..scenario_a()
        };
        let report = compute_design(&input);
        for pair in report.effects.windows(2) {
            assert!(
                pair[0].boiling_temp_c > pair[1].boiling_temp_c,
                "effects={effects}: {:?}",
                report.effects
            );
            assert!(pair[0].pressure_kpa > pair[1].pressure_kpa);
        }
    }
}

#[test]
fn higher_steam_pressure_raises_the_cascade() {
    let constants = DesignConstants::default();
    let trajectory = scenario_a().dry_matter_trajectory();
    let solve = |barg: f64| {
        let kpa = evaporator::steam_pressure_kpa_abs(barg, &constants);
        let steam_temp = saturation::temperature_from_pressure(kpa);
        solve_cascade(3, steam_temp, &trajectory, 1.5, &bpe::NACL, &constants)
    };
    let low = solve(0.5);
    let mid = solve(1.0);
    let high = solve(2.0);

    assert!(low.steam_temp_c < mid.steam_temp_c && mid.steam_temp_c < high.steam_temp_c);
    for i in 0..2 {
        assert!(low.stages[i].boiling_temp_c < mid.stages[i].boiling_temp_c);
        assert!(mid.stages[i].boiling_temp_c < high.stages[i].boiling_temp_c);
    }
    // 마지막 효용은 복수기 압력에 묶여 있다
    assert_eq!(low.stages[2].boiling_temp_c, high.stages[2].boiling_temp_c);
    assert_eq!(high.stages[2].pressure_kpa, constants.terminal_pressure_kpa);
}

#[test]
fn low_steam_pressure_floors_driving_delta_t_and_warns() {
    let input = ProcessInput {
        steam_pressure_barg: -0.8,
        ..scenario_a()
    };
    let report = compute_design(&input);

    assert!(report.error.is_empty());
    for e in &report.effects {
        assert_relative_eq!(e.driving_delta_t_c, 0.1);
    }
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("cascade is infeasible")));
    assert_eq!(
        report
            .warnings
            .iter()
            .filter(|w| w.starts_with("Driving temperature difference"))
            .count(),
        3
    );
}

#[test]
fn effect_count_outside_range_still_produces_a_report() {
    let none = compute_design(&ProcessInput {
        effects: 0,
        ..scenario_a()
    });
    assert!(none.effects.is_empty());
    assert!(none.error.is_empty());
    assert!(none.warnings.iter().any(|w| w.contains("Effect count 0")));
    assert_eq!(none.water_evaporated_kg_per_h, 35_058);

    let many = compute_design(&ProcessInput {
        effects: 8,
        ..scenario_a()
    });
    assert_eq!(many.effects.len(), 8);
    assert!(many.error.is_empty());
    assert!(many.warnings.iter().any(|w| w.contains("Effect count 8")));
}

#[test]
fn tss_above_dry_matter_is_flagged_not_rejected() {
    let report = compute_design(&ProcessInput {
        feed_tss_pct: 20.0,
        ..scenario_a()
    });
    assert!(report.error.is_empty());
    assert!(report.warnings.iter().any(|w| w.starts_with("Feed TSS")));
    // BPE 인자가 하한(0.01 %)으로 고정된다
    for e in &report.effects {
        assert_relative_eq!(e.bpe_c, 0.0);
    }
}

#[test]
fn zero_feed_flow_guards_divisions() {
    let report = compute_design(&ProcessInput {
        feed_flow_m3_per_h: 0.0,
        ..scenario_a()
    });
    assert_eq!(report.feed_tds_pct, 0.0);
    assert_eq!(report.water_evaporated_kg_per_h, 0);
    assert_eq!(report.error, "Error: Zero dry matter in effect 1.");
}

#[test]
fn steam_economy_tiers() {
    let constants = DesignConstants::default();
    assert_relative_eq!(energy::steam_economy(11.99, &constants), 2.3);
    assert_relative_eq!(energy::steam_economy(12.0, &constants), 2.1);
    assert_relative_eq!(energy::steam_economy(17.9, &constants), 2.1);
    assert_relative_eq!(energy::steam_economy(18.0, &constants), 1.8);
    assert_relative_eq!(energy::steam_economy(60.0, &constants), 1.8);
}

#[test]
fn custom_constants_change_the_design() {
    let constants = DesignConstants {
        terminal_pressure_kpa: 19.9,
        latent_heat_evaporation_kj_per_kg: 3600.0,
        ..DesignConstants::default()
    };
    let report = compute_design_with(&scenario_a(), &constants);
    assert_eq!(report.total_thermal_load_kw, report.water_evaporated_kg_per_h);
    assert_relative_eq!(report.effects[2].pressure_kpa, 19.9);
    assert_abs_diff_eq!(report.effects[2].boiling_temp_c, 66.1, epsilon = 0.05);
}

#[test]
fn repeated_calls_are_identical() {
    let input = scenario_a();
    let first = compute_design(&input);
    let second = compute_design(&input);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn effect_count_above_engine_limit_returns_an_error_report() {
    for effects in [usize::MAX, 1_000_000_000, evaporator::MAX_EFFECTS + 1] {
        let report = compute_design(&ProcessInput {
            effects,
            ..scenario_a()
        });
        assert_eq!(
            report.error,
            format!(
                "Error: Effect count {effects} exceeds the supported maximum of {}.",
                evaporator::MAX_EFFECTS
            )
        );
        assert!(report.effects.is_empty());
        // 플랜트 합계는 효용 수와 무관하게 계산된다
        assert_eq!(report.water_evaporated_kg_per_h, 35_058);
        assert_relative_eq!(report.steam_temp_c, 120.0);
    }
}

#[test]
fn effect_count_at_engine_limit_is_computed() {
    let report = compute_design(&ProcessInput {
        effects: evaporator::MAX_EFFECTS,
        ..scenario_a()
    });
    assert!(report.error.is_empty());
    assert_eq!(report.effects.len(), evaporator::MAX_EFFECTS);
}

#[test]
fn engine_limit_follows_design_constants() {
    let constants = DesignConstants {
        max_effects: 2,
        ..DesignConstants::default()
    };
    let report = compute_design_with(&scenario_a(), &constants);
    assert!(report.error.contains("maximum of 2"));
    assert!(report.effects.is_empty());
}

#[test]
fn non_finite_dry_matter_is_reported_not_evaporated() {
    let nan_product = compute_design(&ProcessInput {
        product_dm_pct: f64::NAN,
        ..scenario_a()
    });
    assert_eq!(
        nan_product.error,
        "Error: Dry matter in effect 1 is zero or negative."
    );
    assert!(nan_product
        .effects
        .iter()
        .all(|e| e.vapor_kg_per_h == 0 && e.concentrate_kg_per_h == 0));

    let nan_feed = compute_design(&ProcessInput {
        feed_dm_pct: f64::NAN,
        ..scenario_a()
    });
    assert!(nan_feed.has_error());
    assert!(nan_feed.effects.iter().all(|e| e.concentrate_kg_per_h == 0));
}

#[test]
fn non_finite_feed_dry_matter_mass_stops_the_balance() {
    let balance = solve_mass_balance(10_000.0, f64::NAN, &[4.0, 8.0, 12.0], 2);
    assert_eq!(balance.error, Some(MassBalanceError::ZeroDryMatter { effect: 1 }));
    assert!(balance.stages.iter().all(|s| *s == Default::default()));

    let infinite_target = solve_mass_balance(10_000.0, 400.0, &[4.0, f64::INFINITY, 12.0], 2);
    assert_eq!(
        infinite_target.error,
        Some(MassBalanceError::NonPositiveDryMatter { effect: 1 })
    );
}

#[test]
fn report_names_the_bpe_curve() {
    let report = compute_design(&scenario_a());
    assert_eq!(report.bpe_curve, bpe::NACL.name);
    assert_eq!(report.bpe_curve, "NaCl");
}
