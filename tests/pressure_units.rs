//! 가열증기 압력 입력 단위 회귀 테스트 (게이지 기준).
use approx::assert_relative_eq;
use evaporator_design_toolbox::evaporator::{self, DesignConstants};
use evaporator_design_toolbox::units::pressure::{from_bar, to_bar};
use evaporator_design_toolbox::units::{convert_pressure, PressureUnit};

#[test]
fn gauge_units_to_bar() {
    assert_relative_eq!(to_bar(100.0, PressureUnit::KiloPascal), 1.0);
    assert_relative_eq!(to_bar(1500.0, PressureUnit::MilliBar), 1.5);
    assert_relative_eq!(to_bar(0.2, PressureUnit::MegaPascal), 2.0);
    assert_relative_eq!(to_bar(1.0, PressureUnit::KgPerCm2), 0.980665);
    assert_relative_eq!(to_bar(14.5038, PressureUnit::Psi), 1.0, epsilon = 1e-4);
}

#[test]
fn mmhg_zero_is_atmosphere_and_negative_is_vacuum() {
    assert_eq!(to_bar(0.0, PressureUnit::MmHg), 0.0);
    // -600 mmHg(g) => 약 0.2 bar abs
    let barg = to_bar(-600.0, PressureUnit::MmHg);
    let kpa_abs = evaporator::steam_pressure_kpa_abs(barg, &DesignConstants::default());
    assert_relative_eq!(kpa_abs, 20.0, epsilon = 0.01);
}

#[test]
fn conversions_are_consistent() {
    for unit in [
        PressureUnit::Bar,
        PressureUnit::MilliBar,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::KgPerCm2,
        PressureUnit::Psi,
        PressureUnit::MmHg,
    ] {
        assert_relative_eq!(to_bar(from_bar(1.7, unit), unit), 1.7, max_relative = 1e-12);
    }
    assert_relative_eq!(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal),
        100.0
    );
    assert_relative_eq!(
        convert_pressure(2.0, PressureUnit::KgPerCm2, PressureUnit::MegaPascal),
        0.196133,
        max_relative = 1e-9
    );
}

#[test]
fn gauge_to_absolute_adds_one_bar() {
    let constants = DesignConstants::default();
    assert_relative_eq!(evaporator::steam_pressure_kpa_abs(1.0, &constants), 200.0);
    assert_relative_eq!(evaporator::steam_pressure_kpa_abs(0.0, &constants), 100.0);
    assert_relative_eq!(evaporator::steam_pressure_kpa_abs(-0.8, &constants), 20.0, epsilon = 1e-9);
}
