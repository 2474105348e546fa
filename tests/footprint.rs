//! 배출량 계산 회귀 테스트.
use carbon_footprint_calculator::footprint::{
    assess, estimate, progress_ratio, Category, FootprintInput, MeatFrequency, Tip,
};
use carbon_footprint_calculator::form::{FormEdit, FormState};

fn input(e: f64, car: f64, transit: f64, meat: MeatFrequency) -> FootprintInput {
    FootprintInput::new(e, car, transit, meat).expect("valid input")
}

#[test]
fn typical_household_exceeds_target() {
    let report = assess(&input(300.0, 10.0, 0.0, MeatFrequency::Daily));
    let b = report.breakdown;
    assert!((b.electricity - 9.2).abs() < 1e-9, "electricity={}", b.electricity);
    assert!((b.car - 2.1).abs() < 1e-9, "car={}", b.car);
    assert_eq!(b.transit, 0.0);
    assert_eq!(b.meat, 3.3);
    assert!((report.total - 14.6).abs() < 1e-9, "total={}", report.total);
    assert_eq!(report.progress, 1.0);
    assert_eq!(report.progress_percent(), 100);
}

#[test]
fn all_zero_vegetarian_is_minimal() {
    let report = assess(&input(0.0, 0.0, 0.0, MeatFrequency::Never));
    assert!((report.total - 0.1).abs() < 1e-12);
    assert!((report.progress - 0.02).abs() < 1e-12);
    assert!(report.tips.is_empty());
    assert_eq!(report.slices.len(), 1);
    assert_eq!(report.slices[0].category, Category::MeatConsumption);
    assert_eq!(report.slices[0].percent_label(), "100.0%");
}

#[test]
fn total_is_exact_sum_of_components() {
    let samples = [0.0, 0.1, 1.0, 4.75, 33.3, 250.0, 1.0e6];
    for (i, &e) in samples.iter().enumerate() {
        for &car in &samples {
            let transit = samples[(i + 3) % samples.len()];
            let freq = MeatFrequency::ALL[i % MeatFrequency::ALL.len()];
            let b = estimate(&input(e, car, transit, freq));
            let total = b.total();
            assert_eq!(total, b.electricity + b.car + b.transit + b.meat);
            assert!(total >= 0.0);
            for part in [b.electricity, b.car, b.transit, b.meat] {
                assert!(part >= 0.0 && part <= total);
            }
        }
    }
}

#[test]
fn meat_emission_only_takes_table_values() {
    let allowed = [3.3, 2.0, 1.0, 0.1];
    for freq in MeatFrequency::ALL {
        let b = estimate(&input(12.0, 3.0, 7.0, freq));
        assert!(allowed.contains(&b.meat), "unexpected meat value {}", b.meat);
    }
    assert_eq!(MeatFrequency::FewTimesWeek.daily_kg(), 2.0);
}

#[test]
fn progress_stays_in_unit_interval() {
    for total in [0.0, 0.1, 4.99, 5.0, 5.01, 1.0e12, f64::MAX] {
        let p = progress_ratio(total);
        assert!((0.0..=1.0).contains(&p), "total={total} progress={p}");
    }
}

#[test]
fn tips_follow_category_thresholds() {
    // 전력 30 kWh/월 → 0.92 kg/일: 팁 없음
    let report = assess(&input(30.0, 0.0, 100.0, MeatFrequency::Rarely));
    assert!(report.tips.is_empty());

    let report = assess(&input(300.0, 10.0, 0.0, MeatFrequency::FewTimesWeek));
    assert_eq!(
        report.tips,
        vec![
            Tip::EfficientAppliances,
            Tip::UnplugDevices,
            Tip::SharedTransport,
            Tip::ElectricVehicles,
            Tip::PlantBasedMeals,
        ]
    );
}

#[test]
fn chart_shares_sum_to_one_and_skip_zero() {
    let report = assess(&input(150.0, 0.0, 12.0, MeatFrequency::Daily));
    let categories: Vec<_> = report.slices.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Electricity,
            Category::PublicTransport,
            Category::MeatConsumption
        ]
    );
    let share_sum: f64 = report.slices.iter().map(|s| s.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-12);
    let sweep_sum: f64 = report.slices.iter().map(|s| s.sweep_deg).sum();
    assert!((sweep_sum - 360.0).abs() < 1e-9);
    assert_eq!(report.slices[0].start_angle_deg, 90.0);
}

#[test]
fn reset_restores_defaults_from_any_state() {
    let busy = FormState::default()
        .apply(FormEdit::Electricity(999.0))
        .apply(FormEdit::CarDistance(42.0))
        .apply(FormEdit::TransitDistance(8.5))
        .apply(FormEdit::MeatFrequency(MeatFrequency::Never));
    let reset = busy.apply(FormEdit::Reset);
    let i = reset.input();
    assert_eq!(i.electricity_kwh_per_month, 0.0);
    assert_eq!(i.car_km_per_day, 0.0);
    assert_eq!(i.transit_km_per_day, 0.0);
    assert_eq!(i.meat_frequency, MeatFrequency::Daily);
    assert_eq!(reset, FormState::reset());
}

#[test]
fn negative_cli_input_is_rejected() {
    let err = FootprintInput::new(0.0, -2.0, 0.0, MeatFrequency::Daily).unwrap_err();
    assert!(err.to_string().contains("승용차"), "{err}");
}
