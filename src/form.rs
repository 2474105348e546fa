//! 입력 폼 스냅샷. 편집마다 새 값으로 교체되며, 음수 입력은 0으로 고정된다.

use crate::footprint::{self, non_negative, FootprintInput, FootprintReport, MeatFrequency};

/// 폼 숫자 입력의 증감 단위.
pub const INPUT_STEP: f64 = 0.1;

/// 폼에 가해지는 한 번의 편집.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEdit {
    Electricity(f64),
    CarDistance(f64),
    TransitDistance(f64),
    MeatFrequency(MeatFrequency),
    Reset,
}

/// 현재 입력값 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormState {
    input: FootprintInput,
}

impl FormState {
    /// 입력값으로 폼을 만든다. 음수, NaN, 무한대는 0으로 고정한다.
    pub fn new(input: FootprintInput) -> Self {
        Self {
            input: FootprintInput {
                electricity_kwh_per_month: non_negative(input.electricity_kwh_per_month),
                car_km_per_day: non_negative(input.car_km_per_day),
                transit_km_per_day: non_negative(input.transit_km_per_day),
                meat_frequency: input.meat_frequency,
            },
        }
    }

    pub fn input(&self) -> &FootprintInput {
        &self.input
    }

    /// 편집을 적용한 새 스냅샷을 돌려준다.
    pub fn apply(self, edit: FormEdit) -> FormState {
        let mut input = self.input;
        match edit {
            FormEdit::Electricity(v) => input.electricity_kwh_per_month = non_negative(v),
            FormEdit::CarDistance(v) => input.car_km_per_day = non_negative(v),
            FormEdit::TransitDistance(v) => input.transit_km_per_day = non_negative(v),
            FormEdit::MeatFrequency(f) => input.meat_frequency = f,
            FormEdit::Reset => return FormState::reset(),
        }
        FormState { input }
    }

    /// 기본값(0, 0, 0, Daily)으로 되돌린다.
    pub fn reset() -> FormState {
        tracing::debug!("form reset to defaults");
        FormState::default()
    }

    /// 현재 입력으로 결과를 계산한다.
    pub fn report(&self) -> FootprintReport {
        footprint::assess(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_edit_is_clamped_to_zero() {
        let form = FormState::default().apply(FormEdit::CarDistance(-4.2));
        assert_eq!(form.input().car_km_per_day, 0.0);
        let form = form.apply(FormEdit::Electricity(f64::NAN));
        assert_eq!(form.input().electricity_kwh_per_month, 0.0);
    }

    #[test]
    fn infinite_edit_keeps_report_finite() {
        let form = FormState::default()
            .apply(FormEdit::Electricity(f64::INFINITY))
            .apply(FormEdit::TransitDistance(f64::NEG_INFINITY));
        assert_eq!(form.input().electricity_kwh_per_month, 0.0);
        assert_eq!(form.input().transit_km_per_day, 0.0);
        let report = form.report();
        assert!((report.total - 3.3).abs() < 1e-12);
        assert!(report.slices.iter().all(|s| s.percent_label() == "100.0%"));
    }

    #[test]
    fn edits_replace_only_their_field() {
        let form = FormState::default()
            .apply(FormEdit::Electricity(120.0))
            .apply(FormEdit::MeatFrequency(MeatFrequency::Rarely));
        assert_eq!(form.input().electricity_kwh_per_month, 120.0);
        assert_eq!(form.input().car_km_per_day, 0.0);
        assert_eq!(form.input().meat_frequency, MeatFrequency::Rarely);
    }

    #[test]
    fn new_clamps_raw_input() {
        let form = FormState::new(FootprintInput {
            electricity_kwh_per_month: -1.0,
            car_km_per_day: 3.0,
            transit_km_per_day: -0.5,
            meat_frequency: MeatFrequency::Never,
        });
        assert_eq!(form.input().electricity_kwh_per_month, 0.0);
        assert_eq!(form.input().car_km_per_day, 3.0);
        assert_eq!(form.input().transit_km_per_day, 0.0);
    }
}
