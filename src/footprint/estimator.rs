use std::fmt;

use super::advice::{advice_for, Tip};
use super::chart::{chart_slices, ChartSlice};
use super::factors::{
    MeatFrequency, CAR_KG_PER_KM, DAILY_TARGET_KG, DAYS_PER_MONTH, ELECTRICITY_KG_PER_KWH,
    TRANSIT_KG_PER_KM,
};

/// 입력 필드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Electricity,
    CarDistance,
    TransitDistance,
}

impl InputField {
    /// 번역 키.
    pub fn i18n_key(self) -> &'static str {
        match self {
            InputField::Electricity => "field.electricity",
            InputField::CarDistance => "field.car_distance",
            InputField::TransitDistance => "field.transit_distance",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Electricity => "전력 사용량",
            InputField::CarDistance => "승용차 이동거리",
            InputField::TransitDistance => "대중교통 이동거리",
        };
        f.write_str(name)
    }
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// 음수 입력
    #[error("{field} 값은 0 이상이어야 합니다: {value}")]
    Negative { field: InputField, value: f64 },
    /// NaN/무한대 입력
    #[error("{field} 값이 유한한 숫자가 아닙니다.")]
    NotFinite { field: InputField },
}

/// 탄소 발자국 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootprintInput {
    /// 월간 전력 사용량 [kWh/month]
    pub electricity_kwh_per_month: f64,
    /// 승용차 이동거리 [km/day]
    pub car_km_per_day: f64,
    /// 대중교통 이동거리 [km/day]
    pub transit_km_per_day: f64,
    /// 육류 섭취 빈도
    pub meat_frequency: MeatFrequency,
}

impl Default for FootprintInput {
    fn default() -> Self {
        Self {
            electricity_kwh_per_month: 0.0,
            car_km_per_day: 0.0,
            transit_km_per_day: 0.0,
            meat_frequency: MeatFrequency::Daily,
        }
    }
}

impl FootprintInput {
    /// 음수나 NaN을 거부하고 입력을 생성한다.
    pub fn new(
        electricity_kwh_per_month: f64,
        car_km_per_day: f64,
        transit_km_per_day: f64,
        meat_frequency: MeatFrequency,
    ) -> Result<Self, InputError> {
        Ok(Self {
            electricity_kwh_per_month: validate(InputField::Electricity, electricity_kwh_per_month)?,
            car_km_per_day: validate(InputField::CarDistance, car_km_per_day)?,
            transit_km_per_day: validate(InputField::TransitDistance, transit_km_per_day)?,
            meat_frequency,
        })
    }
}

fn validate(field: InputField, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// 최소값 0으로 고정한다. 음수, NaN, 무한대는 0이 된다.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// 카테고리별 일일 배출량 [kg CO₂/day].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBreakdown {
    pub electricity: f64,
    pub car: f64,
    pub transit: f64,
    pub meat: f64,
}

impl EmissionBreakdown {
    /// 네 카테고리 합계.
    pub fn total(&self) -> f64 {
        self.electricity + self.car + self.transit + self.meat
    }
}

/// 표시 계층에 넘기는 계산 결과 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintReport {
    pub breakdown: EmissionBreakdown,
    /// 일일 총 배출량 [kg CO₂/day]
    pub total: f64,
    /// 권장 한도 대비 비율(0~1)
    pub progress: f64,
    /// 0보다 큰 카테고리만 담은 차트 조각
    pub slices: Vec<ChartSlice>,
    /// 임계값을 넘은 카테고리의 절감 팁
    pub tips: Vec<Tip>,
}

impl FootprintReport {
    /// 진행률을 정수 퍼센트로 버림 변환한다.
    pub fn progress_percent(&self) -> u32 {
        (self.progress * 100.0) as u32
    }
}

/// 고정 배출계수로 카테고리별 배출량을 계산한다.
pub fn estimate(input: &FootprintInput) -> EmissionBreakdown {
    EmissionBreakdown {
        electricity: non_negative(input.electricity_kwh_per_month) * ELECTRICITY_KG_PER_KWH
            / DAYS_PER_MONTH,
        car: non_negative(input.car_km_per_day) * CAR_KG_PER_KM,
        transit: non_negative(input.transit_km_per_day) * TRANSIT_KG_PER_KM,
        meat: input.meat_frequency.daily_kg(),
    }
}

/// 권장 일일 한도(5 kg) 대비 비율. 항상 0~1 범위이며 NaN은 0으로 본다.
pub fn progress_ratio(total: f64) -> f64 {
    if total.is_nan() {
        return 0.0;
    }
    (total.max(0.0) / DAILY_TARGET_KG).min(1.0)
}

/// 배출량, 진행률, 차트 조각, 팁을 한 번에 계산한다.
pub fn assess(input: &FootprintInput) -> FootprintReport {
    let breakdown = estimate(input);
    let total = breakdown.total();
    let report = FootprintReport {
        breakdown,
        total,
        progress: progress_ratio(total),
        slices: chart_slices(&breakdown),
        tips: advice_for(&breakdown),
    };
    tracing::debug!(
        total = report.total,
        progress = report.progress,
        tips = report.tips.len(),
        "footprint assessed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan_inputs() {
        let err = FootprintInput::new(-1.0, 0.0, 0.0, MeatFrequency::Daily).unwrap_err();
        assert_eq!(
            err,
            InputError::Negative {
                field: InputField::Electricity,
                value: -1.0
            }
        );
        let err = FootprintInput::new(0.0, 0.0, f64::NAN, MeatFrequency::Daily).unwrap_err();
        assert_eq!(
            err,
            InputError::NotFinite {
                field: InputField::TransitDistance
            }
        );
        assert!(FootprintInput::new(0.0, f64::INFINITY, 0.0, MeatFrequency::Daily).is_err());
    }

    #[test]
    fn negative_fields_are_clamped_by_estimator() {
        let input = FootprintInput {
            electricity_kwh_per_month: -300.0,
            car_km_per_day: f64::NAN,
            transit_km_per_day: -5.0,
            meat_frequency: MeatFrequency::Rarely,
        };
        let b = estimate(&input);
        assert_eq!(b.electricity, 0.0);
        assert_eq!(b.car, 0.0);
        assert_eq!(b.transit, 0.0);
        assert_eq!(b.total(), 1.0);
    }

    #[test]
    fn infinite_fields_count_as_zero() {
        let input = FootprintInput {
            electricity_kwh_per_month: f64::INFINITY,
            car_km_per_day: f64::NEG_INFINITY,
            transit_km_per_day: 2.0,
            meat_frequency: MeatFrequency::Never,
        };
        let report = assess(&input);
        assert_eq!(report.breakdown.electricity, 0.0);
        assert_eq!(report.breakdown.car, 0.0);
        assert!(report.total.is_finite());
        for slice in &report.slices {
            assert!(slice.share.is_finite(), "{slice:?}");
            assert!(!slice.percent_label().contains("NaN"));
        }
    }

    #[test]
    fn progress_ratio_is_clamped() {
        assert_eq!(progress_ratio(0.0), 0.0);
        assert_eq!(progress_ratio(-3.0), 0.0);
        assert_eq!(progress_ratio(5.0), 1.0);
        assert_eq!(progress_ratio(1.0e9), 1.0);
        assert_eq!(progress_ratio(f64::INFINITY), 1.0);
        assert_eq!(progress_ratio(f64::NAN), 0.0);
        assert!((progress_ratio(2.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_percent_truncates() {
        let report = assess(&FootprintInput {
            meat_frequency: MeatFrequency::Never,
            ..FootprintInput::default()
        });
        assert_eq!(report.progress_percent(), 2);
    }
}
