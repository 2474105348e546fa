use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 전력 배출계수 [kg CO₂/kWh]
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.92;
/// 승용차 배출계수 [kg CO₂/km]
pub const CAR_KG_PER_KM: f64 = 0.21;
/// 대중교통 배출계수 [kg CO₂/km]
pub const TRANSIT_KG_PER_KM: f64 = 0.10;
/// 월 사용량을 일 단위로 나눌 때 쓰는 일수.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// 권장 일일 배출 한도 [kg CO₂/day]
pub const DAILY_TARGET_KG: f64 = 5.0;

/// 육류 섭취 빈도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeatFrequency {
    #[default]
    Daily,
    FewTimesWeek,
    Rarely,
    Never,
}

impl MeatFrequency {
    /// 선택지 표시 순서.
    pub const ALL: [MeatFrequency; 4] = [
        MeatFrequency::Daily,
        MeatFrequency::FewTimesWeek,
        MeatFrequency::Rarely,
        MeatFrequency::Never,
    ];

    /// 빈도별 고정 일일 배출량 [kg CO₂/day].
    pub fn daily_kg(self) -> f64 {
        match self {
            MeatFrequency::Daily => 3.3,
            MeatFrequency::FewTimesWeek => 2.0,
            MeatFrequency::Rarely => 1.0,
            MeatFrequency::Never => 0.1,
        }
    }

    /// 화면에 표시하는 기본(영문) 라벨.
    pub fn label(self) -> &'static str {
        match self {
            MeatFrequency::Daily => "Daily",
            MeatFrequency::FewTimesWeek => "Few times a week",
            MeatFrequency::Rarely => "Rarely",
            MeatFrequency::Never => "Never",
        }
    }

    /// 번역 키.
    pub fn i18n_key(self) -> &'static str {
        match self {
            MeatFrequency::Daily => "meat.daily",
            MeatFrequency::FewTimesWeek => "meat.few_times_week",
            MeatFrequency::Rarely => "meat.rarely",
            MeatFrequency::Never => "meat.never",
        }
    }
}

impl fmt::Display for MeatFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 알 수 없는 육류 섭취 빈도 문자열.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 육류 섭취 빈도: {0} (daily, few-times-a-week, rarely, never)")]
pub struct ParseMeatFrequencyError(pub String);

impl FromStr for MeatFrequency {
    type Err = ParseMeatFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        match norm.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "daily" | "1" => Ok(MeatFrequency::Daily),
            "few times a week" | "few times week" | "weekly" | "2" => {
                Ok(MeatFrequency::FewTimesWeek)
            }
            "rarely" | "3" => Ok(MeatFrequency::Rarely),
            "never" | "4" => Ok(MeatFrequency::Never),
            _ => Err(ParseMeatFrequencyError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_labels_and_short_forms() {
        for freq in MeatFrequency::ALL {
            assert_eq!(freq.label().parse::<MeatFrequency>(), Ok(freq));
        }
        assert_eq!(
            "few-times-a-week".parse::<MeatFrequency>(),
            Ok(MeatFrequency::FewTimesWeek)
        );
        assert_eq!("WEEKLY".parse::<MeatFrequency>(), Ok(MeatFrequency::FewTimesWeek));
        assert_eq!(" never ".parse::<MeatFrequency>(), Ok(MeatFrequency::Never));
    }

    #[test]
    fn rejects_unknown_frequency() {
        let err = "sometimes".parse::<MeatFrequency>().unwrap_err();
        assert_eq!(err.0, "sometimes");
    }

    #[test]
    fn default_frequency_is_daily() {
        assert_eq!(MeatFrequency::default(), MeatFrequency::Daily);
    }
}
