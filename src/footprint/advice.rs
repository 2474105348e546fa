use super::estimator::EmissionBreakdown;

/// 팁이 나타나기 시작하는 카테고리별 배출량 [kg CO₂/day]. 초과일 때만 해당.
pub const TIP_THRESHOLD_KG: f64 = 1.0;

/// 배출 절감 팁.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tip {
    EfficientAppliances,
    UnplugDevices,
    SharedTransport,
    ElectricVehicles,
    PlantBasedMeals,
}

impl Tip {
    /// 번역 키.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tip::EfficientAppliances => "tip.efficient_appliances",
            Tip::UnplugDevices => "tip.unplug_devices",
            Tip::SharedTransport => "tip.shared_transport",
            Tip::ElectricVehicles => "tip.electric_vehicles",
            Tip::PlantBasedMeals => "tip.plant_based_meals",
        }
    }
}

const EFFICIENCY_TIPS: &[Tip] = &[Tip::EfficientAppliances, Tip::UnplugDevices];
const TRANSPORT_TIPS: &[Tip] = &[Tip::SharedTransport, Tip::ElectricVehicles];
const DIET_TIPS: &[Tip] = &[Tip::PlantBasedMeals];

/// 임계값을 넘은 카테고리의 팁을 전력 → 승용차 → 육류 순으로 모은다.
/// 대중교통은 팁 대상이 아니다.
pub fn advice_for(breakdown: &EmissionBreakdown) -> Vec<Tip> {
    let mut tips = Vec::new();
    if breakdown.electricity > TIP_THRESHOLD_KG {
        tips.extend_from_slice(EFFICIENCY_TIPS);
    }
    if breakdown.car > TIP_THRESHOLD_KG {
        tips.extend_from_slice(TRANSPORT_TIPS);
    }
    if breakdown.meat > TIP_THRESHOLD_KG {
        tips.extend_from_slice(DIET_TIPS);
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(electricity: f64, car: f64, transit: f64, meat: f64) -> EmissionBreakdown {
        EmissionBreakdown {
            electricity,
            car,
            transit,
            meat,
        }
    }

    #[test]
    fn threshold_is_strict() {
        assert!(advice_for(&breakdown(1.0, 1.0, 0.0, 1.0)).is_empty());
    }

    #[test]
    fn transit_never_triggers_tips() {
        assert!(advice_for(&breakdown(0.0, 0.0, 50.0, 0.1)).is_empty());
    }

    #[test]
    fn tips_keep_category_order() {
        let tips = advice_for(&breakdown(1.5, 2.0, 0.0, 3.3));
        assert_eq!(
            tips,
            vec![
                Tip::EfficientAppliances,
                Tip::UnplugDevices,
                Tip::SharedTransport,
                Tip::ElectricVehicles,
                Tip::PlantBasedMeals,
            ]
        );
    }
}
