use super::estimator::EmissionBreakdown;

/// 차트에 표시하는 배출 카테고리.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electricity,
    Car,
    PublicTransport,
    MeatConsumption,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electricity,
        Category::Car,
        Category::PublicTransport,
        Category::MeatConsumption,
    ];

    /// 기본(영문) 라벨.
    pub fn label(self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Car => "Car",
            Category::PublicTransport => "Public Transport",
            Category::MeatConsumption => "Meat Consumption",
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Electricity => "category.electricity",
            Category::Car => "category.car",
            Category::PublicTransport => "category.public_transport",
            Category::MeatConsumption => "category.meat",
        }
    }

    /// 파이 조각 색상(RGB).
    pub fn color_rgb(self) -> [u8; 3] {
        match self {
            Category::Electricity => [0xff, 0x99, 0x99],
            Category::Car => [0x66, 0xb3, 0xff],
            Category::PublicTransport => [0x99, 0xff, 0x99],
            Category::MeatConsumption => [0xff, 0xcc, 0x99],
        }
    }

    /// 내역에서 해당 카테고리 값을 꺼낸다.
    pub fn value_in(self, breakdown: &EmissionBreakdown) -> f64 {
        match self {
            Category::Electricity => breakdown.electricity,
            Category::Car => breakdown.car,
            Category::PublicTransport => breakdown.transit,
            Category::MeatConsumption => breakdown.meat,
        }
    }
}

/// 파이 차트 시작 각도(12시 방향) [deg]
pub const PIE_START_ANGLE_DEG: f64 = 90.0;

/// 파이 차트 한 조각.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: Category,
    /// 배출량 [kg CO₂/day]
    pub value: f64,
    /// 전체 대비 비율(0~1)
    pub share: f64,
    /// 시작 각도 [deg], 반시계 방향 기준
    pub start_angle_deg: f64,
    /// 조각 각도 [deg]
    pub sweep_deg: f64,
}

impl ChartSlice {
    /// `12.3%` 형식의 비율 라벨.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// 0보다 큰 카테고리만 골라 파이 조각을 만든다. 모두 0이면 빈 벡터.
pub fn chart_slices(breakdown: &EmissionBreakdown) -> Vec<ChartSlice> {
    let pairs: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|c| (*c, c.value_in(breakdown)))
        .filter(|(_, v)| *v > 0.0)
        .collect();
    let sum: f64 = pairs.iter().map(|(_, v)| v).sum();
    if sum <= 0.0 {
        return Vec::new();
    }
    let mut start = PIE_START_ANGLE_DEG;
    pairs
        .into_iter()
        .map(|(category, value)| {
            let share = value / sum;
            let sweep = share * 360.0;
            let slice = ChartSlice {
                category,
                value,
                share,
                start_angle_deg: start,
                sweep_deg: sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_categories_are_skipped() {
        let b = EmissionBreakdown {
            electricity: 0.0,
            car: 2.0,
            transit: 0.0,
            meat: 2.0,
        };
        let slices = chart_slices(&b);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].category, Category::Car);
        assert_eq!(slices[1].category, Category::MeatConsumption);
        assert_eq!(slices[0].percent_label(), "50.0%");
        assert!((slices[1].start_angle_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn empty_when_everything_is_zero() {
        let b = EmissionBreakdown {
            electricity: 0.0,
            car: 0.0,
            transit: 0.0,
            meat: 0.0,
        };
        assert!(chart_slices(&b).is_empty());
    }
}
