//! 효율 점수와 CBIO 추정.

use serde::{Deserialize, Serialize};

use crate::codes::FossilSubstitute;
use crate::coefficients::CoefficientTables;

/// 점수 계산에 쓴 화석연료 기준값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FossilReference {
    pub substitute: FossilSubstitute,
    /// [kg CO2eq/MJ]
    pub intensity_kg_per_mj: f64,
}

impl FossilReference {
    pub fn select(substitute: FossilSubstitute, tables: &CoefficientTables) -> Self {
        Self {
            substitute,
            intensity_kg_per_mj: tables.fossil_reference(substitute),
        }
    }
}

/// 에너지·환경 효율 점수 `max(0, 기준값 - 집약도)` [kg CO2eq/MJ].
/// 기준값보다 나쁜 공정은 음수가 아니라 0점이다.
pub fn efficiency_score(reference: &FossilReference, total_intensity_kg_per_mj: f64) -> f64 {
    (reference.intensity_kg_per_mj - total_intensity_kg_per_mj).max(0.0)
}

/// CBIO 수량. `점수 × [PCI] × [생산량] × 환산계수` 를 0 방향으로 내림한다.
///
/// PCI 와 생산량을 곱할지는 계수표의 `credit` 설정을 따른다.
pub fn estimate_credits(
    score: f64,
    calorific_value_mj_per_kg: f64,
    production_volume_t: f64,
    tables: &CoefficientTables,
) -> u64 {
    if score <= 0.0 {
        return 0;
    }
    let credit = &tables.credit;
    let mut raw = score * credit.conversion_factor;
    if credit.scale_by_calorific_value {
        raw *= calorific_value_mj_per_kg;
    }
    if credit.scale_by_volume {
        raw *= production_volume_t;
    }
    if !(raw.is_finite() && raw > 0.0) {
        return 0;
    }
    // f64 -> u64 변환은 포화되므로 범위를 넘어도 패닉하지 않는다
    raw.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_clamped_at_zero() {
        let tables = CoefficientTables::embedded();
        let reference = FossilReference::select(FossilSubstitute::MediaPonderada, &tables);
        assert_eq!(efficiency_score(&reference, 0.2), 0.0);
        assert!((efficiency_score(&reference, 0.0067) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn credits_are_floored() {
        let mut tables = CoefficientTables::embedded();
        tables.credit.conversion_factor = 1.0;
        tables.credit.scale_by_calorific_value = false;
        assert_eq!(estimate_credits(0.5, 18.8, 3.0, &tables), 1);
        assert_eq!(estimate_credits(0.0, 18.8, 3.0, &tables), 0);
        assert_eq!(estimate_credits(-0.1, 18.8, 3.0, &tables), 0);
    }

    #[test]
    fn credit_scaling_follows_configuration() {
        let mut tables = CoefficientTables::embedded();
        tables.credit.conversion_factor = 2.0;
        tables.credit.scale_by_calorific_value = false;
        tables.credit.scale_by_volume = false;
        assert_eq!(estimate_credits(0.75, 18.8, 1000.0, &tables), 1);
        tables.credit.scale_by_volume = true;
        assert_eq!(estimate_credits(0.75, 18.8, 1000.0, &tables), 1500);
    }
}
