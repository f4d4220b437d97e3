use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{per_mj, Phase, PhaseResult};
use crate::coefficients::CoefficientTables;
use crate::engine::DivisorPolicy;
use crate::error::ValidationError;
use crate::input::{keys, ProcessInput};

/// 산업 단계 세부 항목 [kg CO2eq/MJ].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndustrialBreakdown {
    pub electricity: f64,
    pub fuels: f64,
    pub cogeneration: f64,
    /// 용수·윤활유·규사
    pub inputs: f64,
    /// 처리량이 0이라 분모를 1로 대체했는지
    pub processed_mass_substituted: bool,
}

impl IndustrialBreakdown {
    pub fn total(&self) -> f64 {
        self.electricity + self.fuels + self.cogeneration + self.inputs
    }
}

/// 공장 내 가공 배출을 연간 절대량으로 구한 뒤 `처리량 × PCI` 로 나눠 MJ 기준으로 바꾼다.
///
/// 처리량이 0이면 [`DivisorPolicy`] 에 따라 1로 대체하거나 검증 오류를 낸다.
pub fn compute_industrial(
    input: &ProcessInput,
    tables: &CoefficientTables,
    policy: DivisorPolicy,
) -> Result<PhaseResult<IndustrialBreakdown>, ValidationError> {
    let industrial = &input.industrial;
    let pci = tables.calorific_value(input.biomass);

    let electricity_kg: f64 = industrial
        .electricity_kwh
        .iter()
        .map(|(source, kwh)| kwh * tables.electricity.get(source))
        .sum();
    let fuels_kg: f64 = industrial
        .fuel_consumption
        .iter()
        .map(|(fuel, quantity)| {
            let factors = tables.fuels.get(fuel);
            quantity * (factors.production + factors.combustion)
        })
        .sum();
    let cogeneration_kg = if industrial.cogeneration {
        industrial.cogeneration_biomass_kg * tables.inputs.cogeneration_biomass_kg_per_kg
    } else {
        0.0
    };
    let inputs_kg = industrial.water_m3 * tables.inputs.water_kg_per_m3
        + industrial.lubricant_oil_l * tables.inputs.lubricant_oil_kg_per_l
        + industrial.silica_sand_kg * tables.inputs.silica_sand_kg_per_kg;

    let mut mass_kg = industrial.processed_biomass_kg;
    let mut substituted = false;
    if mass_kg <= 0.0 {
        if industrial.has_consumption() {
            if policy == DivisorPolicy::Reject {
                return Err(ValidationError::ZeroDivisor {
                    field: keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG.to_string(),
                });
            }
            warn!(
                field = keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG,
                "처리량이 0이라 분모를 1로 대체"
            );
        }
        mass_kg = 1.0;
        substituted = true;
    }
    let energy_mj = mass_kg * pci;

    let breakdown = IndustrialBreakdown {
        electricity: per_mj(electricity_kg, energy_mj),
        fuels: per_mj(fuels_kg, energy_mj),
        cogeneration: per_mj(cogeneration_kg, energy_mj),
        inputs: per_mj(inputs_kg, energy_mj),
        processed_mass_substituted: substituted,
    };
    debug!(phase = %Phase::Industrial, ?breakdown);
    Ok(PhaseResult {
        phase: Phase::Industrial,
        intensity_kg_per_mj: breakdown.total(),
        breakdown,
    })
}
