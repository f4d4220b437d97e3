use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Phase, PhaseResult};
use crate::coefficients::CoefficientTables;
use crate::input::ProcessInput;

/// 농업 단계 세부 항목 [kg CO2eq/MJ].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgriculturalBreakdown {
    /// 원료 생산 (+ 전분 바인더)
    pub production: f64,
    /// 토지이용변화(MUT)
    pub land_use_change: f64,
    /// 원료의 공장까지 수송
    pub feedstock_transport: f64,
}

impl AgriculturalBreakdown {
    pub fn total(&self) -> f64 {
        self.production + self.land_use_change + self.feedstock_transport
    }
}

/// 원료 재배부터 공장 입구까지의 MJ 당 배출을 계산한다.
///
/// - 생산: `비율 × PCI × 생산계수 + 전분항`. 원료 소비 비율이 없으면 비율 1(에너지 기준)로 본다.
/// - MUT: `PCI × (작물군·주 MUT 계수 × 단계 배분율)`
/// - 수송: `거리 × 운송부하 × 차량 배출계수`
pub fn compute_agricultural(
    input: &ProcessInput,
    tables: &CoefficientTables,
) -> PhaseResult<AgriculturalBreakdown> {
    let feedstock = &input.feedstock;
    let coeffs = tables.biomass(input.biomass);
    let pci = coeffs.calorific_value_mj_per_kg;

    let yield_factor = feedstock.consumption_ratio.unwrap_or(1.0);
    let corn_starch = feedstock.corn_starch_ratio * tables.inputs.corn_starch_kg_per_kg / pci;
    let production = yield_factor * pci * coeffs.production_factor + corn_starch;

    let allocation = feedstock
        .allocation_override
        .unwrap_or(*coeffs.allocation.get(feedstock.stage));
    let luc = tables.land_use_change(input.biomass.crop_family(), feedstock.state);
    let land_use_change = pci * (luc * allocation);

    let feedstock_transport = feedstock.transport_distance_km
        * coeffs.transport_load_t_per_mj
        * tables.transport_factor(feedstock.vehicle);

    let breakdown = AgriculturalBreakdown {
        production,
        land_use_change,
        feedstock_transport,
    };
    debug!(phase = %Phase::Agricultural, ?breakdown);
    PhaseResult {
        phase: Phase::Agricultural,
        intensity_kg_per_mj: breakdown.total(),
        breakdown,
    }
}
