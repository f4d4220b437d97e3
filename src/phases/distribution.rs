use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{per_mj, Phase, PhaseResult};
use crate::codes::TransportMode;
use crate::coefficients::CoefficientTables;
use crate::input::{ModalSplit, ProcessInput};

/// 유통 단계 세부 항목 [kg CO2eq/MJ].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionBreakdown {
    pub domestic: f64,
    /// 공장→항구 구간
    pub export_port: f64,
    /// 해상 구간
    pub export_sea: f64,
}

impl DistributionBreakdown {
    pub fn export(&self) -> f64 {
        self.export_port + self.export_sea
    }

    pub fn total(&self) -> f64 {
        self.domestic + self.export()
    }
}

/// 공장 출하 이후 물류 배출을 계산한다.
///
/// 국내 구간은 도로/철도/수로 분담률로 나눠 `수량 × (거리 × 분담률) × 배출계수` 를 합한 뒤
/// 국내 유통 에너지(`수량 × 1000 × PCI`)로 나눈다. 수출 구간은 수출량이 있을 때만 계산한다.
pub fn compute_distribution(
    input: &ProcessInput,
    tables: &CoefficientTables,
) -> PhaseResult<DistributionBreakdown> {
    let pci = tables.calorific_value(input.biomass);
    let domestic_leg = &input.distribution.domestic;
    let export_leg = &input.distribution.export;

    let domestic_kg = modal_emissions(
        domestic_leg.quantity_t,
        domestic_leg.distance_km,
        domestic_leg.split,
        domestic_leg.road_vehicle,
        tables,
    );
    let domestic = per_mj(domestic_kg, energy_mj(domestic_leg.quantity_t, pci));

    let (export_port, export_sea) = if export_leg.is_active() {
        let exported_mj = energy_mj(export_leg.quantity_t, pci);
        let port_kg = modal_emissions(
            export_leg.quantity_t,
            export_leg.port_distance_km,
            export_leg.split,
            domestic_leg.road_vehicle,
            tables,
        );
        let sea_kg = export_leg.quantity_t
            * export_leg.sea_distance_km
            * tables.transport_factor(TransportMode::Ship);
        (per_mj(port_kg, exported_mj), per_mj(sea_kg, exported_mj))
    } else {
        (0.0, 0.0)
    };

    let breakdown = DistributionBreakdown {
        domestic,
        export_port,
        export_sea,
    };
    debug!(phase = %Phase::Distribution, ?breakdown);
    PhaseResult {
        phase: Phase::Distribution,
        intensity_kg_per_mj: breakdown.total(),
        breakdown,
    }
}

/// 한 구간의 연간 배출 [kg CO2eq]. 도로 분담률은 나머지 몫이다.
fn modal_emissions(
    quantity_t: f64,
    distance_km: f64,
    split: ModalSplit,
    road_vehicle: TransportMode,
    tables: &CoefficientTables,
) -> f64 {
    [
        (split.road(), road_vehicle),
        (split.rail, TransportMode::Rail),
        (split.barge, TransportMode::Barge),
    ]
    .into_iter()
    .map(|(share, mode)| quantity_t * (distance_km * share) * tables.transport_factor(mode))
    .sum()
}

fn energy_mj(quantity_t: f64, pci: f64) -> f64 {
    quantity_t * 1000.0 * pci
}
