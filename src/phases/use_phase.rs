use serde::{Deserialize, Serialize};

use super::{Phase, PhaseResult};
use crate::coefficients::CoefficientTables;
use crate::input::ProcessInput;

/// 사용 단계 [kg CO2eq/MJ].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UseBreakdown {
    pub combustion: f64,
}

/// 최종 연소 배출. 바이오매스별 계수를 그대로 쓴다.
pub fn compute_use(input: &ProcessInput, tables: &CoefficientTables) -> PhaseResult<UseBreakdown> {
    let combustion = tables.biomass(input.biomass).combustion_kg_per_mj;
    PhaseResult {
        phase: Phase::Use,
        intensity_kg_per_mj: combustion,
        breakdown: UseBreakdown { combustion },
    }
}
