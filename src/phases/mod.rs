//! ACV 네 단계(농업·산업·유통·사용) 계산 모듈 모음.
//! 각 단계는 서로 독립이며 `ProcessInput` 과 계수표만 읽어 MJ 당 배출 기여를 낸다.

pub mod aggregate;
pub mod agricultural;
pub mod distribution;
pub mod industrial;
pub mod use_phase;

pub use aggregate::{aggregate, LifecycleIntensity, PhaseDetails, PhaseSummary};
pub use agricultural::{compute_agricultural, AgriculturalBreakdown};
pub use distribution::{compute_distribution, DistributionBreakdown};
pub use industrial::{compute_industrial, IndustrialBreakdown};
pub use use_phase::{compute_use, UseBreakdown};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 수명주기 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Agricultural,
    Industrial,
    Distribution,
    Use,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agricultural => "agricola",
            Self::Industrial => "industrial",
            Self::Distribution => "distribuicao",
            Self::Use => "uso",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// 한 단계의 계산 결과. 집계기가 소유권을 가져가 소비한다.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseResult<B> {
    pub phase: Phase,
    /// 단계 기여 [kg CO2eq/MJ]
    pub intensity_kg_per_mj: f64,
    pub breakdown: B,
}

/// MJ 기준 환산. 분모가 0 이하이면 1로 나눈다.
pub(crate) fn per_mj(annual_kg: f64, energy_mj: f64) -> f64 {
    if energy_mj > 0.0 {
        annual_kg / energy_mj
    } else {
        annual_kg
    }
}
