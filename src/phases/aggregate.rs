use serde::{Deserialize, Serialize};

use super::{
    AgriculturalBreakdown, DistributionBreakdown, IndustrialBreakdown, PhaseResult, UseBreakdown,
};

/// 단계별 기여 [kg CO2eq/MJ].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub agricultural: f64,
    pub industrial: f64,
    pub distribution: f64,
    #[serde(rename = "use")]
    pub use_phase: f64,
}

impl PhaseSummary {
    pub fn total(&self) -> f64 {
        self.agricultural + self.industrial + self.distribution + self.use_phase
    }
}

/// 단계별 세부 항목(진단용).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseDetails {
    pub agricultural: AgriculturalBreakdown,
    pub industrial: IndustrialBreakdown,
    pub distribution: DistributionBreakdown,
    #[serde(rename = "use")]
    pub use_phase: UseBreakdown,
}

/// 수명주기 전체 탄소 집약도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifecycleIntensity {
    pub total_kg_per_mj: f64,
    pub phases: PhaseSummary,
    pub details: PhaseDetails,
}

impl LifecycleIntensity {
    pub fn total_g_per_mj(&self) -> f64 {
        self.total_kg_per_mj * 1000.0
    }
}

/// 네 단계 결과를 더한다. 단순 합이며 클램프하지 않는다.
pub fn aggregate(
    agricultural: PhaseResult<AgriculturalBreakdown>,
    industrial: PhaseResult<IndustrialBreakdown>,
    distribution: PhaseResult<DistributionBreakdown>,
    use_phase: PhaseResult<UseBreakdown>,
) -> LifecycleIntensity {
    let phases = PhaseSummary {
        agricultural: agricultural.intensity_kg_per_mj,
        industrial: industrial.intensity_kg_per_mj,
        distribution: distribution.intensity_kg_per_mj,
        use_phase: use_phase.intensity_kg_per_mj,
    };
    LifecycleIntensity {
        total_kg_per_mj: phases.total(),
        phases,
        details: PhaseDetails {
            agricultural: agricultural.breakdown,
            industrial: industrial.breakdown,
            distribution: distribution.breakdown,
            use_phase: use_phase.breakdown,
        },
    }
}
