//! 정규화 → 네 단계 → 집계 → 점수 → CBIO 로 이어지는 계산 파이프라인.
//!
//! [`Engine`] 은 생성 후 변하지 않으며 계산마다 필요한 상태는 모두 지역 값이다.
//! 여러 스레드에서 같은 엔진을 동시에 호출해도 된다.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::coefficients::CoefficientTables;
use crate::error::{EngineError, EngineResult};
use crate::input::{normalize, ProcessInput, RawInput};
use crate::phases::{self, PhaseDetails, PhaseSummary};
use crate::scoring::{self, FossilReference};

/// 처리량이 0일 때 산업 단계 분모를 어떻게 다룰지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisorPolicy {
    /// 분모를 1로 대체한다 (기존 도구와 같은 결과)
    #[default]
    Substitute,
    /// 검증 오류로 돌려준다
    Reject,
}

/// 계산 결과. 엔진은 반환 후 이 값을 보관하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 사용한 계수표 버전
    pub coefficients_version: String,
    /// [kg CO2eq/MJ]
    pub total_intensity_kg_per_mj: f64,
    /// [g CO2eq/MJ]
    pub total_intensity_g_per_mj: f64,
    /// [kg CO2eq/MJ]
    pub efficiency_score: f64,
    pub fossil_reference: FossilReference,
    pub phases: PhaseSummary,
    pub details: PhaseDetails,
    /// CBIO [개/년]
    pub credits: u64,
}

/// 탄소 집약도 계산 엔진.
#[derive(Debug, Clone)]
pub struct Engine {
    tables: Arc<CoefficientTables>,
    policy: DivisorPolicy,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(CoefficientTables::embedded())
    }
}

impl Engine {
    pub fn new(tables: CoefficientTables) -> Self {
        Self::with_shared(Arc::new(tables))
    }

    pub fn with_shared(tables: Arc<CoefficientTables>) -> Self {
        Self {
            tables,
            policy: DivisorPolicy::default(),
        }
    }

    /// 계수표를 검증한 뒤 엔진을 만든다.
    pub fn try_new(tables: CoefficientTables) -> EngineResult<Self> {
        tables.validate()?;
        Ok(Self::new(tables))
    }

    pub fn with_divisor_policy(mut self, policy: DivisorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 느슨한 입력 레코드를 정규화한 뒤 계산한다.
    pub fn calculate(&self, raw: &RawInput) -> EngineResult<CalculationResult> {
        let input = normalize(raw)?;
        self.calculate_input(&input)
    }

    /// 이미 구성된 입력으로 계산한다. 입력은 다시 검증한다.
    pub fn calculate_input(&self, input: &ProcessInput) -> EngineResult<CalculationResult> {
        input.validate()?;
        let tables = self.tables.as_ref();

        let agricultural = phases::compute_agricultural(input, tables);
        let industrial = phases::compute_industrial(input, tables, self.policy)?;
        let distribution = phases::compute_distribution(input, tables);
        let use_phase = phases::compute_use(input, tables);
        let lifecycle = phases::aggregate(agricultural, industrial, distribution, use_phase);

        ensure_finite("agricola", lifecycle.phases.agricultural)?;
        ensure_finite("industrial", lifecycle.phases.industrial)?;
        ensure_finite("distribuicao", lifecycle.phases.distribution)?;
        ensure_finite("uso", lifecycle.phases.use_phase)?;
        ensure_finite("total", lifecycle.total_kg_per_mj)?;

        let reference = FossilReference::select(input.fossil_substitute, tables);
        let score = scoring::efficiency_score(&reference, lifecycle.total_kg_per_mj);
        ensure_finite("nota", score)?;
        let credits = scoring::estimate_credits(
            score,
            tables.calorific_value(input.biomass),
            input.production_volume_t,
            tables,
        );

        info!(
            biomass = ?input.biomass,
            total_kg_per_mj = lifecycle.total_kg_per_mj,
            score,
            credits,
            "탄소 집약도 계산 완료"
        );
        Ok(CalculationResult {
            coefficients_version: tables.version.clone(),
            total_intensity_kg_per_mj: lifecycle.total_kg_per_mj,
            total_intensity_g_per_mj: lifecycle.total_g_per_mj(),
            efficiency_score: score,
            fossil_reference: reference,
            phases: lifecycle.phases,
            details: lifecycle.details,
            credits,
        })
    }
}

fn ensure_finite(stage: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFinite { stage })
    }
}
