//! 버전이 붙은 계수표. 한 번 읽은 뒤에는 변경하지 않는다.
//!
//! 계산식 코드는 계수를 직접 들고 있지 않고, 항상 [`CoefficientTables`] 를 인자로 받는다.
//! 내장 보정값은 [`CoefficientTables::embedded`], 외부 TOML 문서는
//! [`CoefficientTables::load`] / [`CoefficientTables::from_toml_str`] 로 얻는다.

mod calibration;
mod table;

pub use calibration::EMBEDDED_VERSION;
pub use table::CodeTable;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::codes::{
    BiomassType, Code, CropFamily, EnergySource, FossilSubstitute, FuelType, LifecycleStage,
    ProductionState, TransportMode,
};

/// 바이오매스별 계수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomassCoefficients {
    /// 저위발열량 PCI [MJ/kg]
    pub calorific_value_mj_per_kg: f64,
    /// 원료 생산 배출 기본계수. PCI 와 곱해 kg CO2eq/MJ 가 된다.
    pub production_factor: f64,
    /// 연료 1 MJ 당 운송되는 원료 질량 [t/MJ]
    pub transport_load_t_per_mj: f64,
    /// 최종 연소 배출 [kg CO2eq/MJ]
    pub combustion_kg_per_mj: f64,
    /// 수명주기 단계별 MUT 배분 비율 (0~1)
    pub allocation: CodeTable<LifecycleStage, f64>,
}

/// 연료별 생산/연소 배출계수 [kg CO2eq/연료단위].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelFactors {
    pub production: f64,
    pub combustion: f64,
}

/// 보조 투입물 배출계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputFactors {
    /// 옥수수 전분 바인더 [kg CO2eq/kg]
    pub corn_starch_kg_per_kg: f64,
    /// 열병합 바이오매스 연소 [kg CO2eq/kg]
    pub cogeneration_biomass_kg_per_kg: f64,
    /// 용수 [kg CO2eq/m³]
    pub water_kg_per_m3: f64,
    /// 윤활유 [kg CO2eq/L]
    pub lubricant_oil_kg_per_l: f64,
    /// 규사 [kg CO2eq/kg]
    pub silica_sand_kg_per_kg: f64,
}

/// CBIO 환산 설정. PCI 와 생산량을 곱할지 여부도 보정값으로 취급한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditConversion {
    pub conversion_factor: f64,
    pub scale_by_calorific_value: bool,
    pub scale_by_volume: bool,
}

/// 계산 엔진이 쓰는 모든 보정 계수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTables {
    pub version: String,
    pub biomass: CodeTable<BiomassType, BiomassCoefficients>,
    /// 작물군·주별 MUT 계수
    pub land_use_change: CodeTable<CropFamily, CodeTable<ProductionState, f64>>,
    /// 운송 배출계수 [kg CO2eq/t.km]
    pub transport: CodeTable<TransportMode, f64>,
    /// 전력 배출계수 [kg CO2eq/kWh]
    pub electricity: CodeTable<EnergySource, f64>,
    pub fuels: CodeTable<FuelType, FuelFactors>,
    pub inputs: InputFactors,
    /// 화석연료 기준 집약도 [kg CO2eq/MJ]
    pub fossil_references: CodeTable<FossilSubstitute, f64>,
    pub credit: CreditConversion,
}

/// 계수표 로드/검증 오류.
#[derive(Debug, thiserror::Error)]
pub enum CoefficientError {
    #[error("계수표 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("계수표 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("계수표 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("계수표 검증 실패 `{entry}`: {reason}")]
    Invalid { entry: String, reason: &'static str },
}

impl CoefficientTables {
    /// 내장 보정값(버전 [`EMBEDDED_VERSION`]).
    pub fn embedded() -> Self {
        calibration::embedded()
    }

    /// TOML 문서에서 계수표를 읽고 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, CoefficientError> {
        let tables: CoefficientTables = toml::from_str(src)?;
        tables.validate()?;
        Ok(tables)
    }

    /// 파일에서 계수표를 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoefficientError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, CoefficientError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn biomass(&self, biomass: BiomassType) -> &BiomassCoefficients {
        self.biomass.get(biomass)
    }

    pub fn calorific_value(&self, biomass: BiomassType) -> f64 {
        self.biomass.get(biomass).calorific_value_mj_per_kg
    }

    pub fn land_use_change(&self, family: CropFamily, state: ProductionState) -> f64 {
        *self.land_use_change.get(family).get(state)
    }

    pub fn transport_factor(&self, mode: TransportMode) -> f64 {
        *self.transport.get(mode)
    }

    pub fn fossil_reference(&self, substitute: FossilSubstitute) -> f64 {
        *self.fossil_references.get(substitute)
    }

    /// 값의 범위를 검사한다. 키 누락은 역직렬화 단계에서 이미 걸러진다.
    pub fn validate(&self) -> Result<(), CoefficientError> {
        if self.version.trim().is_empty() {
            return Err(invalid("version", "버전 문자열이 비어 있습니다"));
        }
        for (code, entry) in self.biomass.iter() {
            let name = |field: &str| format!("biomass.{}.{field}", code.code());
            if !(entry.calorific_value_mj_per_kg.is_finite()
                && entry.calorific_value_mj_per_kg > 0.0)
            {
                return Err(invalid(
                    name("calorific_value_mj_per_kg"),
                    "PCI 는 0보다 커야 합니다",
                ));
            }
            non_negative(name("production_factor"), entry.production_factor)?;
            non_negative(name("transport_load_t_per_mj"), entry.transport_load_t_per_mj)?;
            finite(name("combustion_kg_per_mj"), entry.combustion_kg_per_mj)?;
            for (stage, share) in entry.allocation.iter() {
                if !(share.is_finite() && (0.0..=1.0).contains(share)) {
                    return Err(invalid(
                        name(&format!("allocation.{}", stage.code())),
                        "배분 비율은 0과 1 사이여야 합니다",
                    ));
                }
            }
        }
        for (family, states) in self.land_use_change.iter() {
            for (state, value) in states.iter() {
                finite(
                    format!("land_use_change.{}.{}", family.code(), state.code()),
                    *value,
                )?;
            }
        }
        for (mode, value) in self.transport.iter() {
            non_negative(format!("transport.{}", mode.code()), *value)?;
        }
        for (source, value) in self.electricity.iter() {
            non_negative(format!("electricity.{}", source.code()), *value)?;
        }
        for (fuel, factors) in self.fuels.iter() {
            finite(format!("fuels.{}.production", fuel.code()), factors.production)?;
            finite(format!("fuels.{}.combustion", fuel.code()), factors.combustion)?;
        }
        let inputs = &self.inputs;
        non_negative("inputs.corn_starch_kg_per_kg", inputs.corn_starch_kg_per_kg)?;
        non_negative(
            "inputs.cogeneration_biomass_kg_per_kg",
            inputs.cogeneration_biomass_kg_per_kg,
        )?;
        non_negative("inputs.water_kg_per_m3", inputs.water_kg_per_m3)?;
        non_negative("inputs.lubricant_oil_kg_per_l", inputs.lubricant_oil_kg_per_l)?;
        non_negative("inputs.silica_sand_kg_per_kg", inputs.silica_sand_kg_per_kg)?;
        for (substitute, value) in self.fossil_references.iter() {
            non_negative(format!("fossil_references.{}", substitute.code()), *value)?;
        }
        non_negative("credit.conversion_factor", self.credit.conversion_factor)?;
        Ok(())
    }
}

impl Default for CoefficientTables {
    fn default() -> Self {
        Self::embedded()
    }
}

fn invalid(entry: impl Into<String>, reason: &'static str) -> CoefficientError {
    CoefficientError::Invalid {
        entry: entry.into(),
        reason,
    }
}

fn finite(entry: impl Into<String>, value: f64) -> Result<(), CoefficientError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(entry, "유한한 값이어야 합니다"))
    }
}

fn non_negative(entry: impl Into<String>, value: f64) -> Result<(), CoefficientError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(entry, "0 이상의 유한한 값이어야 합니다"))
    }
}
