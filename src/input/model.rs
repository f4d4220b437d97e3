use serde::{Deserialize, Serialize};

use super::keys::{self, defaults};
use crate::codes::{
    BiomassType, EnergySource, FossilSubstitute, FuelType, LifecycleStage, ProductionState,
    TransportMode,
};
use crate::coefficients::CodeTable;
use crate::error::ValidationError;

/// 검증이 끝난 공정 입력. 계산 한 번 동안 읽기 전용으로만 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    pub biomass: BiomassType,
    /// 연간 생산량 [t/년]
    pub production_volume_t: f64,
    pub feedstock: FeedstockInput,
    pub industrial: IndustrialInput,
    pub distribution: DistributionInput,
    pub fossil_substitute: FossilSubstitute,
}

/// 농업 단계(원료 생산·수송) 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedstockInput {
    /// 원료 소비 비율 [kg 원료/kg 연료]. 없으면 에너지 단위 기준으로 계산한다.
    pub consumption_ratio: Option<f64>,
    /// 옥수수 전분 바인더 [kg/kg 연료]
    pub corn_starch_ratio: f64,
    pub state: ProductionState,
    pub stage: LifecycleStage,
    /// 계수표의 배분 비율 대신 쓸 값 (0~1)
    pub allocation_override: Option<f64>,
    /// 원료 수송 거리 [km]
    pub transport_distance_km: f64,
    pub vehicle: TransportMode,
}

/// 산업 단계 연간 소비량.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrialInput {
    /// 전력 [kWh/년]
    pub electricity_kwh: CodeTable<EnergySource, f64>,
    /// 연료 [L, m³ 또는 kg/년]
    pub fuel_consumption: CodeTable<FuelType, f64>,
    pub cogeneration: bool,
    /// 열병합 연소 바이오매스 [kg/년]
    pub cogeneration_biomass_kg: f64,
    /// 용수 [m³/년]
    pub water_m3: f64,
    /// 윤활유 [L/년]
    pub lubricant_oil_l: f64,
    /// 규사 [kg/년]
    pub silica_sand_kg: f64,
    /// 처리 바이오매스 총량 [kg/년]
    pub processed_biomass_kg: f64,
}

impl IndustrialInput {
    /// 정규화 분모가 필요한 소비량이 하나라도 있는지.
    pub fn has_consumption(&self) -> bool {
        self.electricity_kwh.iter().any(|(_, v)| *v > 0.0)
            || self.fuel_consumption.iter().any(|(_, v)| *v > 0.0)
            || (self.cogeneration && self.cogeneration_biomass_kg > 0.0)
            || self.water_m3 > 0.0
            || self.lubricant_oil_l > 0.0
            || self.silica_sand_kg > 0.0
    }
}

/// 철도·수로 분담률. 나머지는 도로로 간다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModalSplit {
    pub rail: f64,
    pub barge: f64,
}

impl ModalSplit {
    pub fn road(&self) -> f64 {
        (1.0 - self.rail - self.barge).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomesticLeg {
    /// 국내 유통량 [t/년]
    pub quantity_t: f64,
    pub distance_km: f64,
    pub road_vehicle: TransportMode,
    pub split: ModalSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportLeg {
    /// 명시적으로 수출을 끈 경우 false
    pub enabled: bool,
    /// 수출량 [t/년]
    pub quantity_t: f64,
    /// 공장→항구 [km]
    pub port_distance_km: f64,
    pub split: ModalSplit,
    /// 항구→도착항 해상 거리 [km]
    pub sea_distance_km: f64,
}

impl ExportLeg {
    pub fn is_active(&self) -> bool {
        self.enabled && self.quantity_t > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionInput {
    pub domestic: DomesticLeg,
    pub export: ExportLeg,
}

impl Default for ProcessInput {
    /// 모든 필드를 문서화된 기본값으로 채운다.
    fn default() -> Self {
        Self {
            biomass: BiomassType::default(),
            production_volume_t: defaults::VOLUME_PRODUCAO_TON,
            feedstock: FeedstockInput {
                consumption_ratio: None,
                corn_starch_ratio: 0.0,
                state: ProductionState::default(),
                stage: LifecycleStage::default(),
                allocation_override: None,
                transport_distance_km: defaults::DISTANCIA_TRANSPORTE_BIOMASSA,
                vehicle: TransportMode::default(),
            },
            industrial: IndustrialInput {
                electricity_kwh: CodeTable::default(),
                fuel_consumption: CodeTable::default(),
                cogeneration: false,
                cogeneration_biomass_kg: 0.0,
                water_m3: 0.0,
                lubricant_oil_l: 0.0,
                silica_sand_kg: 0.0,
                processed_biomass_kg: 0.0,
            },
            distribution: DistributionInput {
                domestic: DomesticLeg {
                    quantity_t: defaults::QUANTIDADE_DISTRIBUICAO_TON,
                    distance_km: defaults::DISTANCIA_MERCADO_DOMESTICO_KM,
                    road_vehicle: TransportMode::default(),
                    split: ModalSplit::default(),
                },
                export: ExportLeg {
                    enabled: true,
                    quantity_t: 0.0,
                    port_distance_km: defaults::DISTANCIA_FABRICA_PORTO_KM,
                    split: ModalSplit::default(),
                    sea_distance_km: defaults::DISTANCIA_PORTO_DESTINO_KM,
                },
            },
            fossil_substitute: FossilSubstitute::default(),
        }
    }
}

impl ProcessInput {
    /// 물리량의 부호와 분담률 합계를 검사한다. 값을 고쳐 쓰지 않는다.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative(keys::VOLUME_PRODUCAO_TON, self.production_volume_t)?;

        let feedstock = &self.feedstock;
        if let Some(ratio) = feedstock.consumption_ratio {
            non_negative(keys::APROVEITAMENTO_BIOMASSA, ratio)?;
        }
        non_negative(keys::PROPORCAO_AMIDO_MILHO, feedstock.corn_starch_ratio)?;
        if let Some(share) = feedstock.allocation_override {
            share_in_range(keys::PERCENTUAL_ALOCACAO_MUT, share)?;
        }
        non_negative(
            keys::DISTANCIA_TRANSPORTE_BIOMASSA,
            feedstock.transport_distance_km,
        )?;

        let industrial = &self.industrial;
        for (source, value) in industrial.electricity_kwh.iter() {
            non_negative(&keys::electricity(source), *value)?;
        }
        for (fuel, value) in industrial.fuel_consumption.iter() {
            non_negative(&keys::fuel(fuel), *value)?;
        }
        non_negative(
            keys::BIOMASSA_COGERACAO_KG,
            industrial.cogeneration_biomass_kg,
        )?;
        non_negative(keys::AGUA_CONSUMO_M3, industrial.water_m3)?;
        non_negative(keys::OLEO_LUBRIFICANTE_L, industrial.lubricant_oil_l)?;
        non_negative(keys::AREIA_SILICA_KG, industrial.silica_sand_kg)?;
        non_negative(
            keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG,
            industrial.processed_biomass_kg,
        )?;

        let domestic = &self.distribution.domestic;
        non_negative(keys::QUANTIDADE_DISTRIBUICAO_TON, domestic.quantity_t)?;
        non_negative(keys::DISTANCIA_MERCADO_DOMESTICO_KM, domestic.distance_km)?;
        modal_split(
            keys::PARTICIPACAO_FERROVIARIA_DOMESTICA,
            keys::PARTICIPACAO_HIDROVIARIA_DOMESTICA,
            domestic.split,
        )?;

        let export = &self.distribution.export;
        non_negative(keys::QUANTIDADE_EXPORTADA_TON, export.quantity_t)?;
        non_negative(keys::DISTANCIA_FABRICA_PORTO_KM, export.port_distance_km)?;
        non_negative(keys::DISTANCIA_PORTO_DESTINO_KM, export.sea_distance_km)?;
        modal_split(
            keys::PARTICIPACAO_FERROVIARIA_PORTO,
            keys::PARTICIPACAO_HIDROVIARIA_PORTO,
            export.split,
        )?;
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    // NaN 도 여기서 걸린다
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

fn share_in_range(field: &str, value: f64) -> Result<(), ValidationError> {
    non_negative(field, value)?;
    if value > 1.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn modal_split(
    rail_field: &str,
    barge_field: &str,
    split: ModalSplit,
) -> Result<(), ValidationError> {
    share_in_range(rail_field, split.rail)?;
    share_in_range(barge_field, split.barge)?;
    let total = split.rail + split.barge;
    if total > 1.0 + 1e-9 {
        return Err(ValidationError::ModalSplitOverflow {
            field: format!("{rail_field}+{barge_field}"),
            total,
        });
    }
    Ok(())
}
