//! 입력 레코드의 필드 이름과 문서화된 기본값.
//!
//! 전력·연료 소비량 필드는 코드에서 이름을 만든다: `eletricidade_<원>_kwh`, `<연료>_consumo`.

use crate::codes::{Code, EnergySource, FuelType};

pub const BIOMASSA: &str = "biomassa";
pub const VOLUME_PRODUCAO_TON: &str = "volume_producao_ton";
pub const APROVEITAMENTO_BIOMASSA: &str = "aproveitamento_biomassa";
pub const PROPORCAO_AMIDO_MILHO: &str = "proporcao_amido_milho";
pub const ESTADO_PRODUCAO: &str = "estado_producao";
pub const ESTAGIO_ALOCACAO: &str = "estagio_alocacao";
pub const PERCENTUAL_ALOCACAO_MUT: &str = "percentual_alocacao_mut";
pub const DISTANCIA_TRANSPORTE_BIOMASSA: &str = "distancia_transporte_biomassa";
pub const TIPO_VEICULO_TRANSPORTE: &str = "tipo_veiculo_transporte";

pub const COGERACAO: &str = "cogeracao";
pub const BIOMASSA_COGERACAO_KG: &str = "biomassa_cogeracao_kg";
pub const AGUA_CONSUMO_M3: &str = "agua_consumo_m3";
pub const OLEO_LUBRIFICANTE_L: &str = "oleo_lubrificante_l";
pub const AREIA_SILICA_KG: &str = "areia_silica_kg";
pub const QUANTIDADE_BIOMASSA_PROCESSADA_KG: &str = "quantidade_biomassa_processada_kg";

pub const QUANTIDADE_DISTRIBUICAO_TON: &str = "quantidade_biocombustivel_distribuicao_ton";
pub const DISTANCIA_MERCADO_DOMESTICO_KM: &str = "distancia_mercado_domestico_km";
pub const TIPO_VEICULO_RODOVIARIO: &str = "tipo_veiculo_rodoviario";
pub const PARTICIPACAO_FERROVIARIA_DOMESTICA: &str = "participacao_ferroviaria_domestica";
pub const PARTICIPACAO_HIDROVIARIA_DOMESTICA: &str = "participacao_hidroviaria_domestica";

pub const EXPORTACAO: &str = "exportacao";
pub const QUANTIDADE_EXPORTADA_TON: &str = "quantidade_biocombustivel_exportado_ton";
pub const DISTANCIA_FABRICA_PORTO_KM: &str = "distancia_fabrica_porto_km";
pub const PARTICIPACAO_FERROVIARIA_PORTO: &str = "participacao_ferroviaria_porto";
pub const PARTICIPACAO_HIDROVIARIA_PORTO: &str = "participacao_hidroviaria_porto";
pub const DISTANCIA_PORTO_DESTINO_KM: &str = "distancia_porto_destino_km";

pub const COMBUSTIVEL_FOSSIL_SUBSTITUTO: &str = "combustivel_fossil_substituto";

pub fn electricity(source: EnergySource) -> String {
    format!("eletricidade_{}_kwh", source.code())
}

pub fn fuel(fuel: FuelType) -> String {
    format!("{}_consumo", fuel.code())
}

/// 숫자 필드 기본값.
pub mod defaults {
    pub const VOLUME_PRODUCAO_TON: f64 = 12_000.0;
    pub const DISTANCIA_TRANSPORTE_BIOMASSA: f64 = 100.0;
    pub const QUANTIDADE_DISTRIBUICAO_TON: f64 = 12_000.0;
    pub const DISTANCIA_MERCADO_DOMESTICO_KM: f64 = 100.0;
    pub const DISTANCIA_FABRICA_PORTO_KM: f64 = 410.0;
    pub const DISTANCIA_PORTO_DESTINO_KM: f64 = 10_015.23;
}
