//! 입력 레코드와 계수표에서 쓰는 범주형 코드 모음.
//!
//! 모든 코드는 닫힌 enum 으로 표현하고, 문자열 코드와의 변환은 [`Code`] 트레이트가 담당한다.
//! 문자열 비교는 대소문자를 구분하지 않는다.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// 문자열 코드와 1:1 로 대응하는 닫힌 열거형.
///
/// `ALL` 은 선언 순서를 따르며 `index()` 는 그 안에서의 위치를 돌려준다.
pub trait Code: Copy + Eq + Ord + Debug + Default + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    fn index(self) -> usize;

    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

/// 바이오매스(원료) 종류.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BiomassType {
    ResiduoPinus,
    ResiduoEucaliptus,
    #[default]
    CascaAmendoim,
    EucaliptusVirgem,
    PinusVirgem,
    CarvaoVegetalEucalipto,
}

impl BiomassType {
    /// 토지이용변화(MUT) 계수를 찾을 때 쓰는 재배 작물군.
    pub const fn crop_family(self) -> CropFamily {
        match self {
            BiomassType::ResiduoPinus | BiomassType::PinusVirgem => CropFamily::Pinus,
            BiomassType::ResiduoEucaliptus
            | BiomassType::EucaliptusVirgem
            | BiomassType::CarvaoVegetalEucalipto => CropFamily::Eucalipto,
            BiomassType::CascaAmendoim => CropFamily::Amendoim,
        }
    }
}

impl Code for BiomassType {
    const ALL: &'static [Self] = &[
        BiomassType::ResiduoPinus,
        BiomassType::ResiduoEucaliptus,
        BiomassType::CascaAmendoim,
        BiomassType::EucaliptusVirgem,
        BiomassType::PinusVirgem,
        BiomassType::CarvaoVegetalEucalipto,
    ];

    fn code(self) -> &'static str {
        match self {
            BiomassType::ResiduoPinus => "residuo_pinus",
            BiomassType::ResiduoEucaliptus => "residuo_eucaliptus",
            BiomassType::CascaAmendoim => "casca_amendoim",
            BiomassType::EucaliptusVirgem => "eucaliptus_virgem",
            BiomassType::PinusVirgem => "pinus_virgem",
            BiomassType::CarvaoVegetalEucalipto => "carvao_vegetal_eucalipto",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 재배 작물군.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CropFamily {
    #[default]
    Pinus,
    Eucalipto,
    Amendoim,
}

impl Code for CropFamily {
    const ALL: &'static [Self] = &[CropFamily::Pinus, CropFamily::Eucalipto, CropFamily::Amendoim];

    fn code(self) -> &'static str {
        match self {
            CropFamily::Pinus => "pinus",
            CropFamily::Eucalipto => "eucalipto",
            CropFamily::Amendoim => "amendoim",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 원료 생산 주(州).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProductionState {
    #[default]
    SaoPaulo,
    Parana,
    SantaCatarina,
    RioGrandeDoSul,
    MinasGerais,
    MatoGrossoDoSul,
    Bahia,
    Goias,
}

impl Code for ProductionState {
    const ALL: &'static [Self] = &[
        ProductionState::SaoPaulo,
        ProductionState::Parana,
        ProductionState::SantaCatarina,
        ProductionState::RioGrandeDoSul,
        ProductionState::MinasGerais,
        ProductionState::MatoGrossoDoSul,
        ProductionState::Bahia,
        ProductionState::Goias,
    ];

    fn code(self) -> &'static str {
        match self {
            ProductionState::SaoPaulo => "sao_paulo",
            ProductionState::Parana => "parana",
            ProductionState::SantaCatarina => "santa_catarina",
            ProductionState::RioGrandeDoSul => "rio_grande_do_sul",
            ProductionState::MinasGerais => "minas_gerais",
            ProductionState::MatoGrossoDoSul => "mato_grosso_do_sul",
            ProductionState::Bahia => "bahia",
            ProductionState::Goias => "goias",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// MUT 배분 비율을 정하는 수명주기 단계.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    /// 주산물로 재배된 원료
    Primario,
    /// 부산물(공정 잔재 포함)
    #[default]
    Coproduto,
    /// 폐기 대상 잔재
    Residuo,
}

impl Code for LifecycleStage {
    const ALL: &'static [Self] = &[
        LifecycleStage::Primario,
        LifecycleStage::Coproduto,
        LifecycleStage::Residuo,
    ];

    fn code(self) -> &'static str {
        match self {
            LifecycleStage::Primario => "primario",
            LifecycleStage::Coproduto => "coproduto",
            LifecycleStage::Residuo => "residuo",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 운송 수단(차량/모드).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum TransportMode {
    /// 16~32 t 트럭
    #[default]
    #[serde(rename = "caminhao_16_32t")]
    Truck16To32t,
    /// 32 t 초과 트럭
    #[serde(rename = "caminhao_32t")]
    TruckOver32t,
    #[serde(rename = "ferroviario")]
    Rail,
    #[serde(rename = "balsa")]
    Barge,
    #[serde(rename = "navio")]
    Ship,
}

impl Code for TransportMode {
    const ALL: &'static [Self] = &[
        TransportMode::Truck16To32t,
        TransportMode::TruckOver32t,
        TransportMode::Rail,
        TransportMode::Barge,
        TransportMode::Ship,
    ];

    fn code(self) -> &'static str {
        match self {
            TransportMode::Truck16To32t => "caminhao_16_32t",
            TransportMode::TruckOver32t => "caminhao_32t",
            TransportMode::Rail => "ferroviario",
            TransportMode::Barge => "balsa",
            TransportMode::Ship => "navio",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 산업 단계 전력 공급원.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    /// 계통 전력, 중전압
    #[default]
    Media,
    /// 계통 전력, 고전압
    Alta,
    /// 소수력(PCH)
    Pch,
    /// 바이오매스 발전
    Biomassa,
    Eolica,
    Solar,
}

impl Code for EnergySource {
    const ALL: &'static [Self] = &[
        EnergySource::Media,
        EnergySource::Alta,
        EnergySource::Pch,
        EnergySource::Biomassa,
        EnergySource::Eolica,
        EnergySource::Solar,
    ];

    fn code(self) -> &'static str {
        match self {
            EnergySource::Media => "media",
            EnergySource::Alta => "alta",
            EnergySource::Pch => "pch",
            EnergySource::Biomassa => "biomassa",
            EnergySource::Eolica => "eolica",
            EnergySource::Solar => "solar",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 산업 단계 연료. 단위는 경유/휘발유/에탄올 L, 천연가스 m³, LPG·목재 kg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Diesel,
    GasNatural,
    Glp,
    GasolinaA,
    EtanolAnidro,
    EtanolHidratado,
    CavacoMadeira,
    Lenha,
}

impl Code for FuelType {
    const ALL: &'static [Self] = &[
        FuelType::Diesel,
        FuelType::GasNatural,
        FuelType::Glp,
        FuelType::GasolinaA,
        FuelType::EtanolAnidro,
        FuelType::EtanolHidratado,
        FuelType::CavacoMadeira,
        FuelType::Lenha,
    ];

    fn code(self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::GasNatural => "gas_natural",
            FuelType::Glp => "glp",
            FuelType::GasolinaA => "gasolina_a",
            FuelType::EtanolAnidro => "etanol_anidro",
            FuelType::EtanolHidratado => "etanol_hidratado",
            FuelType::CavacoMadeira => "cavaco_madeira",
            FuelType::Lenha => "lenha",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 대체 대상 화석연료. 효율 점수의 기준값을 고른다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FossilSubstitute {
    /// 화석연료 가중평균
    #[default]
    MediaPonderada,
    GasolinaA,
    DieselA,
    QueroseneAviacao,
    Glp,
    OleoCombustivel,
    CarvaoMineral,
}

impl Code for FossilSubstitute {
    const ALL: &'static [Self] = &[
        FossilSubstitute::MediaPonderada,
        FossilSubstitute::GasolinaA,
        FossilSubstitute::DieselA,
        FossilSubstitute::QueroseneAviacao,
        FossilSubstitute::Glp,
        FossilSubstitute::OleoCombustivel,
        FossilSubstitute::CarvaoMineral,
    ];

    fn code(self) -> &'static str {
        match self {
            FossilSubstitute::MediaPonderada => "media_ponderada",
            FossilSubstitute::GasolinaA => "gasolina_a",
            FossilSubstitute::DieselA => "diesel_a",
            FossilSubstitute::QueroseneAviacao => "querosene_aviacao",
            FossilSubstitute::Glp => "glp",
            FossilSubstitute::OleoCombustivel => "oleo_combustivel",
            FossilSubstitute::CarvaoMineral => "carvao_mineral",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_consistent<C: Code>() {
        for (position, item) in C::ALL.iter().enumerate() {
            assert_eq!(item.index(), position, "{item:?}");
            assert_eq!(C::from_code(item.code()), Some(*item));
        }
    }

    #[test]
    fn index_matches_declaration_order() {
        assert_codes_consistent::<BiomassType>();
        assert_codes_consistent::<CropFamily>();
        assert_codes_consistent::<ProductionState>();
        assert_codes_consistent::<LifecycleStage>();
        assert_codes_consistent::<TransportMode>();
        assert_codes_consistent::<EnergySource>();
        assert_codes_consistent::<FuelType>();
        assert_codes_consistent::<FossilSubstitute>();
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(
            BiomassType::from_code("  Residuo_Pinus "),
            Some(BiomassType::ResiduoPinus)
        );
        assert_eq!(
            TransportMode::from_code("CAMINHAO_32T"),
            Some(TransportMode::TruckOver32t)
        );
        assert_eq!(FuelType::from_code("querosene"), None);
    }

    #[test]
    fn crop_family_follows_biomass() {
        assert_eq!(BiomassType::PinusVirgem.crop_family(), CropFamily::Pinus);
        assert_eq!(
            BiomassType::CarvaoVegetalEucalipto.crop_family(),
            CropFamily::Eucalipto
        );
        assert_eq!(BiomassType::CascaAmendoim.crop_family(), CropFamily::Amendoim);
    }

    #[test]
    fn serde_names_match_codes() {
        let json = serde_json::to_string(&TransportMode::Truck16To32t).unwrap();
        assert_eq!(json, "\"caminhao_16_32t\"");
        let json = serde_json::to_string(&FossilSubstitute::DieselA).unwrap();
        assert_eq!(json, "\"diesel_a\"");
    }
}
