//! 내장 보정 계수(2024.1).
//! 값은 참고용이며, 재보정 시에는 TOML 문서로 새 버전을 만들어 주입한다.

use super::{
    BiomassCoefficients, CodeTable, CoefficientTables, CreditConversion, FuelFactors,
    InputFactors,
};
use crate::codes::{
    BiomassType, CropFamily, EnergySource, FossilSubstitute, FuelType, LifecycleStage,
    ProductionState, TransportMode,
};

pub const EMBEDDED_VERSION: &str = "2024.1";

pub(super) fn embedded() -> CoefficientTables {
    CoefficientTables {
        version: EMBEDDED_VERSION.to_string(),
        biomass: CodeTable::from_fn(biomass),
        land_use_change: CodeTable::from_fn(|family| {
            CodeTable::from_fn(|state| land_use_change(family, state))
        }),
        transport: CodeTable::from_fn(transport),
        electricity: CodeTable::from_fn(electricity),
        fuels: CodeTable::from_fn(fuel),
        inputs: InputFactors {
            corn_starch_kg_per_kg: 1.08,
            cogeneration_biomass_kg_per_kg: 0.031,
            water_kg_per_m3: 0.344,
            lubricant_oil_kg_per_l: 1.29,
            silica_sand_kg_per_kg: 0.0236,
        },
        fossil_references: CodeTable::from_fn(fossil_reference),
        credit: CreditConversion {
            conversion_factor: 0.8,
            scale_by_calorific_value: true,
            scale_by_volume: true,
        },
    }
}

fn biomass(kind: BiomassType) -> BiomassCoefficients {
    // (PCI, 생산계수, 운송부하, 연소배출, [주산물, 부산물, 잔재] 배분)
    let (pci, production, load, combustion, shares) = match kind {
        BiomassType::ResiduoPinus => (18.8, 0.000_08, 6.38e-5, 0.005_957, [1.0, 0.325, 0.10]),
        BiomassType::ResiduoEucaliptus => {
            (15.8, 0.000_09, 7.59e-5, 0.007_089, [1.0, 0.325, 0.10])
        }
        BiomassType::CascaAmendoim => (17.1, 0.000_12, 7.02e-5, 0.006_550, [1.0, 0.28, 0.08]),
        BiomassType::EucaliptusVirgem => (15.8, 0.000_60, 7.59e-5, 0.007_089, [1.0, 0.60, 0.20]),
        BiomassType::PinusVirgem => (18.8, 0.000_68, 6.38e-5, 0.005_957, [1.0, 0.60, 0.20]),
        BiomassType::CarvaoVegetalEucalipto => {
            (18.5, 0.001_10, 1.892e-4, 0.006_054, [1.0, 0.75, 0.25])
        }
    };
    BiomassCoefficients {
        calorific_value_mj_per_kg: pci,
        production_factor: production,
        transport_load_t_per_mj: load,
        combustion_kg_per_mj: combustion,
        allocation: CodeTable::from_fn(|stage| match stage {
            LifecycleStage::Primario => shares[0],
            LifecycleStage::Coproduto => shares[1],
            LifecycleStage::Residuo => shares[2],
        }),
    }
}

fn land_use_change(family: CropFamily, state: ProductionState) -> f64 {
    // 열 순서: SP, PR, SC, RS, MG, MS, BA, GO
    let row: [f64; 8] = match family {
        CropFamily::Pinus => [
            0.000_50, 0.000_42, 0.000_40, 0.000_55, 0.000_78, 0.000_90, 0.001_02, 0.000_95,
        ],
        CropFamily::Eucalipto => [
            0.000_46, 0.000_48, 0.000_47, 0.000_52, 0.000_60, 0.000_71, 0.000_83, 0.000_76,
        ],
        CropFamily::Amendoim => [
            0.000_58, 0.000_63, 0.000_66, 0.000_69, 0.000_81, 0.000_92, 0.001_10, 0.000_98,
        ],
    };
    let column = match state {
        ProductionState::SaoPaulo => 0,
        ProductionState::Parana => 1,
        ProductionState::SantaCatarina => 2,
        ProductionState::RioGrandeDoSul => 3,
        ProductionState::MinasGerais => 4,
        ProductionState::MatoGrossoDoSul => 5,
        ProductionState::Bahia => 6,
        ProductionState::Goias => 7,
    };
    row[column]
}

fn transport(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Truck16To32t => 0.098,
        TransportMode::TruckOver32t => 0.061,
        TransportMode::Rail => 0.033,
        TransportMode::Barge => 0.035,
        TransportMode::Ship => 0.0095,
    }
}

fn electricity(source: EnergySource) -> f64 {
    match source {
        EnergySource::Media => 0.0927,
        EnergySource::Alta => 0.0871,
        EnergySource::Pch => 0.0105,
        EnergySource::Biomassa => 0.0436,
        EnergySource::Eolica => 0.0136,
        EnergySource::Solar => 0.0438,
    }
}

fn fuel(kind: FuelType) -> FuelFactors {
    let (production, combustion) = match kind {
        FuelType::Diesel => (0.5786, 2.671),
        FuelType::GasNatural => (0.381, 2.077),
        FuelType::Glp => (0.498, 2.932),
        FuelType::GasolinaA => (0.638, 2.212),
        FuelType::EtanolAnidro => (0.415, 0.012),
        FuelType::EtanolHidratado => (0.403, 0.011),
        // 목재류는 생물기원 CO2 제외, CH4/N2O 만 반영
        FuelType::CavacoMadeira => (0.018, 0.032),
        FuelType::Lenha => (0.015, 0.029),
    };
    FuelFactors {
        production,
        combustion,
    }
}

fn fossil_reference(substitute: FossilSubstitute) -> f64 {
    match substitute {
        FossilSubstitute::MediaPonderada => 0.0867,
        FossilSubstitute::GasolinaA => 0.0874,
        FossilSubstitute::DieselA => 0.0865,
        FossilSubstitute::QueroseneAviacao => 0.0875,
        FossilSubstitute::Glp => 0.085,
        FossilSubstitute::OleoCombustivel => 0.087,
        FossilSubstitute::CarvaoMineral => 0.0984,
    }
}
