//! 대표 시나리오와 파이프라인 전체 성질 검사.
use biocalc::codes::{BiomassType, FossilSubstitute};
use biocalc::input::keys;
use biocalc::{CalculationResult, Engine, EngineError, RawInput};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1e-12);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn pinus_scenario() -> RawInput {
    RawInput::new()
        .with(keys::BIOMASSA, "residuo_pinus")
        .with(keys::VOLUME_PRODUCAO_TON, 12_000.0)
        .with(keys::DISTANCIA_TRANSPORTE_BIOMASSA, 100.0)
        .with(keys::TIPO_VEICULO_TRANSPORTE, "caminhao_16_32t")
        .with(keys::QUANTIDADE_EXPORTADA_TON, 0.0)
}

fn calculate(raw: &RawInput) -> CalculationResult {
    Engine::default().calculate(raw).expect("calculation")
}

#[test]
fn pinus_residue_reference_scenario() {
    let res = calculate(&pinus_scenario());
    let agri = &res.details.agricultural;

    assert_close("production", agri.production, 0.001_504, 1e-9);
    assert_close("mut", agri.land_use_change, 0.003_055, 1e-9);
    assert_close("transport", agri.feedstock_transport, 0.000_625_24, 1e-9);
    assert!(agri.land_use_change + agri.feedstock_transport > agri.production);

    assert_eq!(res.phases.industrial, 0.0);
    assert_close("distribution", res.phases.distribution, 0.000_521_276_595_744_680_9, 1e-9);
    assert_close("use", res.phases.use_phase, 0.005_957, 1e-12);

    assert_close("total kg", res.total_intensity_kg_per_mj, 0.011_662_516_595_744_68, 1e-9);
    assert_close("total g", res.total_intensity_g_per_mj, 11.662_516_595_744_68, 1e-9);
    assert_eq!(res.fossil_reference.substitute, FossilSubstitute::MediaPonderada);
    assert_close("score", res.efficiency_score, 0.0867 - res.total_intensity_kg_per_mj, 1e-12);
    assert_eq!(res.credits, 13_542);
    assert_eq!(res.coefficients_version, "2024.1");
}

#[test]
fn total_is_sum_of_phases() {
    let inputs = [
        pinus_scenario(),
        RawInput::new(),
        RawInput::new()
            .with(keys::BIOMASSA, "carvao_vegetal_eucalipto")
            .with(keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG, 40_000_000.0)
            .with("eletricidade_media_kwh", 2_000_000.0)
            .with("diesel_consumo", 35_000.0)
            .with(keys::QUANTIDADE_EXPORTADA_TON, 3_000.0)
            .with(keys::PARTICIPACAO_FERROVIARIA_PORTO, 0.4),
    ];
    for raw in &inputs {
        let res = calculate(raw);
        let p = &res.phases;
        let sum = p.agricultural + p.industrial + p.distribution + p.use_phase;
        assert_close("aggregation", res.total_intensity_kg_per_mj, sum, 1e-12);
        let d = &res.details;
        assert_close("agri detail", p.agricultural, d.agricultural.total(), 1e-12);
        assert_close("ind detail", p.industrial, d.industrial.total(), 1e-12);
        assert_close("dist detail", p.distribution, d.distribution.total(), 1e-12);
    }
}

#[test]
fn no_score_or_credits_above_fossil_reference() {
    // 장거리 수송으로 집약도를 기준값 위로 밀어 올린다
    let raw = pinus_scenario().with(keys::DISTANCIA_TRANSPORTE_BIOMASSA, 20_000.0);
    let res = calculate(&raw);
    assert!(res.total_intensity_kg_per_mj >= res.fossil_reference.intensity_kg_per_mj);
    assert_eq!(res.efficiency_score, 0.0);
    assert_eq!(res.credits, 0);
}

#[test]
fn credits_never_decrease_with_volume() {
    let mut previous = 0;
    for volume in [0.0, 1.0, 10.0, 250.0, 1_000.0, 12_000.0, 50_000.0, 1.0e6] {
        let res = calculate(&pinus_scenario().with(keys::VOLUME_PRODUCAO_TON, volume));
        assert!(res.credits >= previous, "volume {volume}: {} < {previous}", res.credits);
        previous = res.credits;
    }
    let res = calculate(&pinus_scenario().with(keys::VOLUME_PRODUCAO_TON, 0.0));
    assert_eq!(res.credits, 0);
}

#[test]
fn agricultural_phase_grows_with_distance() {
    let mut previous = f64::NEG_INFINITY;
    for distance in [0.0, 10.0, 55.5, 100.0, 400.0, 2_500.0] {
        let raw = pinus_scenario().with(keys::DISTANCIA_TRANSPORTE_BIOMASSA, distance);
        let res = calculate(&raw);
        assert!(res.phases.agricultural >= previous);
        previous = res.phases.agricultural;
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let raw = pinus_scenario()
        .with("eletricidade_solar_kwh", 12_345.6)
        .with(keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG, 9_000_000.0);
    let engine = Engine::default();
    let first = serde_json::to_string(&engine.calculate(&raw).unwrap()).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&engine.calculate(&raw).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn missing_fields_match_explicit_defaults() {
    let implicit = calculate(&RawInput::new().with(keys::BIOMASSA, "residuo_eucaliptus"));
    let explicit = calculate(
        &RawInput::new()
            .with(keys::BIOMASSA, "residuo_eucaliptus")
            .with(keys::VOLUME_PRODUCAO_TON, 12_000.0)
            .with(keys::PROPORCAO_AMIDO_MILHO, 0.0)
            .with(keys::ESTADO_PRODUCAO, "sao_paulo")
            .with(keys::ESTAGIO_ALOCACAO, "coproduto")
            .with(keys::DISTANCIA_TRANSPORTE_BIOMASSA, 100.0)
            .with(keys::TIPO_VEICULO_TRANSPORTE, "caminhao_16_32t")
            .with(keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG, 0.0)
            .with(keys::QUANTIDADE_DISTRIBUICAO_TON, 12_000.0)
            .with(keys::DISTANCIA_MERCADO_DOMESTICO_KM, 100.0)
            .with(keys::TIPO_VEICULO_RODOVIARIO, "caminhao_16_32t")
            .with(keys::PARTICIPACAO_FERROVIARIA_DOMESTICA, 0.0)
            .with(keys::PARTICIPACAO_HIDROVIARIA_DOMESTICA, 0.0)
            .with(keys::QUANTIDADE_EXPORTADA_TON, 0.0)
            .with(keys::DISTANCIA_FABRICA_PORTO_KM, 410.0)
            .with(keys::DISTANCIA_PORTO_DESTINO_KM, 10_015.23)
            .with(keys::COMBUSTIVEL_FOSSIL_SUBSTITUTO, "media_ponderada")
            .with("diesel_consumo", 0.0)
            .with("eletricidade_alta_kwh", 0.0),
    );
    assert_eq!(implicit, explicit);

    let blank = calculate(
        &RawInput::new()
            .with(keys::BIOMASSA, "residuo_eucaliptus")
            .with(keys::VOLUME_PRODUCAO_TON, "")
            .with(keys::DISTANCIA_TRANSPORTE_BIOMASSA, "cem"),
    );
    assert_eq!(implicit, blank);
}

#[test]
fn export_only_distribution_is_export_leg() {
    let raw = pinus_scenario()
        .with(keys::QUANTIDADE_DISTRIBUICAO_TON, 0.0)
        .with(keys::QUANTIDADE_EXPORTADA_TON, 500.0);
    let res = calculate(&raw);
    let dist = &res.details.distribution;
    assert_eq!(dist.domestic, 0.0);
    assert_close("port", dist.export_port, 0.002_137_234_042_553_191_4, 1e-9);
    assert_close("sea", dist.export_sea, 0.005_060_887_5, 1e-9);
    assert_close("distribution", res.phases.distribution, dist.export(), 1e-12);
}

#[test]
fn export_switch_off_ignores_export_quantity() {
    let base = calculate(&pinus_scenario());
    let switched_off = calculate(
        &pinus_scenario()
            .with(keys::QUANTIDADE_EXPORTADA_TON, 500.0)
            .with(keys::EXPORTACAO, "Não"),
    );
    assert_eq!(base, switched_off);
}

#[test]
fn unknown_biomass_uses_default_biomass() {
    let unknown = calculate(&pinus_scenario().with(keys::BIOMASSA, "bagaco_de_cana"));
    let explicit = calculate(&pinus_scenario().with(keys::BIOMASSA, "casca_amendoim"));
    assert_eq!(unknown, explicit);
    assert_eq!(BiomassType::default(), BiomassType::CascaAmendoim);
    assert_eq!(unknown.credits, 12_157);
}

#[test]
fn substitute_selects_reference() {
    let raw = pinus_scenario().with(keys::COMBUSTIVEL_FOSSIL_SUBSTITUTO, "carvao_mineral");
    let res = calculate(&raw);
    assert_eq!(res.fossil_reference.substitute, FossilSubstitute::CarvaoMineral);
    assert_close("reference", res.fossil_reference.intensity_kg_per_mj, 0.0984, 1e-12);

    let unknown = calculate(&pinus_scenario().with(keys::COMBUSTIVEL_FOSSIL_SUBSTITUTO, "nafta"));
    assert_eq!(unknown.fossil_reference.substitute, FossilSubstitute::MediaPonderada);
}

#[test]
fn overflowing_consumption_is_reported_as_non_finite() {
    let raw = pinus_scenario()
        .with("diesel_consumo", 1.0e308)
        .with("gas_natural_consumo", 1.0e308)
        .with(keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG, 12.0e6);
    match Engine::default().calculate(&raw) {
        Err(EngineError::NonFinite { stage }) => assert_eq!(stage, "industrial"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Engine::default();
    let expected = engine.calculate(&pinus_scenario()).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.calculate(&pinus_scenario()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn result_serializes_with_phase_names() {
    let res = calculate(&pinus_scenario());
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["credits"], 13_542);
    assert!(json["phases"]["use"].is_number());
    assert_eq!(json["fossil_reference"]["substitute"], "media_ponderada");
}
