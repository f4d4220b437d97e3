//! 계산 결과를 사람이 읽는 보고서로 만든다.

use std::fmt::Write;

use crate::codes::Code;
use crate::engine::CalculationResult;

/// 텍스트 보고서를 만든다. 집약도는 g CO2eq/MJ 로 표시한다.
pub fn render_text(result: &CalculationResult) -> String {
    let mut out = String::new();
    // String 에 쓰는 fmt::Write 는 실패하지 않는다
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &CalculationResult) -> std::fmt::Result {
    let g = |kg: f64| kg * 1000.0;
    let phases = &result.phases;
    let details = &result.details;

    writeln!(out, "=== BioCalc 탄소 집약도 (계수표 {}) ===", result.coefficients_version)?;
    writeln!(
        out,
        "총 집약도: {:.2} g CO2eq/MJ ({:.5} kg CO2eq/MJ)",
        result.total_intensity_g_per_mj, result.total_intensity_kg_per_mj
    )?;
    writeln!(
        out,
        "  농업: {:.2}  (생산 {:.2}, MUT {:.2}, 원료 수송 {:.2})",
        g(phases.agricultural),
        g(details.agricultural.production),
        g(details.agricultural.land_use_change),
        g(details.agricultural.feedstock_transport)
    )?;
    writeln!(
        out,
        "  산업: {:.2}  (전력 {:.2}, 연료 {:.2}, 열병합 {:.2}, 투입물 {:.2})",
        g(phases.industrial),
        g(details.industrial.electricity),
        g(details.industrial.fuels),
        g(details.industrial.cogeneration),
        g(details.industrial.inputs)
    )?;
    if details.industrial.processed_mass_substituted && phases.industrial > 0.0 {
        writeln!(out, "        (처리량 미입력: 분모를 1로 대체)")?;
    }
    writeln!(
        out,
        "  유통: {:.2}  (국내 {:.2}, 수출 {:.2})",
        g(phases.distribution),
        g(details.distribution.domestic),
        g(details.distribution.export())
    )?;
    writeln!(out, "  사용: {:.2}", g(phases.use_phase))?;
    writeln!(
        out,
        "화석연료 기준({}): {:.2} g CO2eq/MJ",
        result.fossil_reference.substitute.code(),
        g(result.fossil_reference.intensity_kg_per_mj)
    )?;
    writeln!(out, "효율 점수: {:.2} g CO2eq/MJ", g(result.efficiency_score))?;
    writeln!(out, "예상 CBIO: {} /년", result.credits)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, RawInput};

    #[test]
    fn report_lists_every_phase() {
        let raw = RawInput::new().with("biomassa", "residuo_pinus");
        let result = Engine::default().calculate(&raw).unwrap();
        let text = render_text(&result);
        for label in ["농업", "산업", "유통", "사용", "예상 CBIO"] {
            assert!(text.contains(label), "missing {label}:\n{text}");
        }
        assert!(text.contains("media_ponderada"));
        assert!(!text.contains("분모를 1로 대체"));
    }
}
