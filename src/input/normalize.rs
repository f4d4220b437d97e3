use tracing::debug;

use super::keys::{self, defaults};
use super::model::{
    DistributionInput, DomesticLeg, ExportLeg, FeedstockInput, IndustrialInput, ModalSplit,
    ProcessInput,
};
use super::{RawInput, RawValue};
use crate::codes::Code;
use crate::coefficients::CodeTable;
use crate::error::ValidationError;

/// 느슨한 입력 레코드를 [`ProcessInput`] 으로 정규화한다.
///
/// 숫자 필드가 없거나 비었거나 숫자로 읽을 수 없으면 기본값을 쓴다.
/// 범주 필드는 모르는 코드면 기본 코드로 대체하고, 문자열이 아닌 값(숫자/불리언)이면 오류다.
/// 음수 물리량과 1을 넘는 분담률 합계는 오류로 돌려준다.
pub fn normalize(raw: &RawInput) -> Result<ProcessInput, ValidationError> {
    let export_switch = flag(raw, keys::EXPORTACAO)?;
    let input = ProcessInput {
        biomass: category(raw, keys::BIOMASSA)?,
        production_volume_t: number(raw, keys::VOLUME_PRODUCAO_TON, defaults::VOLUME_PRODUCAO_TON),
        feedstock: FeedstockInput {
            consumption_ratio: optional_number(raw, keys::APROVEITAMENTO_BIOMASSA),
            corn_starch_ratio: number(raw, keys::PROPORCAO_AMIDO_MILHO, 0.0),
            state: category(raw, keys::ESTADO_PRODUCAO)?,
            stage: category(raw, keys::ESTAGIO_ALOCACAO)?,
            allocation_override: optional_number(raw, keys::PERCENTUAL_ALOCACAO_MUT),
            transport_distance_km: number(
                raw,
                keys::DISTANCIA_TRANSPORTE_BIOMASSA,
                defaults::DISTANCIA_TRANSPORTE_BIOMASSA,
            ),
            vehicle: category(raw, keys::TIPO_VEICULO_TRANSPORTE)?,
        },
        industrial: IndustrialInput {
            electricity_kwh: CodeTable::from_fn(|source| {
                number(raw, &keys::electricity(source), 0.0)
            }),
            fuel_consumption: CodeTable::from_fn(|fuel| number(raw, &keys::fuel(fuel), 0.0)),
            cogeneration: flag(raw, keys::COGERACAO)?.unwrap_or(false),
            cogeneration_biomass_kg: number(raw, keys::BIOMASSA_COGERACAO_KG, 0.0),
            water_m3: number(raw, keys::AGUA_CONSUMO_M3, 0.0),
            lubricant_oil_l: number(raw, keys::OLEO_LUBRIFICANTE_L, 0.0),
            silica_sand_kg: number(raw, keys::AREIA_SILICA_KG, 0.0),
            processed_biomass_kg: number(raw, keys::QUANTIDADE_BIOMASSA_PROCESSADA_KG, 0.0),
        },
        distribution: DistributionInput {
            domestic: DomesticLeg {
                quantity_t: number(
                    raw,
                    keys::QUANTIDADE_DISTRIBUICAO_TON,
                    defaults::QUANTIDADE_DISTRIBUICAO_TON,
                ),
                distance_km: number(
                    raw,
                    keys::DISTANCIA_MERCADO_DOMESTICO_KM,
                    defaults::DISTANCIA_MERCADO_DOMESTICO_KM,
                ),
                road_vehicle: category(raw, keys::TIPO_VEICULO_RODOVIARIO)?,
                split: ModalSplit {
                    rail: number(raw, keys::PARTICIPACAO_FERROVIARIA_DOMESTICA, 0.0),
                    barge: number(raw, keys::PARTICIPACAO_HIDROVIARIA_DOMESTICA, 0.0),
                },
            },
            export: ExportLeg {
                enabled: export_switch.unwrap_or(true),
                quantity_t: number(raw, keys::QUANTIDADE_EXPORTADA_TON, 0.0),
                port_distance_km: number(
                    raw,
                    keys::DISTANCIA_FABRICA_PORTO_KM,
                    defaults::DISTANCIA_FABRICA_PORTO_KM,
                ),
                split: ModalSplit {
                    rail: number(raw, keys::PARTICIPACAO_FERROVIARIA_PORTO, 0.0),
                    barge: number(raw, keys::PARTICIPACAO_HIDROVIARIA_PORTO, 0.0),
                },
                sea_distance_km: number(
                    raw,
                    keys::DISTANCIA_PORTO_DESTINO_KM,
                    defaults::DISTANCIA_PORTO_DESTINO_KM,
                ),
            },
        },
        fossil_substitute: category(raw, keys::COMBUSTIVEL_FOSSIL_SUBSTITUTO)?,
    };
    input.validate()?;
    Ok(input)
}

fn number(raw: &RawInput, key: &str, default: f64) -> f64 {
    optional_number(raw, key).unwrap_or(default)
}

fn optional_number(raw: &RawInput, key: &str) -> Option<f64> {
    let value = raw.get(key)?;
    let parsed = match value {
        RawValue::Number(value) => Some(*value),
        RawValue::Text(text) => parse_decimal(text),
        RawValue::Null | RawValue::Bool(_) => None,
    };
    match parsed {
        Some(number) if number.is_finite() => Some(number),
        _ => {
            if !matches!(value, RawValue::Null) {
                debug!(field = key, ?value, "숫자로 읽을 수 없어 기본값 사용");
            }
            None
        }
    }
}

/// 숫자 텍스트를 읽는다.
///
/// - `"12.5"`, `" 12,5 "` 는 모두 12.5 (쉼표 하나만 있으면 소수점 쉼표)
/// - `"1.234,5"`, `"12.000,0"` 처럼 쉼표 앞에 점이 있으면 점은 천 단위 구분자
/// - 쉼표 없이 점만 있으면 점은 소수점이다. `"12.000"` 은 12 로 읽힌다.
fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.matches(',').count() {
        0 => text.parse().ok(),
        1 => {
            let (integer, fraction) = text.split_once(',')?;
            if fraction.contains('.') {
                return None;
            }
            let integer = if integer.contains('.') {
                ungroup_thousands(integer)?
            } else {
                integer.to_string()
            };
            format!("{integer}.{fraction}").parse().ok()
        }
        _ => None,
    }
}

/// `"1.234.567"` -> `"1234567"`. 첫 묶음은 1~3자리, 나머지는 정확히 3자리여야 한다.
fn ungroup_thousands(integer: &str) -> Option<String> {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    let mut groups = digits.split('.');
    let head = groups.next()?;
    let all_digits = |g: &str| g.chars().all(|c| c.is_ascii_digit());
    if head.is_empty() || head.len() > 3 || !all_digits(head) {
        return None;
    }
    let mut out = format!("{sign}{head}");
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

fn category<C: Code>(raw: &RawInput, key: &str) -> Result<C, ValidationError> {
    match raw.get(key) {
        None | Some(RawValue::Null) => Ok(C::default()),
        Some(RawValue::Text(text)) if text.trim().is_empty() => Ok(C::default()),
        Some(RawValue::Text(text)) => Ok(C::from_code(text).unwrap_or_else(|| {
            let fallback = C::default();
            debug!(
                field = key,
                code = %text,
                fallback = fallback.code(),
                "알 수 없는 코드, 기본 코드 사용"
            );
            fallback
        })),
        Some(RawValue::Number(_)) | Some(RawValue::Bool(_)) => {
            Err(ValidationError::InvalidCategory {
                field: key.to_string(),
            })
        }
    }
}

/// 예/아니오 필드. 비어 있거나 알아볼 수 없는 텍스트면 `None`.
fn flag(raw: &RawInput, key: &str) -> Result<Option<bool>, ValidationError> {
    match raw.get(key) {
        None | Some(RawValue::Null) => Ok(None),
        Some(RawValue::Bool(value)) => Ok(Some(*value)),
        Some(RawValue::Text(text)) => {
            let value = match text.trim().to_lowercase().as_str() {
                "sim" | "s" | "yes" | "y" | "true" | "1" => Some(true),
                "não" | "nao" | "n" | "no" | "false" | "0" => Some(false),
                "" => None,
                other => {
                    debug!(field = key, value = other, "알 수 없는 예/아니오 값, 기본값 사용");
                    None
                }
            };
            Ok(value)
        }
        Some(RawValue::Number(_)) => Err(ValidationError::InvalidCategory {
            field: key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_comma() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal(" 410 "), Some(410.0));
        assert_eq!(parse_decimal("1,000.5"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
        assert_eq!(parse_decimal("-3,5"), Some(-3.5));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn dots_before_comma_group_thousands() {
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
        assert_eq!(parse_decimal("12.000,0"), Some(12_000.0));
        assert_eq!(parse_decimal("12.000.000,25"), Some(12_000_000.25));
        assert_eq!(parse_decimal("1.23,4"), None);
        assert_eq!(parse_decimal("1234.567,8"), None);
        // 쉼표가 없으면 점은 소수점
        assert_eq!(parse_decimal("12.000"), Some(12.0));
    }

    #[test]
    fn non_finite_text_falls_back() {
        let raw = RawInput::new().with(keys::VOLUME_PRODUCAO_TON, "NaN");
        assert_eq!(number(&raw, keys::VOLUME_PRODUCAO_TON, 7.0), 7.0);
        let raw = RawInput::new().with(keys::VOLUME_PRODUCAO_TON, "inf");
        assert_eq!(number(&raw, keys::VOLUME_PRODUCAO_TON, 7.0), 7.0);
    }

    #[test]
    fn flag_accepts_portuguese_answers() {
        let raw = RawInput::new()
            .with(keys::EXPORTACAO, "Não")
            .with(keys::COGERACAO, "Sim");
        assert_eq!(flag(&raw, keys::EXPORTACAO), Ok(Some(false)));
        assert_eq!(flag(&raw, keys::COGERACAO), Ok(Some(true)));
        assert_eq!(flag(&raw, "ausente"), Ok(None));
    }
}
