use crate::coefficients::CoefficientError;

/// 입력 검증 오류. 항상 문제가 된 필드 이름을 담는다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{field}` 값은 0 이상이어야 합니다 (입력값 {value})")]
    Negative { field: String, value: f64 },
    #[error("`{field}` 값은 0과 1 사이여야 합니다 (입력값 {value})")]
    OutOfRange { field: String, value: f64 },
    #[error("`{field}` 항목은 코드 문자열이어야 합니다")]
    InvalidCategory { field: String },
    #[error("`{field}` 모드 분담률 합계가 1을 넘습니다 (합계 {total})")]
    ModalSplitOverflow { field: String, total: f64 },
    #[error("`{field}` 값이 0이라 MJ 기준 환산을 할 수 없습니다")]
    ZeroDivisor { field: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidCategory { field }
            | ValidationError::ModalSplitOverflow { field, .. }
            | ValidationError::ZeroDivisor { field } => field,
        }
    }
}

/// 계산 엔진 오류.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Coefficients(#[from] CoefficientError),
    #[error("`{stage}` 계산 결과가 유한한 수가 아닙니다")]
    NonFinite { stage: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;
