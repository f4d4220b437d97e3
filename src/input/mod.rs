//! 외부 협력자가 넘기는 평면 입력 레코드와, 이를 검증된 [`ProcessInput`] 으로 바꾸는 정규화.

pub mod keys;
mod model;
mod normalize;

pub use model::{
    DistributionInput, DomesticLeg, ExportLeg, FeedstockInput, IndustrialInput, ModalSplit,
    ProcessInput,
};
pub use normalize::normalize;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 입력 필드 하나의 값. 폼/JSON 에서 오는 느슨한 타입을 그대로 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// 필드 이름 → 값 매핑.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput(BTreeMap<String, RawValue>);

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// 빌더 형태로 필드를 추가한다.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
