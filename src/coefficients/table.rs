use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::codes::Code;

/// 닫힌 코드 `K` 의 모든 항목에 값이 하나씩 있는 표.
///
/// 생성 시점에 누락·중복 항목을 거부하므로 조회는 항상 성공한다.
/// TOML/JSON 에서는 `코드 문자열 -> 값` 맵으로 표현된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, V>",
    into = "BTreeMap<String, V>",
    bound(
        serialize = "K: Code, V: Clone + Serialize",
        deserialize = "K: Code, V: Deserialize<'de>"
    )
)]
pub struct CodeTable<K, V> {
    values: Vec<V>,
    _key: PhantomData<K>,
}

impl<K: Code, V> CodeTable<K, V> {
    /// 각 코드에 대해 `f` 를 호출해 표를 채운다.
    pub fn from_fn(mut f: impl FnMut(K) -> V) -> Self {
        Self {
            values: K::ALL.iter().map(|key| f(*key)).collect(),
            _key: PhantomData,
        }
    }

    /// 코드 문자열 맵에서 표를 만든다.
    ///
    /// 코드는 대소문자를 구분하지 않으므로 `navio` 와 `NAVIO` 가 함께 있으면 중복 오류다.
    /// 모르는 코드나 누락 코드도 오류 메시지로 돌려준다.
    pub fn from_codes(raw: BTreeMap<String, V>) -> Result<Self, String> {
        let mut slots: Vec<Option<V>> = K::ALL.iter().map(|_| None).collect();
        for (code, value) in raw {
            let key = K::from_code(&code).ok_or_else(|| format!("알 수 없는 코드: `{code}`"))?;
            let slot = &mut slots[key.index()];
            if slot.is_some() {
                return Err(format!("중복 코드: `{}` (`{code}`)", key.code()));
            }
            *slot = Some(value);
        }
        let mut values = Vec::with_capacity(slots.len());
        for (key, slot) in K::ALL.iter().zip(slots) {
            match slot {
                Some(value) => values.push(value),
                None => return Err(format!("`{}` 항목이 없습니다", key.code())),
            }
        }
        Ok(Self {
            values,
            _key: PhantomData,
        })
    }

    pub fn get(&self, key: K) -> &V {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: K, value: V) {
        self.values[key.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        K::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<K: Code, V: Default> Default for CodeTable<K, V> {
    fn default() -> Self {
        Self::from_fn(|_| V::default())
    }
}

impl<K: Code, V> TryFrom<BTreeMap<String, V>> for CodeTable<K, V> {
    type Error = String;

    fn try_from(raw: BTreeMap<String, V>) -> Result<Self, Self::Error> {
        Self::from_codes(raw)
    }
}

impl<K: Code, V> From<CodeTable<K, V>> for BTreeMap<String, V> {
    fn from(table: CodeTable<K, V>) -> Self {
        K::ALL
            .iter()
            .map(|key| key.code().to_string())
            .zip(table.values)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CropFamily;

    #[test]
    fn rejects_missing_and_unknown_codes() {
        let mut raw = BTreeMap::new();
        raw.insert("pinus".to_string(), 1.0);
        raw.insert("eucalipto".to_string(), 2.0);
        let err = CodeTable::<CropFamily, f64>::from_codes(raw.clone()).unwrap_err();
        assert!(err.contains("amendoim"), "{err}");

        raw.insert("amendoim".to_string(), 3.0);
        raw.insert("soja".to_string(), 4.0);
        let err = CodeTable::<CropFamily, f64>::from_codes(raw).unwrap_err();
        assert!(err.contains("soja"), "{err}");
    }

    #[test]
    fn codes_are_matched_case_insensitively() {
        let mut raw = BTreeMap::new();
        raw.insert("Pinus".to_string(), 1.0);
        raw.insert("EUCALIPTO".to_string(), 2.0);
        raw.insert("amendoim".to_string(), 3.0);
        let table = CodeTable::<CropFamily, f64>::from_codes(raw).unwrap();
        assert_eq!(*table.get(CropFamily::Eucalipto), 2.0);
    }

    #[test]
    fn rejects_same_code_spelled_twice() {
        let mut raw = BTreeMap::new();
        raw.insert("pinus".to_string(), 1.0);
        raw.insert("eucalipto".to_string(), 2.0);
        raw.insert("amendoim".to_string(), 3.0);
        raw.insert("AMENDOIM".to_string(), 99.0);
        let err = CodeTable::<CropFamily, f64>::from_codes(raw).unwrap_err();
        assert!(err.contains("amendoim"), "{err}");
    }

    #[test]
    fn serializes_as_code_map() {
        let table = CodeTable::<CropFamily, f64>::from_fn(|family| family.index() as f64);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["pinus"], 0.0);
        assert_eq!(json["amendoim"], 2.0);
        let back: CodeTable<CropFamily, f64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }
}
