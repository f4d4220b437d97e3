use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::coefficients::{CoefficientError, CoefficientTables};
use crate::engine::{DivisorPolicy, Engine};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "biocalc.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 외부 계수표(TOML) 경로. 없으면 내장 보정값을 쓴다.
    pub coefficients: Option<PathBuf>,
    pub divisor_policy: DivisorPolicy,
    /// `RUST_LOG` 가 없을 때 쓰는 tracing 필터
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients: None,
            divisor_policy: DivisorPolicy::default(),
            log_filter: "info".to_string(),
            output: OutputFormat::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Coefficients(#[from] CoefficientError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정된 계수표를 읽는다.
    pub fn coefficient_tables(&self) -> Result<CoefficientTables, ConfigError> {
        match &self.coefficients {
            Some(path) => Ok(CoefficientTables::load(path)?),
            None => Ok(CoefficientTables::embedded()),
        }
    }

    /// 설정대로 계산 엔진을 만든다.
    pub fn engine(&self) -> Result<Engine, ConfigError> {
        let tables = self.coefficient_tables()?;
        Ok(Engine::new(tables).with_divisor_policy(self.divisor_policy))
    }
}
