//! 고체 바이오연료(펠릿·브리켓·목탄)의 수명주기 탄소 집약도, 효율 점수, CBIO 추정.
//!
//! 계산 로직은 모두 라이브러리에 두고, CLI 는 입출력만 담당한다.
//!
//! ```no_run
//! use biocalc::{Engine, RawInput};
//!
//! let raw = RawInput::new()
//!     .with("biomassa", "residuo_pinus")
//!     .with("volume_producao_ton", 12000.0);
//! let result = Engine::default().calculate(&raw)?;
//! println!("{} g CO2eq/MJ, {} CBIO", result.total_intensity_g_per_mj, result.credits);
//! # Ok::<(), biocalc::EngineError>(())
//! ```

pub mod codes;
pub mod coefficients;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod phases;
pub mod report;
pub mod scoring;

pub use coefficients::{CoefficientError, CoefficientTables};
pub use engine::{CalculationResult, DivisorPolicy, Engine};
pub use error::{EngineError, EngineResult, ValidationError};
pub use input::{normalize, ProcessInput, RawInput, RawValue};
