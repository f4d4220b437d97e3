use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use biocalc::config::{self, Config, ConfigError, OutputFormat};
use biocalc::{report, CoefficientError, DivisorPolicy, EngineError, RawInput};

/// 고체 바이오연료 탄소 집약도 계산기.
#[derive(Debug, Parser)]
#[command(name = "biocalc", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 입력 레코드(JSON)로 탄소 집약도·점수·CBIO 를 계산한다
    Calculate(CalculateArgs),
    /// 사용 중인 계수표를 TOML 로 출력한다
    Tables(TablesArgs),
}

#[derive(Debug, Args)]
struct CalculateArgs {
    /// 입력 JSON 파일. 생략하면 표준 입력에서 읽는다
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// 출력 형식 (설정 파일 값보다 우선)
    #[arg(long, short, value_enum)]
    format: Option<FormatArg>,
    /// 외부 계수표(TOML) 경로
    #[arg(long)]
    coefficients: Option<PathBuf>,
    /// 처리량 0 을 1로 대체하지 않고 오류로 처리
    #[arg(long)]
    reject_zero_divisor: bool,
}

#[derive(Debug, Args)]
struct TablesArgs {
    /// 외부 계수표(TOML) 경로
    #[arg(long)]
    coefficients: Option<PathBuf>,
    /// 출력 파일. 생략하면 표준 출력
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("입력 JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coefficients(#[from] CoefficientError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(EngineError::Validation(_)) | CliError::Json(_) => 2,
            CliError::Engine(_) => 4,
            _ => 1,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(err.exit_code());
    }
}

fn try_run(cli: Cli) -> Result<(), CliError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    init_tracing(&cfg);
    debug!(config = %cli.config.display(), ?cfg, "설정 로드");

    match cli.command {
        Command::Calculate(args) => {
            if args.coefficients.is_some() {
                cfg.coefficients = args.coefficients;
            }
            if args.reject_zero_divisor {
                cfg.divisor_policy = DivisorPolicy::Reject;
            }
            let format = match args.format {
                Some(FormatArg::Json) => OutputFormat::Json,
                Some(FormatArg::Text) => OutputFormat::Text,
                None => cfg.output,
            };
            run_calculate(&cfg, args.input, format)
        }
        Command::Tables(args) => {
            if args.coefficients.is_some() {
                cfg.coefficients = args.coefficients;
            }
            let toml = cfg.coefficient_tables()?.to_toml_string()?;
            match args.output {
                Some(path) => fs::write(path, toml)?,
                None => print!("{toml}"),
            }
            Ok(())
        }
    }
}

fn run_calculate(
    cfg: &Config,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let content = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let raw: RawInput = serde_json::from_str(&content)?;
    let engine = cfg.engine()?;
    let result = engine.calculate(&raw)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", report::render_text(&result)),
    }
    Ok(())
}

fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
