use std::io::Write;

use thiserror::Error;

use crate::cli::Cli;
use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::plan;
use crate::ui_cli::{self, Console, LineSource, Prompt};
use crate::validation::{self, ValidationError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid values: {}", join_errors(.0))]
    InvalidArguments(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 실행 결과. 취소도 정상 종료로 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// 입력 수집 → 계획 계산 → 출력까지 한 번 실행한다.
pub fn run<L: LineSource, W: Write>(
    cli: &Cli,
    config: &mut Config,
    tr: &Translator,
    console: &mut Console<L, W>,
) -> Result<Outcome, AppError> {
    let prefilled = cli.prefilled();
    prefilled.check().map_err(AppError::InvalidArguments)?;

    writeln!(console.output())?;
    writeln!(console.output(), "{}", tr.t(keys::INTRO))?;

    let raw = match console.collect_inputs(tr, &config.defaults, &prefilled)? {
        Prompt::Answered(raw) => raw,
        Prompt::Cancelled => {
            writeln!(console.output(), "{}", tr.t(keys::CANCELLED))?;
            tracing::info!("cancelled by user");
            return Ok(Outcome::Cancelled);
        }
    };
    let plan_config = validation::validate(&raw).map_err(AppError::InvalidArguments)?;
    tracing::debug!(?plan_config, "validated plan config");

    writeln!(console.output(), "{}", tr.t(keys::OUTRO))?;
    let weeks = plan::Progression::new(plan_config);
    ui_cli::render_plan(console.output(), tr, weeks, !cli.no_color)?;

    if cli.save_defaults {
        config.defaults.remember(&plan_config);
        config.save(&cli.config)?;
        writeln!(console.output(), "{}", tr.t(keys::DEFAULTS_SAVED))?;
    }
    Ok(Outcome::Completed)
}
