use std::process::ExitCode;

use clap::Parser;
use running_planner::app::{self, AppError, Outcome};
use running_planner::cli::Cli;
use running_planner::i18n::{self, keys, Translator};
use running_planner::ui_cli::{self, Console};
use running_planner::{config, logging};

/// 프로그램의 엔트리 포인트. 취소와 정상 종료는 0, 오류는 1을 돌려준다.
fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!(%err, "failed to load config");
            eprintln!("{} {err}", Translator::new("en").t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let mut console = match Console::terminal() {
        Ok(console) => console,
        Err(err) => {
            tracing::error!(%err, "failed to open terminal input");
            eprintln!("{} {err}", tr.t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    match app::run(&cli, &mut cfg, &tr, &mut console) {
        Ok(Outcome::Completed) | Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(AppError::InvalidArguments(errors)) => {
            tracing::error!(count = errors.len(), "invalid input values");
            eprintln!("{}", tr.t(keys::ERROR_INVALID_ARGUMENTS));
            for err in &errors {
                let hint = tr.t(ui_cli::field_message_key(err.field()));
                eprintln!("  --{}: {hint} ({err})", flag_name(err.field()));
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("{} {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn flag_name(field: running_planner::validation::Field) -> &'static str {
    use running_planner::validation::Field;
    match field {
        Field::TotalWeeks => "weeks",
        Field::InitialVolume => "initial-volume",
        Field::IncrementPercent => "increment",
        Field::RecoveryInterval => "recovery-interval",
        Field::RecoveryDecrementPercent => "recovery-decrement",
    }
}
