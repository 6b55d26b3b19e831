//! 명령행 인자 정의.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::ui_cli::Prefilled;

/// 주간 러닝 볼륨 진행 계획 계산기
#[derive(Parser, Debug, Clone)]
#[command(name = "running-planner")]
#[command(version)]
#[command(about = "Generate a week-by-week training volume plan with recovery weeks", long_about = None)]
pub struct Cli {
    /// 언어 코드 (auto, en, ko)
    #[arg(long, default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 계산할 주 수
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub weeks: Option<String>,

    /// 시작 볼륨
    #[arg(long, value_name = "VOLUME", allow_hyphen_values = true)]
    pub initial_volume: Option<String>,

    /// 주간 증가율 [%]
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub increment: Option<String>,

    /// 회복 주 간격 (0 = 회복 주 없음)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub recovery_interval: Option<String>,

    /// 회복 주 감소율 [%]
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub recovery_decrement: Option<String>,

    /// 볼륨을 정수로 반올림할지 여부
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub round: Option<bool>,

    /// 회복 주 강조(밑줄)를 끈다
    #[arg(long)]
    pub no_color: bool,

    /// 이번 입력값을 설정 파일의 새 기본값으로 저장
    #[arg(long)]
    pub save_defaults: bool,
}

impl Cli {
    pub fn prefilled(&self) -> Prefilled {
        Prefilled {
            total_weeks: self.weeks.clone(),
            initial_volume: self.initial_volume.clone(),
            increment_percent: self.increment.clone(),
            recovery_interval: self.recovery_interval.clone(),
            recovery_decrement_percent: self.recovery_decrement.clone(),
            round_to_integer: self.round,
        }
    }
}
