use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::validation::{Field, RawInputs};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 각 프롬프트에 미리 채워 보여줄 기본 답.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub total_weeks: u64,
    pub initial_volume: u64,
    pub increment_percent: u64,
    pub recovery_interval: u64,
    pub recovery_decrement_percent: u64,
    pub round_to_integer: bool,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            total_weeks: 20,
            initial_volume: 20,
            increment_percent: 10,
            recovery_interval: 4,
            recovery_decrement_percent: 10,
            round_to_integer: true,
        }
    }
}

impl PromptDefaults {
    /// 필드별 기본값을 프롬프트 텍스트로 돌려준다.
    pub fn text_for(&self, field: Field) -> String {
        let value = match field {
            Field::TotalWeeks => self.total_weeks,
            Field::InitialVolume => self.initial_volume,
            Field::IncrementPercent => self.increment_percent,
            Field::RecoveryInterval => self.recovery_interval,
            Field::RecoveryDecrementPercent => self.recovery_decrement_percent,
        };
        value.to_string()
    }

    /// 검증을 통과한 계획 값으로 기본값을 갱신한다.
    pub fn remember(&mut self, plan: &crate::plan::PlanConfig) {
        self.total_weeks = plan.total_weeks;
        self.initial_volume = plan.initial_volume;
        self.increment_percent = plan.increment_percent;
        self.recovery_interval = plan.recovery_interval;
        self.recovery_decrement_percent = plan.recovery_decrement_percent;
        self.round_to_integer = plan.round_to_integer;
    }

    /// 모든 필드를 기본값으로 채운 원시 입력.
    pub fn as_raw_inputs(&self) -> RawInputs {
        RawInputs {
            total_weeks: self.text_for(Field::TotalWeeks),
            initial_volume: self.text_for(Field::InitialVolume),
            increment_percent: self.text_for(Field::IncrementPercent),
            recovery_interval: self.text_for(Field::RecoveryInterval),
            recovery_decrement_percent: self.text_for(Field::RecoveryDecrementPercent),
            round_to_integer: self.round_to_integer,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/ko)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub defaults: PromptDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            defaults: PromptDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 돌려주며 파일은 만들지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        tracing::debug!(path = %path.display(), "config not found, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}
