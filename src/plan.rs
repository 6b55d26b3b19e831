//! 주간 볼륨 진행 계산기.
//!
//! 이전 주의 (반올림된) 볼륨에 증가율을 곱해 다음 주 볼륨을 만든다.
//! 회복 주의 감소값은 표시용일 뿐 다음 주 기준값에는 반영되지 않는다.

/// 입력 검증 후 한 번 만들어지는 계획 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    /// 계산할 주 수
    pub total_weeks: u64,
    /// 1주차 증가 전 기준 볼륨
    pub initial_volume: u64,
    /// 주마다 적용하는 증가율 [%]
    pub increment_percent: u64,
    /// N주마다 회복 주. 0이면 회복 주 없음
    pub recovery_interval: u64,
    /// 회복 주 감소율 [%]
    pub recovery_decrement_percent: u64,
    /// 매 계산값을 정수로 반올림할지 여부
    pub round_to_integer: bool,
}

impl PlanConfig {
    /// 해당 주가 회복 주인지 판단한다. 간격이 0이면 항상 false.
    pub fn is_recovery_week(&self, week: u64) -> bool {
        self.recovery_interval > 0 && week % self.recovery_interval == 0
    }

    fn apply_rounding(&self, value: f64) -> f64 {
        if self.round_to_integer {
            round_half_up(value)
        } else {
            value
        }
    }
}

/// 한 주의 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekResult {
    /// 1부터 시작하는 주차
    pub week: u64,
    /// 기본 볼륨
    pub volume: f64,
    /// 회복 주일 때만 존재하는 감소 볼륨
    pub recovery_volume: Option<f64>,
}

impl WeekResult {
    pub fn is_recovery(&self) -> bool {
        self.recovery_volume.is_some()
    }
}

/// 0.5는 +∞ 방향으로 올리는 반올림. 양수에서는 0에서 멀어지는 반올림과 같다.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// 주 단위로 결과를 하나씩 만들어 내는 반복자.
#[derive(Debug, Clone)]
pub struct Progression {
    config: PlanConfig,
    previous: f64,
    next_week: u64,
}

impl Progression {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            previous: config.initial_volume as f64,
            next_week: 1,
        }
    }
}

impl Iterator for Progression {
    type Item = WeekResult;

    fn next(&mut self) -> Option<WeekResult> {
        if self.next_week > self.config.total_weeks {
            return None;
        }
        let week = self.next_week;
        let cfg = &self.config;

        let increment = self.previous * cfg.increment_percent as f64 / 100.0;
        let volume = cfg.apply_rounding(self.previous + increment);

        let recovery_volume = if cfg.is_recovery_week(week) {
            let decrement = volume * cfg.recovery_decrement_percent as f64 / 100.0;
            Some(cfg.apply_rounding(volume - decrement))
        } else {
            None
        };

        // 회복 주 값이 아니라 기본 볼륨이 다음 주의 기준이 된다.
        self.previous = volume;
        self.next_week += 1;

        Some(WeekResult {
            week,
            volume,
            recovery_volume,
        })
    }
}

impl std::iter::FusedIterator for Progression {}

/// 설정으로부터 전체 계획을 계산한다. 부수 효과 없음.
///
/// 결과를 모두 메모리에 모으므로 짧은 계획에만 쓴다. 출력은 [`Progression`]을 흘려 쓴다.
pub fn generate_plan(config: &PlanConfig) -> Vec<WeekResult> {
    Progression::new(*config).collect()
}
