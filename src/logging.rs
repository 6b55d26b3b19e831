//! 로그 초기화. 표준 출력은 계획 전용이므로 로그는 stderr로 보낸다.

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템을 초기화한다.
///
/// `RUST_LOG`로 레벨을 조절한다 (기본: warn).
/// 예: `RUST_LOG=running_planner=debug`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}
