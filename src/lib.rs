//! 진행 계산 로직을 라이브러리로 분리하여 CLI 입출력과 독립적으로 테스트한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod plan;
pub mod ui_cli;
pub mod validation;
