//! tracing 구독자 초기화. 로그는 stderr로 보내 CLI 출력과 섞이지 않게 한다.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 필터 우선순위: 명시 인자 → RUST_LOG → 설정 기본값.
pub fn build_filter(explicit: Option<&str>, config_default: &str) -> EnvFilter {
    if let Some(directive) = explicit {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_default))
}

/// 전역 구독자를 설치한다. 이미 설치돼 있으면 무시한다.
pub fn init(explicit: Option<&str>, config_default: &str) {
    let filter = build_filter(explicit, config_default);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
