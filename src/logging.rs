use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// stderr 로 로그를 출력한다. `RUST_LOG` 가 없으면 경고 이상만 남긴다.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // 테스트 등에서 이미 설치된 경우는 무시한다.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();
}
