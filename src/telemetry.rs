use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 로그 구독자를 설치한다. `RUST_LOG`가 없으면 경고 이상만 stderr로 출력한다.
/// stdout은 계산 결과 전용으로 남겨둔다.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,eframe=warn,egui=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
