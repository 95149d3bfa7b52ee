//! # greeting-service 웹 서버 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 서비스와 애플리케이션 상태 생성
//! 5. 라우터 조립
//! 6. HTTP 서버 시작 (Ctrl+C / SIGTERM 시 정상 종료)

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use greeting_service::{build_app, services::GreetingService, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임을 생성하고 main을 그 안에서 실행하는 어트리뷰트 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // EnvFilter: RUST_LOG 환경변수로 로그 레벨을 제어합니다.
    // 환경변수가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 설정합니다.
    // registry(): 로그 수집기를 만들고
    // .with(): 필터와 포맷터를 레이어처럼 쌓아올립니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_service=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // 잘못된 PORT/CONTEXT_PATH는 `?`로 전파되어 프로세스가 종료됩니다.
    let config = Config::from_env()?;
    tracing::info!(
        "Starting greeting service on {}:{} (context path: {:?})",
        config.host,
        config.port,
        config.context_path
    );

    // ── 4단계: 서비스와 상태 생성 ──
    // 프레임워크가 빈(bean)을 찾아 넣어주는 대신, 여기서 직접 만들어 넘깁니다.
    // GreetingService는 필드 없는 구조체라 생성 비용이 없습니다.
    // AppState::new(): 서비스를 상태 구조체에 담습니다 (생성자 주입).
    let state = AppState::new(GreetingService::new());

    // ── 5단계: 라우터 조립 ──
    // &config: 설정은 빌려주고, state는 라우터로 소유권을 넘깁니다.
    let app = build_app(&config, state);

    // ── 6단계: 서버 시작 ──
    let addr = config.bind_addr();
    // TcpListener: TCP 연결을 수신 대기하는 소켓
    // .bind(): 지정된 주소에 바인딩 (포트가 이미 사용 중이면 에러 전파)
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // with_graceful_shutdown(): 종료 시그널을 받으면 새 연결을 받지 않고,
    // 처리 중인 요청이 끝날 때까지 기다린 뒤 반환합니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ctrl+C 또는 (Unix에서) SIGTERM을 기다립니다.
///
/// 시그널 핸들러 등록에 실패하면 그 시그널은 기다리지 않고 경고만 남깁니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // tokio::select!: 먼저 완료되는 쪽을 기다립니다.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
