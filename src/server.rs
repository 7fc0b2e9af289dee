use anyhow::Result;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::analyzer::WordClassifier;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::models::{AnalysisResult, AnalyzeRequest};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn router(classifier: Arc<WordClassifier>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/analyze", post(analyze))
        .with_state(classifier)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn analyze(
    State(classifier): State<Arc<WordClassifier>>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> std::result::Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(json_rejection_error)?;

    let result = classifier.analyze_word(&request).await?;
    Ok(Json(result))
}

// JSON 结构正确但字段类型不对时，错误归到 word 字段
fn json_rejection_error(rejection: JsonRejection) -> AppError {
    tracing::warn!("⚠️  请求体无效: {}", rejection.body_text());
    let field = match rejection {
        JsonRejection::JsonDataError(_) => Some("word".to_string()),
        _ => None,
    };
    AppError::Validation {
        message: rejection.body_text(),
        field,
    }
}

// 监听地址并运行，直到收到 Ctrl-C 或 SIGTERM
pub async fn serve(config: &ServerConfig, classifier: Arc<WordClassifier>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 服务已启动: http://{}", listener.local_addr()?);

    axum::serve(listener, router(classifier))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl-C: {}", e);
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
                tracing::error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
