//! Liveness HTTP listener.
//!
//! Serves nothing but a health probe; exists so the process is observable
//! by container orchestrators and uptime monitors. No watcher state is
//! exposed here.

use axum::{Router, routing::get};

/// Build the (single-route) router.
pub fn router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind the listener and serve until the process exits.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "liveness listener running");
    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz_responds_ok() {
        assert_eq!(healthz().await, "ok");
    }

    #[test]
    fn test_router_builds() {
        let _ = router();
    }
}
