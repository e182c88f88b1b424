//! HTTP server exposing orchestration runs

pub mod error;
pub mod handler;
pub mod router;

pub use error::ApiError;
pub use router::build_router;

use maire_application::{AgentInvoker, RunOrchestrationUseCase};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// maire HTTP server.
pub struct MaireServer<I: AgentInvoker + 'static> {
    bind_addr: SocketAddr,
    use_case: Arc<RunOrchestrationUseCase<I>>,
}

impl<I: AgentInvoker + 'static> MaireServer<I> {
    pub fn new(bind_addr: SocketAddr, use_case: Arc<RunOrchestrationUseCase<I>>) -> Self {
        Self {
            bind_addr,
            use_case,
        }
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.use_case))
    }

    /// Start serving requests.
    pub async fn serve(self) -> std::io::Result<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.bind_addr).await?;
        tracing::info!("maire server listening on {}", listener.local_addr()?);
        axum::serve(listener, app).await
    }
}
