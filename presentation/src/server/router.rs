use crate::server::handler;
use axum::{
    Router,
    routing::{get, post},
};
use maire_application::{AgentInvoker, RunOrchestrationUseCase};
use std::sync::Arc;

/// Build the axum router with all maire endpoints.
pub fn build_router<I: AgentInvoker + 'static>(use_case: Arc<RunOrchestrationUseCase<I>>) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/maire/run", post(handler::run_handler::<I>))
        .route("/maire/agents", get(handler::agents_handler::<I>))
        .with_state(use_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use maire_application::{AgentAvailability, Invocation};
    use maire_domain::{AgentId, Backend};
    use serde_json::Value;
    use tower::ServiceExt;

    struct EchoInvoker;

    #[async_trait]
    impl AgentInvoker for EchoInvoker {
        async fn invoke(&self, agent: &AgentId, _prompt: &str) -> Invocation {
            Invocation::succeeded(format!("{} answered", agent))
        }

        fn available_agents(&self) -> Vec<AgentAvailability> {
            vec![AgentAvailability {
                id: AgentId::new("grok").unwrap(),
                backend: Backend::OpenRouter,
                available: true,
            }]
        }
    }

    /// Panics when asked to invoke "boom"
    struct PanickingInvoker;

    #[async_trait]
    impl AgentInvoker for PanickingInvoker {
        async fn invoke(&self, agent: &AgentId, _prompt: &str) -> Invocation {
            if agent.as_str() == "boom" {
                panic!("adapter bug");
            }
            Invocation::succeeded(format!("{} answered", agent))
        }

        fn available_agents(&self) -> Vec<AgentAvailability> {
            Vec::new()
        }
    }

    fn router() -> Router {
        build_router(Arc::new(RunOrchestrationUseCase::new(Arc::new(EchoInvoker))))
    }

    fn post_run(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(router(), request).await
    }

    async fn send_to(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_run_standard_chain() {
        let (status, body) = send(post_run(
            "/maire/run",
            r#"{"originalPrompt":"X","topology":"standard-chain","agents":["a","b"]}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "Standard chain complete");
        assert_eq!(body["steps"][0]["label"], "a");
        assert_eq!(body["steps"][0]["responseText"], "a answered");
        assert_eq!(body["steps"][1]["label"], "b");
        assert!(body.get("ledger").is_none());
    }

    #[tokio::test]
    async fn test_run_star_with_ledger() {
        let (status, body) = send(post_run(
            "/maire/run?include_ledger=true",
            r#"{"original_prompt":"X","topology":"star-topology","models":["a","b"]}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["steps"].as_array().unwrap().len(), 5);
        assert_eq!(body["steps"][4]["kind"], "synthesis");
        assert_eq!(body["ledger"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_empty_agents_is_bad_request() {
        let (status, body) = send(post_run(
            "/maire/run",
            r#"{"original_prompt":"X","topology":"standard-chain","agents":[]}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("agent"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send(post_run("/maire/run", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("bad json"));
    }

    #[tokio::test]
    async fn test_invalid_query_is_bad_request() {
        let (status, body) = send(post_run(
            "/maire/run?include_ledger=maybe",
            r#"{"original_prompt":"X","agents":["a"]}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("bad query"));
    }

    #[tokio::test]
    async fn test_invoker_panic_is_server_error() {
        let router = build_router(Arc::new(RunOrchestrationUseCase::new(Arc::new(
            PanickingInvoker,
        ))));
        for topology in ["standard-chain", "double-helix", "star-topology"] {
            let body = format!(
                r#"{{"original_prompt":"X","topology":"{}","agents":["a","boom"]}}"#,
                topology
            );
            let (status, body) = send_to(router.clone(), post_run("/maire/run", &body)).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", topology);
            assert!(body["error"].as_str().unwrap().contains("Strategy task failed"));
        }
    }

    #[tokio::test]
    async fn test_run_requires_post() {
        let request = Request::builder()
            .uri("/maire/run")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_agents() {
        let request = Request::builder()
            .uri("/maire/agents")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "grok");
        assert_eq!(body[0]["backend"], "openrouter");
        assert_eq!(body[0]["available"], true);
    }
}
