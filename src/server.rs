use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::client::Analyzer;
use crate::types::{Document, Operation};

pub struct AppState {
    pub analyzer: Arc<dyn Analyzer + Send + Sync>,
    pub documents: Vec<Document>,
}

/// The fixture batch the demo routes analyze.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::text(
            "1",
            "en",
            "This is a super cool test for my super cool package.",
        ),
        Document::text("2", "en", "This is a stupid test for my stupid package."),
        Document::text(
            "3",
            "en",
            "The DoD is a very big operation compared to Banner Health.",
        ),
        Document::text("4", "en", "I really like CostCo chicken nuggets and German beer."),
    ]
}

fn render_page(json: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<center>\n<h1>Analyze</h1>\n<h2><pre>{}</pre></h2>\n</center>\n</body>\n</html>\n",
        json
    ))
}

// Analysis failures become 500 responses; the process never terminates on a
// failed call.
async fn run_operation(
    state: &AppState,
    operation: Operation,
) -> Result<Html<String>, (StatusCode, String)> {
    match state.analyzer.analyze(operation, &state.documents).await {
        Ok(json) => Ok(render_page(&json)),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

pub async fn entities_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    run_operation(&state, Operation::Entities).await
}

pub async fn phrases_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    run_operation(&state, Operation::KeyPhrases).await
}

pub async fn language_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    run_operation(&state, Operation::Languages).await
}

pub async fn sentiment_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    run_operation(&state, Operation::Sentiment).await
}

pub async fn run_server(
    port: u16,
    analyzer: Arc<dyn Analyzer + Send + Sync>,
    documents: Vec<Document>,
) {
    let state = Arc::new(AppState {
        analyzer,
        documents,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/entities", get(entities_handler))
        .route("/phrases", get(phrases_handler))
        .route("/language", get(language_handler))
        .route("/sentiment", get(sentiment_handler))
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("demo server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockAnalyzer;

    fn state_with(mock: Arc<MockAnalyzer>) -> Arc<AppState> {
        Arc::new(AppState {
            analyzer: mock,
            documents: sample_documents(),
        })
    }

    #[tokio::test]
    async fn routes_map_to_their_operations() {
        let mock = Arc::new(MockAnalyzer::new("{\n  \"ok\": true\n}"));
        let state = state_with(mock.clone());

        let page = entities_handler(State(state.clone())).await.unwrap();
        assert!(page.0.contains("<h1>Analyze</h1>"));
        assert!(page.0.contains("\"ok\": true"));

        phrases_handler(State(state.clone())).await.unwrap();
        language_handler(State(state.clone())).await.unwrap();
        sentiment_handler(State(state.clone())).await.unwrap();

        assert_eq!(
            mock.calls(),
            vec![
                Operation::Entities,
                Operation::KeyPhrases,
                Operation::Languages,
                Operation::Sentiment,
            ]
        );
    }

    #[tokio::test]
    async fn analysis_failure_becomes_a_500() {
        let mock = Arc::new(MockAnalyzer::new("").with_error("endpoint unreachable"));
        let state = state_with(mock);

        let (status, message) = sentiment_handler(State(state)).await.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("endpoint unreachable"));
    }

    #[test]
    fn sample_batch_matches_the_documented_fixture() {
        let documents = sample_documents();
        assert_eq!(documents.len(), 4);
        assert_eq!(documents[0].get("id"), Some("1"));
        assert_eq!(documents[0].get("language"), Some("en"));
    }
}
