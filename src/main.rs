use std::sync::Arc;

use azure_text_analysis::client::TextAnalyticsClient;
use azure_text_analysis::config::ClientConfig;
use azure_text_analysis::server::{run_server, sample_documents};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Empty arguments defer to TEXT_ANALYTICS_SUBSCRIPTION_KEY and
    // TEXT_ANALYTICS_ENDPOINT; resolution happens once, here.
    let config = ClientConfig::resolve("", "")
        .expect("text analytics credentials not configured");
    let client = TextAnalyticsClient::new(config).expect("failed to build client");

    let port = 8080;

    run_server(port, Arc::new(client), sample_documents()).await;
}
