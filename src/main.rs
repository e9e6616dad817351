use std::sync::Arc;

use mcp_promptz_server::backend::{GraphqlCatalog, HttpTransport};
use mcp_promptz_server::config::ServerConfig;
use mcp_promptz_server::logging;
use mcp_promptz_server::server::McpServer;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-promptz-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!(
                "mcp-promptz-server: cannot open log file {}: {e}",
                config.log_file().display()
            );
            std::process::exit(1);
        }
    };

    tracing::info!(api_url = %config.api_url, "starting mcp-promptz-server v{}", env!("CARGO_PKG_VERSION"));

    let transport = match HttpTransport::new(config.api_url.clone(), &config.api_key) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("cannot build backend client: {e}");
            eprintln!("mcp-promptz-server: configuration error: {e}");
            drop(log_guard);
            std::process::exit(1);
        }
    };

    tracing::info!(author_field = %config.author_shape, "using backend author field");
    let catalog = Arc::new(GraphqlCatalog::with_author_shape(transport, config.author_shape));
    let mut server = McpServer::new(catalog);
    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        eprintln!("mcp-promptz-server: fatal error: {e}");
        drop(log_guard);
        std::process::exit(1);
    }

    tracing::info!("stdin closed, shutting down");
}
