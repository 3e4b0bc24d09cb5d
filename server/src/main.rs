use tokio::net::TcpListener;
use todo_server::{config::DEFAULT_LOG, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    todo_server::init_tracing(config.as_ref().map_or(DEFAULT_LOG, |c| c.log_level.as_str()));

    let config = config.inspect_err(|e| tracing::error!("bad configuration: {e}"))?;
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("failed to bind {addr}: {e}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);
    todo_server::run_until(listener, todo_server::shutdown_signal()).await?;
    Ok(())
}
