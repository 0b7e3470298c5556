mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::CampaignBriefServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting campaign-brief MCP server");

    let config = Config::from_env()?;
    info!(
        max_prompt_chars = config.max_prompt_chars,
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let listen_addr = config.tcp_listen_addr.clone();
    let server = CampaignBriefServer::new(config);

    match listen_addr {
        Some(addr) => serve_tcp(server, &addr).await,
        None => serve_stdio(server).await,
    }
}

/// One independent MCP session per accepted connection.
async fn serve_tcp(server: CampaignBriefServer, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "MCP server ready, serving on TCP");
    loop {
        let (stream, peer) = listener.accept().await?;
        let server = server.clone();
        tokio::spawn(async move {
            info!(peer = %peer, "MCP client connected");
            let service = server
                .serve(stream)
                .await
                .inspect_err(|e| tracing::error!(peer = %peer, error = %e, "MCP session failed to start"))?;
            service.waiting().await?;
            info!(peer = %peer, "MCP client disconnected");
            Ok::<(), anyhow::Error>(())
        });
    }
}

async fn serve_stdio(server: CampaignBriefServer) -> anyhow::Result<()> {
    info!("MCP server ready, serving on stdio");
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "MCP session failed to start"))?;
    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
