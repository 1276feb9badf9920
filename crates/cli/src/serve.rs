use navkit_core::HostConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(config: HostConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr()?;
    let host = navkit_runtime::build_default_host(config)?;

    let listener = TcpListener::bind(addr).await?;
    let cancel_token = CancellationToken::new();

    let shutdown = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            shutdown.cancel();
        }
    });

    for name in host.components().names() {
        info!("Component {} at /components/{}", name, name);
    }
    host.serve(listener, cancel_token).await?;
    Ok(())
}
