use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Accepts connections forever, serving each one on its own task.
pub async fn run(cfg: &Config, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, Arc::new(router), cfg.read_buffer_size).await
}

/// Accept loop over an already bound listener.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router, read_buffer_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
