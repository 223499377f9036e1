use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, port: Option<u16>, no_open: bool) -> anyhow::Result<()> {
    let ctx = super::load_context(root)?;
    let port = port.unwrap_or(ctx.config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let actual_port = listener.local_addr()?.port();

        println!("Talent hub → http://localhost:{actual_port}  (Ctrl-C to stop)");

        tokio::select! {
            res = talent_server::serve_on(ctx, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
