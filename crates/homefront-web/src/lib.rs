//! homefront-web - Web frontend for homefront using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod providers;
pub mod viewport_hook;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use homefront_core::SiteConfig;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    use crate::router::create_router;

    /// Run the web server
    pub async fn run(config: SiteConfig, port: u16) -> Result<()> {
        let router = create_router(config);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .await
            .context("Web server stopped unexpectedly")?;

        Ok(())
    }
}
