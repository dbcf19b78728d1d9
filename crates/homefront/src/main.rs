//! homefront - real estate site server and header tooling

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use homefront_core::{Locale, SiteConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "homefront",
    version,
    about = "Homefront real estate site",
    long_about = "Serves the Homefront web front end and its JSON API, and inspects the\n\
                  responsive header the front end renders.\n\
                  \n\
                  Examples:\n\
                    homefront                                  # Serve on port 8080 (default)\n\
                    homefront serve --port 9000                # Custom port\n\
                    homefront routes --width 375               # Header as seen on a phone\n\
                    homefront routes --locale ar --authenticated --json\n\
                    homefront locales                          # Missing dictionary keys\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/homefront-web && trunk build --release\n\
                    homefront serve\n\
                  \n\
                  Environment Variables:\n\
                    HOMEFRONT_CONFIG                 # Path to homefront.toml\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to homefront.toml (default: ./homefront.toml if present)
    #[arg(long, global = true, env = "HOMEFRONT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve API + front end (default)
    Serve {
        /// Port for web server
        #[arg(long, default_value = "8080")]
        port: u16,
        /// Directory holding the compiled front end
        #[arg(long)]
        dist: Option<PathBuf>,
    },
    /// Print the header derived for a locale, session and viewport width
    Routes {
        /// Locale code (en, ar)
        #[arg(long, short = 'l')]
        locale: Option<String>,
        /// Render as a signed-in user
        #[arg(long)]
        authenticated: bool,
        /// Name shown for the signed-in user
        #[arg(long, default_value = "Guest")]
        user: String,
        /// Viewport width in CSS pixels
        #[arg(long, short = 'w', default_value = "1280")]
        width: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report dictionary keys missing from each built-in locale
    Locales {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load site configuration")?;

    match cli.mode.unwrap_or(Mode::Serve {
        port: 8080,
        dist: None,
    }) {
        Mode::Serve { port, dist } => run_serve(config, port, dist).await?,
        Mode::Routes {
            locale,
            authenticated,
            user,
            width,
            json,
        } => {
            let locale = match locale {
                Some(code) => code.parse::<Locale>()?,
                None => config.default_locale,
            };
            let request = cli::HeaderRequest {
                locale,
                user: authenticated.then_some(user),
                width,
            };
            println!("{}", cli::format_header(&config, &request, json)?);
        }
        Mode::Locales { json } => {
            println!("{}", cli::format_locale_report(json)?);
        }
    }

    Ok(())
}

async fn run_serve(mut config: SiteConfig, port: u16, dist: Option<PathBuf>) -> Result<()> {
    if let Some(dist) = dist {
        config.dist_dir = dist;
    }

    if config.dist_dir.join("index.html").exists() {
        println!("\nBackend API + Frontend: http://localhost:{}", port);
        println!("   API endpoints:       http://localhost:{}/api/*", port);
    } else {
        println!("\nBackend API only:       http://localhost:{}/api/*", port);
        println!("   Run 'trunk build' in crates/homefront-web to compile the front end");
    }

    info!(site = %config.site_name, breakpoint = config.breakpoint_px, "Starting server");
    homefront_web::run(config, port).await
}
