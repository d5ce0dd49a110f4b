//! Folio CLI and HTTP server entry point.
//!
//! Binary name: `folio`
//!
//! Parses CLI arguments, initializes tracing and configuration, then
//! dispatches to the command handler or starts the HTTP server.

mod cli;
mod http;
mod state;
#[cfg(test)]
mod testing;

use clap::Parser;

use cli::{Cli, Commands};
use folio_core::contact::ContactForm;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,folio=debug",
        _ => "trace",
    };
    folio_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = folio_infra::config::load_config().await;

    let result = match cli.command {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Contact {
            name,
            email,
            message,
            endpoint,
        } => {
            let form = ContactForm::new(name, email, message);
            cli::contact::send_contact(config, form, endpoint, cli.json).await
        }
        Commands::Sections { container } => {
            cli::sections::show_sections(config, container, cli.json).await
        }
    };

    folio_observe::tracing_setup::shutdown_tracing();
    result
}

async fn serve(
    config: folio_infra::config::FolioConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| config.site.host.clone());
    let port = port.unwrap_or(config.site.port);
    let state = AppState::from_config(config)?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Folio listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
