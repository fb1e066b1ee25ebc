//! Session Greeter - greets visitors by name using a session cookie.
//!
//! This binary parses the configuration, loads templates and starts the
//! HTTP server.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_greeter::{
    config::{version_string, Config},
    create_router, AppState, IdentityRegistry, RouterConfig, TemplateSet, TemplateLoadError,
    REQUIRED_TEMPLATES,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    if config.print_version {
        println!("{}", version_string());
        return ExitCode::from(1);
    }

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let templates = match load_templates(&config) {
        Ok(templates) => templates,
        Err(e) => {
            error!("Failed to load templates: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Configuration:");
    match config.templates {
        Some(ref dir) => info!("  Templates: {}", dir.display()),
        None => info!("  Templates: built-in"),
    }
    info!("  Request tracing: {}", !config.no_tracing);

    let registry = Arc::new(IdentityRegistry::new());
    let state = AppState::new(registry, templates);
    let router = create_router(state, RouterConfig::new().with_tracing(!config.no_tracing));

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server listening on: http://{}", addr);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Load the configured template set and check every view is covered.
fn load_templates(config: &Config) -> Result<TemplateSet, TemplateLoadError> {
    let templates = match config.templates {
        Some(ref dir) => TemplateSet::from_dir(dir)?,
        None => TemplateSet::builtin(),
    };
    templates.ensure(REQUIRED_TEMPLATES)?;
    Ok(templates)
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "session_greeter=debug,tower_http=debug"
    } else {
        "session_greeter=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
