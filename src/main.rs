use crate::config::Config;
use crate::router::handle;
use crate::sheets::{load_projects, SheetLoader};
use crate::state::AppContext;
use astra::{Request, Server};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod sheets;
mod spreadsheets;
mod state;
mod templates;


fn main() {
    init_tracing();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the projects once; a failure is shown on the page instead
    let ctx = build_context(&config);

    // 3️⃣ Start the server
    info!(addr = %config.addr, workers = config.max_workers, "Starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &ctx) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };
        debug!(%method, %path, status = resp.status().as_u16(), "Handled request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

fn build_context(config: &Config) -> AppContext {
    let loaded = SheetLoader::new(config.fetch_timeout)
        .and_then(|loader| load_projects(&loader, &config.source));

    match loaded {
        Ok(projects) => {
            info!(count = projects.len(), "Loaded projects");
            AppContext::loaded(projects, config.static_dir.clone())
        }
        Err(e) => {
            error!(error = %e, "Loading projects failed");
            AppContext::failed(e.to_string(), config.static_dir.clone())
        }
    }
}
