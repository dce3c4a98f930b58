use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders, NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

use rust_helloworld::config::AppConfig;
use rust_helloworld::routes;
use rust_helloworld::runtime::{lifetime, logging};
use rust_helloworld::utils::{json_error_handler, path_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let started = chrono::Utc::now();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = logging::init_tracing(config);

    warn!(
        "Starting {} v{} ({} environment)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(std::io::Error::other)?;
    let storage = startup.storage;
    let api_config = config.api.clone();

    debug!(
        "Startup finished in {} ms",
        (chrono::Utc::now() - started).num_milliseconds()
    );
    warn!("Using {} worker(s)", config.server.workers);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(config.cors.max_age);
        let headers = DefaultHeaders::new()
            .add(("Connection", "keep-alive"))
            .add((
                "Keep-Alive",
                format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
            ))
            .add(("Cache-Control", "no-cache, no-store, must-revalidate"));
        let json_config = web::JsonConfig::default()
            .limit(config.server.limits.max_payload_size)
            .error_handler(json_error_handler);

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(headers)
            // /book/1 与 /book/1/ 等价
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .app_data(json_config)
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(api_config.clone()))
            .configure(routes::configure_library_routes)
            .configure(routes::configure_school_routes)
            .default_service(web::to(routes::not_found))
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            warn!("Listening on unix socket {}", socket_path);
            server.bind_uds(socket_path)?
        }
        None => {
            let address = config.server_bind_address();
            warn!("Listening on http://{}", address);
            server.bind(address)?
        }
    };

    #[cfg(not(unix))]
    let server = {
        let address = config.server_bind_address();
        warn!("Listening on http://{}", address);
        server.bind(address)?
    };

    tokio::select! {
        res = server.run() => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Server stopped");
        }
    }

    Ok(())
}
