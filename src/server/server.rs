//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application factory.

use crate::config::{Config, CorsConfig, ServerConfig, StaticFilesConfig};
use crate::server::handlers::{health_check, route_not_found};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes::{self, read_only};
use crate::server::state::AppState;
use crate::services::RolesService;
use crate::storage::RoleStore;
use crate::utils::error::{ApiError, Result};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    http::header,
    middleware::{Condition, DefaultHeaders},
    web,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, loading the roles dataset
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let store = match &config.roles().data_file {
            Some(path) => RoleStore::from_file(path).await?,
            None => RoleStore::bundled()?,
        };

        let static_files = config.static_files();
        if static_files.enabled && !Path::new(&static_files.dir).is_dir() {
            warn!(
                dir = %static_files.dir,
                "Static files directory not found, {} will not be served",
                static_files.mount_path
            );
        }

        Ok(Self::with_state(AppState::new(
            config.clone(),
            RolesService::new(store),
        )))
    }

    /// Create a server around already built state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .disable_signals()
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        let handle = server.handle();
        tokio::spawn(async move {
            Self::shutdown_signal().await;
            handle.stop(true).await;
        });

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ApiError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    debug!("Setting up routes and middleware");

    let config = Arc::clone(&state.config);
    let server = config.server();
    let cors_enabled = server.cors.enabled;

    let json_config = web::JsonConfig::default()
        .limit(server.max_body_size)
        .error_handler(|err, _req| {
            ApiError::validation(format!("Invalid JSON body: {}", err)).into()
        });
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into());

    let mut default_headers = DefaultHeaders::new().add((header::SERVER, "roles-api"));
    // actix-cors only answers requests that carry an Origin
    if cors_enabled && server.cors.allows_all_origins() {
        default_headers = default_headers.add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
    }

    let roles_mount = config.roles().mount_path.clone();
    let static_files = config.static_files().clone();

    App::new()
        .app_data(state)
        .app_data(json_config)
        .app_data(path_config)
        .wrap(Condition::new(cors_enabled, build_cors(&server.cors)))
        .wrap(TracingLogger::default())
        .wrap(RequestIdMiddleware)
        .wrap(default_headers)
        .service(
            web::resource("/health")
                .guard(read_only())
                .to(health_check),
        )
        .service(web::scope(&roles_mount).configure(routes::roles::configure_routes))
        .configure(|cfg| configure_static_files(cfg, &static_files))
        .default_service(web::to(route_not_found))
}

/// Translate the CORS section into actix-cors settings
fn build_cors(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin().send_wildcard();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = if methods.is_empty() {
        cors.allow_any_method()
    } else {
        cors.allowed_methods(methods)
    };

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    cors = if headers.is_empty() {
        cors.allow_any_header()
    } else {
        cors.allowed_headers(headers)
    };

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

/// Mount the static asset directory when it is enabled and present
fn configure_static_files(cfg: &mut web::ServiceConfig, static_files: &StaticFilesConfig) {
    if !static_files.enabled || !Path::new(&static_files.dir).is_dir() {
        return;
    }

    cfg.service(Files::new(&static_files.mount_path, &static_files.dir));
}
