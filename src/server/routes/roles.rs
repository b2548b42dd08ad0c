//! Role endpoints
//!
//! | Pattern                | Handler             |
//! |------------------------|---------------------|
//! | `GET ""` / `GET "/"`   | [`list_roles`]      |
//! | `GET /{id}`            | [`get_role`]        |
//! | `GET /status/{status}` | [`roles_by_status`] |
//! | `GET /type/{type}`     | [`roles_by_type`]   |
//!
//! `/status/` and `/type/` reach the same handlers with an empty capture
//! and are rejected with 400.
//!
//! Patterns are relative; the server mounts them under the configured
//! prefix, so nothing here depends on `/api` being present.

use crate::core::models::Role;
use crate::server::absolute_urls::{RequestBase, absolutize};
use crate::server::routes::{ApiResponse, read_only};
use crate::server::state::AppState;
use crate::utils::error::{ApiError, Result};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

const LIST_ROLES_ERROR: &str = "Error fetching roles";
const GET_ROLE_ERROR: &str = "Error fetching role";
const STATUS_ERROR: &str = "Error fetching roles by status";
const TYPE_ERROR: &str = "Error fetching roles by type";

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").guard(read_only()).to(list_roles))
        .service(web::resource("/").guard(read_only()).to(list_roles))
        .service(
            web::resource(["/status/", "/status/{status}"])
                .guard(read_only())
                .to(roles_by_status),
        )
        .service(
            web::resource(["/type/", "/type/{type}"])
                .guard(read_only())
                .to(roles_by_type),
        )
        .service(web::resource("/{id}").guard(read_only()).to(get_role));
}

/// `/{id}` capture
#[derive(Debug, Deserialize)]
pub struct RoleIdPath {
    pub id: String,
}

/// `/status/{status}` capture, empty for `/status/`
#[derive(Debug, Deserialize)]
pub struct StatusPath {
    #[serde(default)]
    pub status: String,
}

/// `/type/{type}` capture, empty for `/type/`
#[derive(Debug, Deserialize)]
pub struct TypePath {
    #[serde(rename = "type", default)]
    pub role_type: String,
}

impl RoleIdPath {
    pub fn validate(&self) -> Result<&str> {
        required(&self.id, "Role ID is required")
    }
}

impl StatusPath {
    pub fn validate(&self) -> Result<&str> {
        required(&self.status, "Status is required")
    }
}

impl TypePath {
    pub fn validate(&self) -> Result<&str> {
        required(&self.role_type, "Type is required")
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(value)
    }
}

/// Base for avatar rewriting, `None` when rewriting is disabled or no
/// usable base can be derived
fn request_base(req: &HttpRequest, state: &AppState) -> Option<RequestBase> {
    if !state.config.roles().absolute_avatar_urls {
        return None;
    }

    RequestBase::from_request(req, state.config.server().trust_proxy)
}

/// Per-request copy of `role`
fn render(base: Option<&RequestBase>, role: &Role) -> Role {
    match base {
        Some(base) => absolutize(base, role),
        None => role.clone(),
    }
}

fn present<'a, I>(req: &HttpRequest, state: &AppState, roles: I) -> Vec<Role>
where
    I: IntoIterator<Item = &'a Role>,
{
    let base = request_base(req, state);
    roles
        .into_iter()
        .map(|role| render(base.as_ref(), role))
        .collect()
}

/// Serialize `body` into a 200 JSON response
fn respond<T: Serialize>(body: &ApiResponse<T>) -> Result<HttpResponse> {
    let json = serde_json::to_string(body)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(json))
}

/// GET / - every role
pub async fn list_roles(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    debug!("Listing all roles");

    let roles = present(&req, &state, state.roles.all_roles());
    respond(&ApiResponse::collection(roles)).map_err(|e| e.in_operation(LIST_ROLES_ERROR))
}

/// GET /{id} - one role, 404 when absent
pub async fn get_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<RoleIdPath>,
) -> Result<HttpResponse> {
    let id = path.validate()?;
    debug!(role_id = %id, "Fetching role");

    let role = state
        .roles
        .role_by_id(id)
        .ok_or_else(|| ApiError::not_found(format!("Role with id {} not found", id)))?;

    let role = render(request_base(&req, &state).as_ref(), role);
    respond(&ApiResponse::success(role)).map_err(|e| e.in_operation(GET_ROLE_ERROR))
}

/// GET /status/{status} - roles with a matching status, possibly none
pub async fn roles_by_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<StatusPath>,
) -> Result<HttpResponse> {
    let status = path.validate()?;
    debug!(status = %status, "Filtering roles by status");

    let roles = present(&req, &state, state.roles.roles_by_status(status));
    respond(&ApiResponse::collection(roles)).map_err(|e| e.in_operation(STATUS_ERROR))
}

/// GET /type/{type} - roles with a matching type, possibly none
pub async fn roles_by_type(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<TypePath>,
) -> Result<HttpResponse> {
    let role_type = path.validate()?;
    debug!(role_type = %role_type, "Filtering roles by type");

    let roles = present(&req, &state, state.roles.roles_by_type(role_type));
    respond(&ApiResponse::collection(roles)).map_err(|e| e.in_operation(TYPE_ERROR))
}
