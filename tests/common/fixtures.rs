//! Test fixtures
//!
//! Every fixture builds the real application over the bundled dataset or
//! over a small hand-written one; nothing is mocked.

use actix_web::web;
use roles_api::server::AppState;
use roles_api::{Config, Role, RoleStatus, RoleStore, RoleType, RolesService, TeamMember};
use serde_json::Value;

/// Application state over the bundled dataset
pub fn bundled_state(config: Config) -> web::Data<AppState> {
    let store = RoleStore::bundled().expect("bundled dataset loads");
    web::Data::new(AppState::new(config, RolesService::new(store)))
}

/// Application state over an explicit role list
pub fn state_with_roles(config: Config, roles: Vec<Role>) -> web::Data<AppState> {
    let store = RoleStore::from_roles(roles).expect("fixture roles are valid");
    web::Data::new(AppState::new(config, RolesService::new(store)))
}

/// Default configuration without avatar rewriting, so payloads equal the dataset
pub fn plain_config() -> Config {
    let mut config = Config::default();
    config.api.roles.absolute_avatar_urls = false;
    config
}

/// A role with one team member
pub fn role(id: &str, name: &str, role_type: RoleType, status: RoleStatus) -> Role {
    Role {
        id: id.to_string(),
        name: name.to_string(),
        role_type,
        date_created: "2024-01-01".to_string(),
        status,
        team_members: vec![TeamMember {
            id: format!("m-{}", id),
            name: format!("Member of {}", name),
            avatar: format!("/static/avatars/{}.svg", id),
        }],
    }
}

/// GET `uri` against an initialized service and evaluate to
/// `(status, json_body)`
#[macro_export]
macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let res = actix_web::test::call_service(
            $app,
            actix_web::test::TestRequest::get().uri($uri).to_request(),
        )
        .await;
        let status = res.status().as_u16();
        let body: serde_json::Value = actix_web::test::read_body_json(res).await;
        (status, body)
    }};
}

/// The `data` array of a collection envelope
pub fn data_array(body: &Value) -> &Vec<Value> {
    body["data"].as_array().expect("data is an array")
}
