//! Mount path integration tests
//!
//! The role routes follow the configured prefix.

#[cfg(test)]
mod tests {
    use crate::common::{data_array, plain_config, role, state_with_roles};
    use actix_web::test;
    use roles_api::server::create_app;
    use roles_api::{Role, RoleStatus, RoleType};

    fn small_dataset() -> Vec<Role> {
        vec![
            role("a", "Admins", RoleType::Default, RoleStatus::Active),
            role("b", "Guests", RoleType::Custom, RoleStatus::Inactive),
            role("c", "Bots", RoleType::SystemCustom, RoleStatus::Active),
        ]
    }

    #[actix_web::test]
    async fn test_custom_mount_path() {
        let mut config = plain_config();
        config.api.roles.mount_path = "/roles".to_string();
        let app = test::init_service(create_app(state_with_roles(config, small_dataset()))).await;

        let (status, body) = crate::get_json!(&app, "/roles");
        assert_eq!(status, 200);
        assert_eq!(body["total"], 3);

        let (status, body) = crate::get_json!(&app, "/roles/b");
        assert_eq!(status, 200);
        assert_eq!(body["data"]["name"], "Guests");

        let (status, body) = crate::get_json!(&app, "/roles/status/active");
        assert_eq!(status, 200);
        assert_eq!(body["total"], 2);

        let (status, body) = crate::get_json!(&app, "/roles/type/system_custom");
        assert_eq!(status, 200);
        assert_eq!(data_array(&body)[0]["id"], "c");
    }

    #[actix_web::test]
    async fn test_default_prefix_unmounted_when_moved() {
        let mut config = plain_config();
        config.api.roles.mount_path = "/roles".to_string();
        let app = test::init_service(create_app(state_with_roles(config, small_dataset()))).await;

        let (status, body) = crate::get_json!(&app, "/api/roles");
        assert_eq!(status, 404);
        assert_eq!(body["message"], "Route not found");
    }

    #[actix_web::test]
    async fn test_health_ignores_mount_path() {
        let mut config = plain_config();
        config.api.roles.mount_path = "/v2/roles".to_string();
        let app = test::init_service(create_app(state_with_roles(config, small_dataset()))).await;

        let (status, body) = crate::get_json!(&app, "/health");
        assert_eq!(status, 200);
        assert_eq!(body["status"], "OK");
    }

    #[actix_web::test]
    async fn test_empty_dataset() {
        let app = test::init_service(create_app(state_with_roles(plain_config(), Vec::new()))).await;

        let (status, body) = crate::get_json!(&app, "/api/roles");
        assert_eq!(status, 200);
        assert_eq!(body["total"], 0);

        let (status, _) = crate::get_json!(&app, "/api/roles/1");
        assert_eq!(status, 404);
    }

    #[actix_web::test]
    async fn test_type_segment_matches_stored_spelling() {
        let app =
            test::init_service(create_app(state_with_roles(plain_config(), small_dataset()))).await;

        let (_, body) = crate::get_json!(&app, "/api/roles/type/system-custom");
        assert_eq!(body["total"], 0);

        let (_, body) = crate::get_json!(&app, "/api/roles/type/SYSTEM_CUSTOM");
        assert_eq!(body["total"], 1);
    }
}
