//! Avatar URL integration tests
//!
//! Relative avatars are resolved against the host the client called.

#[cfg(test)]
mod tests {
    use crate::common::{bundled_state, data_array, plain_config};
    use actix_web::test;
    use roles_api::Config;
    use roles_api::server::create_app;
    use serde_json::Value;

    async fn fetch(
        config: Config,
        uri: &str,
        headers: &[(&'static str, &'static str)],
    ) -> Value {
        let app = test::init_service(create_app(bundled_state(config))).await;

        let mut req = test::TestRequest::get().uri(uri);
        for header in headers {
            req = req.insert_header(*header);
        }
        let res = test::call_service(&app, req.to_request()).await;
        assert!(res.status().is_success());
        test::read_body_json(res).await
    }

    #[actix_web::test]
    async fn test_relative_avatar_uses_request_host() {
        let body = fetch(
            Config::default(),
            "/api/roles/1",
            &[("host", "roles.test")],
        )
        .await;

        assert_eq!(
            body["data"]["teamMembers"][0]["avatar"],
            "http://roles.test/static/avatars/olivia.svg"
        );
    }

    #[actix_web::test]
    async fn test_absolute_avatar_is_kept() {
        let body = fetch(
            Config::default(),
            "/api/roles/2",
            &[("host", "roles.test")],
        )
        .await;

        let candice = body["data"]["teamMembers"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["id"] == "u5")
            .unwrap()
            .clone();
        assert_eq!(candice["avatar"], "https://cdn.example.com/avatars/candice.png");
    }

    #[actix_web::test]
    async fn test_every_listed_avatar_is_absolute() {
        let body = fetch(
            Config::default(),
            "/api/roles",
            &[("host", "localhost:3000")],
        )
        .await;

        for role in data_array(&body) {
            for member in role["teamMembers"].as_array().unwrap() {
                let avatar = member["avatar"].as_str().unwrap();
                assert!(
                    avatar.starts_with("http://") || avatar.starts_with("https://"),
                    "avatar {} is not absolute",
                    avatar
                );
            }
        }
    }

    #[actix_web::test]
    async fn test_forwarded_headers_are_trusted_by_default() {
        let body = fetch(
            Config::default(),
            "/api/roles/1",
            &[
                ("host", "internal:3000"),
                ("x-forwarded-proto", "https"),
                ("x-forwarded-host", "roles.example.com"),
            ],
        )
        .await;

        assert_eq!(
            body["data"]["teamMembers"][0]["avatar"],
            "https://roles.example.com/static/avatars/olivia.svg"
        );
    }

    #[actix_web::test]
    async fn test_forwarded_headers_ignored_without_trust() {
        let mut config = Config::default();
        config.api.server.trust_proxy = false;

        let body = fetch(
            config,
            "/api/roles/1",
            &[
                ("host", "internal:3000"),
                ("x-forwarded-proto", "https"),
                ("x-forwarded-host", "roles.example.com"),
            ],
        )
        .await;

        assert_eq!(
            body["data"]["teamMembers"][0]["avatar"],
            "http://internal:3000/static/avatars/olivia.svg"
        );
    }

    #[actix_web::test]
    async fn test_malformed_forwarded_headers_fall_back_to_host() {
        for forwarded in [
            ("x-forwarded-host", "bad host"),
            ("x-forwarded-host", "a:99999"),
            ("x-forwarded-proto", "h t"),
        ] {
            let body = fetch(
                Config::default(),
                "/api/roles/1",
                &[("host", "roles.test"), forwarded],
            )
            .await;

            assert_eq!(
                body["data"]["teamMembers"][0]["avatar"],
                "http://roles.test/static/avatars/olivia.svg",
                "unexpected avatar with {:?}",
                forwarded
            );
        }
    }

    #[actix_web::test]
    async fn test_malformed_forwarded_host_keeps_every_endpoint_up() {
        let app = test::init_service(create_app(bundled_state(Config::default()))).await;

        for uri in [
            "/api/roles",
            "/api/roles/1",
            "/api/roles/status/active",
            "/api/roles/type/default",
        ] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(("x-forwarded-host", "bad host"))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status().as_u16(), 200, "{} failed", uri);

            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["success"], true);
        }
    }

    #[actix_web::test]
    async fn test_rewriting_can_be_disabled() {
        let body = fetch(plain_config(), "/api/roles/1", &[("host", "roles.test")]).await;

        assert_eq!(
            body["data"]["teamMembers"][0]["avatar"],
            "/static/avatars/olivia.svg"
        );
    }

    #[actix_web::test]
    async fn test_filtered_roles_are_rewritten() {
        let body = fetch(
            Config::default(),
            "/api/roles/type/default",
            &[("host", "roles.test")],
        )
        .await;

        let first = &data_array(&body)[0];
        assert!(
            first["teamMembers"][0]["avatar"]
                .as_str()
                .unwrap()
                .starts_with("http://roles.test/")
        );
    }

    #[actix_web::test]
    async fn test_rewriting_does_not_touch_the_store() {
        let state = bundled_state(Config::default());
        let app = test::init_service(create_app(state.clone())).await;

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("host", "roles.test"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let stored = state.roles.role_by_id("1").unwrap();
        assert_eq!(stored.team_members[0].avatar, "/static/avatars/olivia.svg");
    }
}
