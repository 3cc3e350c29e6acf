use axum::http::StatusCode;
use axum_test::TestServer;
use planets::api::create_router;
use planets::models::*;
use planets::store::PlanetStore;
use serde_json::json;

fn setup() -> TestServer {
    let app = create_router(PlanetStore::seeded());
    TestServer::new(app).expect("Failed to create test server")
}

async fn list(server: &TestServer) -> Vec<Planet> {
    server.get("/api/planets").await.json::<Vec<Planet>>()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod list_planets {
    use super::*;

    #[tokio::test]
    async fn returns_the_seeded_planets_in_order() {
        let server = setup();

        let response = server.get("/api/planets").await;

        response.assert_status_ok();
        response.assert_json(&json!([
            { "id": 1, "name": "Earth" },
            { "id": 2, "name": "Mars" }
        ]));
    }

    #[tokio::test]
    async fn returns_an_empty_array_for_an_empty_store() {
        let server = TestServer::new(create_router(PlanetStore::empty()))
            .expect("Failed to create test server");

        let response = server.get("/api/planets").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }
}

mod get_planet {
    use super::*;

    #[tokio::test]
    async fn returns_the_planet() {
        let server = setup();

        let response = server.get("/api/planets/1").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Planet>(), Planet::new(1, "Earth"));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_id() {
        let server = setup();

        let response = server.get("/api/planets/99").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "Planet not found" }));
    }

    #[tokio::test]
    async fn returns_404_for_non_numeric_id() {
        let server = setup();

        let response = server.get("/api/planets/earth").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "Planet not found" }));
    }

    #[tokio::test]
    async fn accepts_integral_decimal_ids() {
        let server = setup();

        let response = server.get("/api/planets/2.0").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Planet>(), Planet::new(2, "Mars"));
    }
}

mod create_planet {
    use super::*;

    #[tokio::test]
    async fn creates_and_appends_the_planet() {
        let server = setup();

        let response = server
            .post("/api/planets")
            .json(&json!({ "id": 3, "name": "Jupiter" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: PlanetMessageResponse = response.json();
        assert_eq!(body.msg, "The planet has been created!");
        assert_eq!(body.planet, Planet::new(3, "Jupiter"));

        let planets = list(&server).await;
        assert_eq!(planets.len(), 3);
        assert_eq!(planets[2], Planet::new(3, "Jupiter"));
    }

    #[tokio::test]
    async fn created_planet_is_retrievable() {
        let server = setup();

        server
            .post("/api/planets")
            .json(&json!({ "id": 5, "name": "Saturn" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/api/planets/5").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Planet>(), Planet::new(5, "Saturn"));
    }

    #[tokio::test]
    async fn converts_a_numeric_string_id() {
        let server = setup();

        let response = server
            .post("/api/planets")
            .json(&json!({ "id": "6", "name": "Uranus" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "msg": "The planet has been created!",
            "planet": { "id": 6, "name": "Uranus" }
        }));
    }

    #[tokio::test]
    async fn rejects_missing_id() {
        let server = setup();

        let response = server
            .post("/api/planets")
            .json(&json!({ "name": "NoId" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "\"id\" is required" }));
        assert_eq!(list(&server).await.len(), 2);
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let server = setup();

        let response = server
            .post("/api/planets")
            .json(&json!({ "id": 3, "name": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "\"name\" is not allowed to be empty" }));
    }

    #[tokio::test]
    async fn rejects_unknown_fields() {
        let server = setup();

        let response = server
            .post("/api/planets")
            .json(&json!({ "id": 3, "name": "Jupiter", "moons": 95 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "\"moons\" is not allowed" }));
    }

    #[tokio::test]
    async fn treats_a_missing_body_as_an_empty_object() {
        let server = setup();

        let response = server.post("/api/planets").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "\"id\" is required" }));
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = setup();

        let response = server.post("/api/planets").text("{\"id\": 3,").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: MessageResponse = response.json();
        assert!(!body.msg.is_empty());
        assert_eq!(list(&server).await.len(), 2);
    }
}

mod update_planet {
    use super::*;

    #[tokio::test]
    async fn renames_the_planet() {
        let server = setup();

        let response = server
            .put("/api/planets/2")
            .json(&json!({ "name": "New Mars" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "msg": "The planet has been updated!",
            "planet": { "id": 2, "name": "New Mars" }
        }));

        assert_eq!(
            list(&server).await,
            vec![Planet::new(1, "Earth"), Planet::new(2, "New Mars")]
        );
    }

    #[tokio::test]
    async fn returns_404_for_unknown_id() {
        let server = setup();

        let response = server
            .put("/api/planets/99")
            .json(&json!({ "name": "X" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "Planet not found" }));
    }

    #[tokio::test]
    async fn validates_before_checking_existence() {
        let server = setup();

        for path in ["/api/planets/2", "/api/planets/99", "/api/planets/mars"] {
            let response = server.put(path).json(&json!({})).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "msg": "\"name\" is required" }));
        }
    }

    #[tokio::test]
    async fn returns_404_for_non_numeric_id_with_valid_body() {
        let server = setup();

        let response = server
            .put("/api/planets/mars")
            .json(&json!({ "name": "X" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_an_id_in_the_body() {
        let server = setup();

        let response = server
            .put("/api/planets/2")
            .json(&json!({ "id": 9, "name": "Mars" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "\"id\" is not allowed" }));
    }
}

mod delete_planet {
    use super::*;

    #[tokio::test]
    async fn deletes_the_planet() {
        let server = setup();

        let response = server.delete("/api/planets/1").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "msg": "The planet has been deleted!" }));
        assert_eq!(list(&server).await, vec![Planet::new(2, "Mars")]);
    }

    #[tokio::test]
    async fn second_delete_returns_404_and_changes_nothing() {
        let server = setup();

        server.delete("/api/planets/1").await.assert_status_ok();
        let response = server.delete("/api/planets/1").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "Planet not found" }));
        assert_eq!(list(&server).await, vec![Planet::new(2, "Mars")]);
    }

    #[tokio::test]
    async fn returns_404_for_non_numeric_id() {
        let server = setup();

        let response = server.delete("/api/planets/pluto").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(list(&server).await.len(), 2);
    }
}
