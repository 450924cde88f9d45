//! Unit tests for HTTP client functionality

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{body_string, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(&format!("{}/api", server.uri())).unwrap();
    ApiClient::new(&config).unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base_and_path() {
        let config = ApiConfig::new("http://localhost:8000/api/").unwrap();
        let client = ApiClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(
            client.url_for(Resource::UpcomingFixtures),
            "http://localhost:8000/api/fixture/next-matches"
        );
    }

    #[tokio::test]
    async fn test_fetch_teams_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/teams"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "id": 1, "name": "Arsenal" },
                    { "id": 2, "name": "Chelsea" }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let teams = client_for(&mock_server).fetch_teams().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].name, "Chelsea");
    }

    #[tokio::test]
    async fn test_fetch_standings_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/teams/points"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 1, "name": "Arsenal", "wins": 1, "losses": 0,
                    "draws": 0, "goal_difference": 2, "points": 3
                }]
            })))
            .mount(&mock_server)
            .await;

        let standings = client_for(&mock_server).fetch_standings().await.unwrap();
        assert_eq!(standings[0].points, 3);
    }

    #[tokio::test]
    async fn test_fetch_predictions_may_be_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fixture/predictions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&mock_server)
            .await;

        let predictions = client_for(&mock_server).fetch_predictions().await.unwrap();
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_resource_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fixture/next-matches"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch_upcoming_fixtures()
            .await
            .unwrap_err();

        match &err {
            DashboardError::Status { resource, status } => {
                assert_eq!(*resource, Resource::UpcomingFixtures);
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
        // The body is never parsed into the message.
        assert_eq!(err.to_string(), "Failed to fetch data");
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fixture"))
            .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch_all_fixtures()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DashboardError::Transport {
                resource: Resource::AllFixtures,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Failed to fetch fixtures: "));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ApiConfig::new(&format!("http://127.0.0.1:{}/api", port)).unwrap();
        let client = ApiClient::new(&config).unwrap();

        let err = client.fetch_teams().await.unwrap_err();
        assert_eq!(err.resource(), Some(Resource::Teams));
        assert!(matches!(err, DashboardError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_play_next_round_posts_json_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/fixture/play"))
            .and(header("content-type", "application/json"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server).play_next_round().await.unwrap();
    }

    #[tokio::test]
    async fn test_play_all_rounds_posts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/fixture/play-all"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server).play_all_rounds().await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_fixtures_posts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/fixture/create"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server).generate_fixtures().await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_fixtures_deletes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/fixture/delete"))
            .respond_with(ResponseTemplate::new(409))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).clear_fixtures().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to clear fixtures");
    }

    #[tokio::test]
    async fn test_timeout_is_applied() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/teams"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [] }))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let config = ApiConfig::new(&format!("{}/api", mock_server.uri()))
            .unwrap()
            .with_timeout(std::time::Duration::from_millis(50));
        let err = ApiClient::new(&config)
            .unwrap()
            .fetch_teams()
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::Transport { .. }));
    }
}
