//! Integration tests for the remote-control client, against a mock
//! service API.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tonearm::services::playback::{
    ClientEvent, ConnectClient, ConnectSettings, DeviceId, PlaybackClient, PlaybackError, TrackId,
};

fn settings(server: &MockServer) -> ConnectSettings {
    ConnectSettings {
        api_url: server.uri(),
        access_token: "test-token".to_string(),
        device_name: String::new(),
        // Long enough that polling never interferes with a test.
        poll_interval: Duration::from_secs(600),
    }
}

fn devices_reply() -> serde_json::Value {
    json!({
        "devices": [
            { "id": "dev-inactive", "name": "Bedroom", "is_active": false },
            { "id": "dev-active", "name": "Kitchen", "is_active": true },
        ]
    })
}

async fn mock_devices(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/me/player/devices"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(devices_reply()))
        .mount(server)
        .await;
}

mod connecting {
    use super::*;

    #[tokio::test]
    async fn emits_ready_with_the_active_device() {
        let server = MockServer::start().await;
        mock_devices(&server).await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        let mut events = client.subscribe();
        client.connect().await.unwrap();

        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        match event {
            ClientEvent::Ready { device } => assert_eq!(device.as_str(), "dev-active"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn selects_the_configured_device_by_name() {
        let server = MockServer::start().await;
        mock_devices(&server).await;

        let mut config = settings(&server);
        config.device_name = "bedroom".to_string();
        let client = ConnectClient::new(config).unwrap();
        let mut events = client.subscribe();
        client.connect().await.unwrap();

        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        match event {
            ClientEvent::Ready { device } => assert_eq!(device.as_str(), "dev-inactive"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_device_name_is_an_error() {
        let server = MockServer::start().await;
        mock_devices(&server).await;

        let mut config = settings(&server);
        config.device_name = "Garage".to_string();
        let client = ConnectClient::new(config).unwrap();

        let result = client.connect().await;
        assert!(matches!(result, Err(PlaybackError::DeviceNotFound(_))));
    }

    #[tokio::test]
    async fn rejected_credential_fails_and_emits_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/player/devices"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        let mut events = client.subscribe();

        let result = client.connect().await;
        assert!(matches!(
            result,
            Err(PlaybackError::AuthenticationFailed(_))
        ));

        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, ClientEvent::AuthenticationFailed { .. }));
    }

    #[test]
    fn rejects_a_malformed_api_url() {
        let result = ConnectClient::new(ConnectSettings {
            api_url: "api.example.com".to_string(),
            access_token: String::new(),
            device_name: String::new(),
            poll_interval: Duration::from_secs(1),
        });
        assert!(matches!(
            result,
            Err(PlaybackError::InitializationFailed(_))
        ));
    }
}

mod polling {
    use super::*;

    #[tokio::test]
    async fn state_payload_becomes_a_snapshot_event() {
        let server = MockServer::start().await;
        mock_devices(&server).await;
        Mock::given(method("GET"))
            .and(path("/me/player"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "is_playing": true,
                "progress_ms": 30_000,
                "item": {
                    "name": "Paranoid Android",
                    "duration_ms": 180_000,
                    "artists": [{ "name": "Radiohead" }],
                    "album": { "images": [{ "url": "https://images.example.com/a.jpg" }] },
                }
            })))
            .mount(&server)
            .await;

        let mut config = settings(&server);
        config.poll_interval = Duration::from_millis(50);
        let client = ConnectClient::new(config).unwrap();
        let mut events = client.subscribe();
        client.connect().await.unwrap();

        // Skip the Ready event, then take the first poll result.
        let _ready = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();

        match event {
            ClientEvent::StateChanged(Some(snapshot)) => {
                assert!(!snapshot.is_paused);
                assert_eq!(snapshot.position, Duration::from_millis(30_000));
                assert_eq!(snapshot.duration, Duration::from_millis(180_000));
                assert_eq!(snapshot.track.name, "Paranoid Android");
                assert_eq!(snapshot.track.artist, "Radiohead");
                assert_eq!(snapshot.track.art_url, "https://images.example.com/a.jpg");
            }
            other => panic!("expected StateChanged(Some), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_reply_becomes_a_null_snapshot_event() {
        let server = MockServer::start().await;
        mock_devices(&server).await;
        Mock::given(method("GET"))
            .and(path("/me/player"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut config = settings(&server);
        config.poll_interval = Duration::from_millis(50);
        let client = ConnectClient::new(config).unwrap();
        let mut events = client.subscribe();
        client.connect().await.unwrap();

        let _ready = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();

        assert!(matches!(event, ClientEvent::StateChanged(None)));
    }
}

mod commands {
    use super::*;

    #[tokio::test]
    async fn seek_sends_the_position_in_milliseconds() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/seek"))
            .and(query_param("position_ms", "90000"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        client.seek(Duration::from_millis(90_000)).await.unwrap();
    }

    #[tokio::test]
    async fn volume_sends_a_percentage() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/volume"))
            .and(query_param("volume_percent", "80"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        client
            .set_volume(tonearm::services::playback::Volume::new(0.8))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn skip_commands_hit_their_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/me/player/next"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/me/player/previous"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        client.next_track().await.unwrap();
        client.previous_track().await.unwrap();
    }

    #[tokio::test]
    async fn toggle_before_any_state_starts_playback() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/play"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        client.toggle_play().await.unwrap();
    }

    #[tokio::test]
    async fn rejected_command_maps_to_control_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/me/player/next"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        let result = client.next_track().await;
        assert!(matches!(result, Err(PlaybackError::ControlFailed { .. })));
    }
}

mod track_start {
    use super::*;

    #[tokio::test]
    async fn names_the_track_and_device_in_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/play"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(json!({
                "uris": ["spotify:track:4uLU6hMCjMI75M1A2tKUQC"],
                "device_id": "dev-active",
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        client
            .start_track(
                &DeviceId::new("dev-active"),
                &TrackId::new("spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejection_maps_to_track_start_failed() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/me/player/play"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ConnectClient::new(settings(&server)).unwrap();
        let result = client
            .start_track(&DeviceId::new("dev"), &TrackId::new("spotify:track:x"))
            .await;
        assert!(matches!(result, Err(PlaybackError::TrackStartFailed(_))));
    }
}
