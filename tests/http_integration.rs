// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and remote using wiremock.

use std::time::Duration;

use aircon_remote::protocol::{HttpConfig, HttpTransport, Transport};
use aircon_remote::state::DeviceState;
use aircon_remote::types::{FanSpeed, Mode, PowerState, Swing, Temperature};
use aircon_remote::{Error, ParseError, ProtocolError, Remote};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEBOUNCE: Duration = Duration::from_millis(50);

fn running_state() -> serde_json::Value {
    json!({
        "power": "on",
        "mode": "heat",
        "temp": 22,
        "fan": "f2",
        "direction": "p4"
    })
}

async fn posted_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == "POST")
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

// ============================================================================
// HttpTransport Tests
// ============================================================================

mod http_transport {
    use super::*;

    #[tokio::test]
    async fn fetch_state_decodes_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(running_state()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri()).unwrap();
        let state = transport.fetch_state().await.unwrap();

        assert_eq!(state.power(), PowerState::On);
        assert_eq!(state.mode(), Mode::Heat);
        assert_eq!(state.temp().value(), 22);
        assert_eq!(state.fan(), FanSpeed::F2);
        assert_eq!(state.swing(), Swing::P4);
    }

    #[tokio::test]
    async fn fetch_state_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri()).unwrap();
        let err = transport.fetch_state().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_state_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "power": "on",
                "mode": "turbo",
                "temp": 22,
                "fan": "auto",
                "direction": "auto"
            })))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri()).unwrap();
        let err = transport.fetch_state().await.unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[tokio::test]
    async fn push_state_posts_json() {
        let mock_server = MockServer::start().await;

        let state = DeviceState::new()
            .with_power(PowerState::On)
            .with_mode(Mode::Dry)
            .with_temp(Temperature::new(27).unwrap());

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "power": "on",
                "mode": "dry",
                "temp": 27,
                "fan": "auto",
                "direction": "auto"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri()).unwrap();
        transport.push_state(&state).await.unwrap();
    }

    #[tokio::test]
    async fn push_state_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid aircon state"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri()).unwrap();
        let err = transport.push_state(&DeviceState::new()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn custom_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/living-room/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(running_state()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpConfig::new(mock_server.uri())
            .with_path("/living-room/state")
            .into_transport()
            .unwrap();

        assert!(transport.fetch_state().await.is_ok());
    }
}

// ============================================================================
// Remote Tests
// ============================================================================

mod remote {
    use super::*;

    #[tokio::test]
    async fn build_absorbs_device_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(running_state()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri()).build().await.unwrap();
        let state = remote.state();

        assert!(state.is_on());
        assert_eq!(state.mode(), Mode::Heat);
        assert_eq!(state.temp().value(), 22);
    }

    #[tokio::test]
    async fn build_with_server_error_keeps_defaults() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri()).build().await.unwrap();

        assert_eq!(remote.state(), DeviceState::default());
        assert_eq!(remote.state().power(), PowerState::Off);
        assert_eq!(remote.state().mode(), Mode::Cool);
        assert_eq!(remote.state().temp().value(), 25);
        assert_eq!(remote.state().fan(), FanSpeed::Auto);
        assert_eq!(remote.state().swing(), Swing::Auto);
    }

    #[tokio::test]
    async fn cool_mode_is_pushed_immediately() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .and(body_json(json!({
                "power": "on",
                "mode": "cool",
                "temp": 25,
                "fan": "auto",
                "direction": "auto"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri())
            .with_debounce(Duration::from_secs(30))
            .build_without_sync()
            .unwrap();

        assert!(remote.enable_cool_mode());
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(posted_bodies(&mock_server).await.len(), 1);
    }

    #[tokio::test]
    async fn temperature_burst_sends_one_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri())
            .with_debounce(DEBOUNCE)
            .build_without_sync()
            .unwrap();

        remote.enable_cool_mode();
        for _ in 0..3 {
            assert!(remote.increment_temp());
        }
        tokio::time::sleep(DEBOUNCE * 6).await;

        let bodies = posted_bodies(&mock_server).await;
        // One immediate push for the mode, one debounced push for the burst
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[1]["temp"], 28);
    }

    #[tokio::test]
    async fn failed_push_keeps_local_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri())
            .with_debounce(DEBOUNCE)
            .build_without_sync()
            .unwrap();

        assert!(remote.enable_heat_mode());
        assert!(remote.toggle_fan());
        assert!(!remote.flush().await);

        let state = remote.state();
        assert_eq!(state.mode(), Mode::Heat);
        assert_eq!(state.fan(), FanSpeed::F1);
    }

    #[tokio::test]
    async fn flush_sends_pending_burst() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/aircon/state"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let remote = Remote::http(mock_server.uri())
            .with_debounce(Duration::from_secs(30))
            .build_without_sync()
            .unwrap();

        remote.store().replace(
            DeviceState::new()
                .with_power(PowerState::On)
                .with_temp(Temperature::new(20).unwrap()),
        );
        remote.decrement_temp();
        remote.toggle_swing();
        assert!(remote.is_sync_pending());

        assert!(remote.flush().await);
        assert!(!remote.is_sync_pending());

        let bodies = posted_bodies(&mock_server).await;
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["temp"], 19);
        assert_eq!(bodies[0]["direction"], "p1");
    }
}
