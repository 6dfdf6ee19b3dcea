#![allow(clippy::unwrap_used)]
// End-to-end tests for `Gateway` against a wiremock controller.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{any, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gnso_core::{
    ControllerConfig, CoreError, Device, DeviceType, EditConfigRequest, ExecOperationRequest,
    Gateway, GetConfigRequest, GetDevicesRequest, NedKind, QueryRequest, TokenAuthorizer,
};

const TOKEN: &str = "let-me-in";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(token: Option<&str>) -> (MockServer, Gateway) {
    let server = MockServer::start().await;
    let config = ControllerConfig::new(
        format!("{}/restconf", server.uri()).parse().unwrap(),
        "admin",
        SecretString::from("admin".to_owned()),
    );
    let authorizer = TokenAuthorizer::new(token.map(|t| SecretString::from(t.to_owned())));
    let gateway = Gateway::new(&config, authorizer).unwrap();
    (server, gateway)
}

/// Fail the test if anything at all reaches the controller.
async fn forbid_controller_calls(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("no controller call")
        .mount(server)
        .await;
}

// ── GetDevices ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_devices_two_ned_types_in_order() {
    let (server, gateway) = setup(Some(TOKEN)).await;

    let body = json!({
        "tailf-ncs:device": [
            {
                "name": "ios0",
                "address": "10.0.0.1",
                "authgroup": "default",
                "device-type": { "cli": { "ned-id": "cisco-ios-cli-3.0" } }
            },
            {
                "name": "nx0",
                "address": "10.0.0.2",
                "authgroup": "nx-auth",
                "device-type": { "netconf": { "ned-id": "cisco-nx-netconf" } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/restconf/data/tailf-ncs:devices/device"))
        .and(query_param("depth", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let devices = gateway
        .get_devices(&GetDevicesRequest {
            token: TOKEN.into(),
        })
        .await
        .unwrap();

    assert_eq!(
        devices,
        vec![
            Device {
                name: "ios0".into(),
                address: "10.0.0.1".into(),
                authgroup: "default".into(),
                device_type: Some(DeviceType {
                    kind: NedKind::Cli,
                    ned_id: "cisco-ios-cli-3.0".into(),
                }),
            },
            Device {
                name: "nx0".into(),
                address: "10.0.0.2".into(),
                authgroup: "nx-auth".into(),
                device_type: Some(DeviceType {
                    kind: NedKind::Netconf,
                    ned_id: "cisco-nx-netconf".into(),
                }),
            },
        ]
    );
}

#[tokio::test]
async fn test_get_devices_empty_inventory() {
    let (server, gateway) = setup(None).await;

    Mock::given(method("GET"))
        .and(path("/restconf/data/tailf-ncs:devices/device"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let devices = gateway
        .get_devices(&GetDevicesRequest::default())
        .await
        .unwrap();
    assert!(devices.is_empty());
}

// ── Authorization ───────────────────────────────────────────────────

#[tokio::test]
async fn test_wrong_token_never_reaches_controller() {
    let (server, gateway) = setup(Some(TOKEN)).await;
    forbid_controller_calls(&server).await;

    let bad = "nope".to_owned();

    let err = gateway
        .get_devices(&GetDevicesRequest { token: bad.clone() })
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());

    let err = gateway
        .get_config(&GetConfigRequest {
            token: bad.clone(),
            path: "/tailf-ncs:devices".into(),
            options: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());

    // Token is checked before the operation type.
    let err = gateway
        .edit_config(&EditConfigRequest {
            token: bad.clone(),
            path: "/".into(),
            operation_type: "remove".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());

    let err = gateway
        .query(&QueryRequest {
            token: bad.clone(),
            json_query: "{}".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());

    let err = gateway
        .exec_operation(&ExecOperationRequest {
            token: String::new(),
            path: "/devices/sync-from".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());

    server.verify().await;
}

#[tokio::test]
async fn test_unset_token_accepts_anything() {
    let (server, gateway) = setup(Some("")).await;

    Mock::given(method("GET"))
        .and(path("/restconf/data/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(3)
        .mount(&server)
        .await;

    for token in ["", "whatever", TOKEN] {
        let reply = gateway
            .get_config(&GetConfigRequest {
                token: token.into(),
                path: "/ok".into(),
                options: None,
            })
            .await
            .unwrap();
        assert_eq!(reply.result, "{}");
    }
}

// ── Pass-through operations ─────────────────────────────────────────

#[tokio::test]
async fn test_get_config_round_trips_body_and_appends_options() {
    let (server, gateway) = setup(Some(TOKEN)).await;
    let raw = "{\"tailf-ncs:config\": {\"ios:hostname\": \"ce0\"}}\n";

    Mock::given(method("GET"))
        .and(path("/restconf/data/tailf-ncs:devices/device=ce0/config"))
        .and(query_param("content", "config"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .expect(1)
        .mount(&server)
        .await;

    let reply = gateway
        .get_config(&GetConfigRequest {
            token: TOKEN.into(),
            path: "/tailf-ncs:devices/device=ce0/config".into(),
            options: Some("content=config".into()),
        })
        .await
        .unwrap();
    assert_eq!(reply.result, raw);
}

#[tokio::test]
async fn test_query_round_trips_body() {
    let (server, gateway) = setup(None).await;
    let query = r#"{"immediate-query":{"foreach":"/devices/device","select":[{"label":"name","expression":"name","result-type":["string"]}]}}"#;
    let raw = r#"{"tailf-rest-query:query-result":{"result":[{"select":[{"label":"name","value":"ce0"}]}]}}"#;

    Mock::given(method("POST"))
        .and(path("/restconf/tailf/query"))
        .and(body_string(query))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .expect(1)
        .mount(&server)
        .await;

    let reply = gateway
        .query(&QueryRequest {
            token: String::new(),
            json_query: query.into(),
        })
        .await
        .unwrap();
    assert_eq!(reply.result, raw);
}

#[tokio::test]
async fn test_exec_operation_round_trips_body() {
    let (server, gateway) = setup(None).await;
    let input = r#"{"input":{"device":["ce0"]}}"#;
    let raw = r#"{"tailf-ncs:output":{"sync-result":[{"device":"ce0","result":true}]}}"#;

    Mock::given(method("POST"))
        .and(path("/restconf/operations/tailf-ncs:devices/sync-from"))
        .and(query_param("dry-run", "true"))
        .and(body_string(input))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .expect(1)
        .mount(&server)
        .await;

    let reply = gateway
        .exec_operation(&ExecOperationRequest {
            token: String::new(),
            path: "/tailf-ncs:devices/sync-from".into(),
            options: Some("dry-run=true".into()),
            json_data: input.into(),
        })
        .await
        .unwrap();
    assert_eq!(reply.result, raw);
}

// ── EditConfig ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_config_operation_types_map_to_methods() {
    let (server, gateway) = setup(None).await;
    let payload = r#"{"tailf-ncs:device":[{"name":"ce0"}]}"#;

    for verb in ["PATCH", "PUT", "POST", "DELETE"] {
        Mock::given(method(verb))
            .and(path("/restconf/data/tailf-ncs:devices"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .named(verb)
            .mount(&server)
            .await;
    }

    for operation in ["merge", "replace", "create", "delete"] {
        let reply = gateway
            .edit_config(&EditConfigRequest {
                token: String::new(),
                path: "/tailf-ncs:devices".into(),
                options: None,
                operation_type: operation.into(),
                json_data: payload.into(),
            })
            .await
            .unwrap();
        assert_eq!(reply.result, "", "operation {operation}");
    }
}

#[tokio::test]
async fn test_edit_config_unknown_operation_makes_no_call() {
    let (server, gateway) = setup(None).await;
    forbid_controller_calls(&server).await;

    let err = gateway
        .edit_config(&EditConfigRequest {
            token: String::new(),
            path: "/tailf-ncs:devices".into(),
            options: None,
            operation_type: "remove".into(),
            json_data: "{}".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(&err, CoreError::UnsupportedOperation { operation } if operation == "remove"),
        "got: {err:?}"
    );
    assert!(err.to_string().contains("remove"));

    server.verify().await;
}

#[tokio::test]
async fn test_dot_segments_never_leave_the_namespace() {
    let (server, gateway) = setup(None).await;
    forbid_controller_calls(&server).await;

    let escape = "/../operations/tailf-ncs:devices/sync-from";

    let err = gateway
        .edit_config(&EditConfigRequest {
            path: escape.into(),
            operation_type: "create".into(),
            json_data: "{}".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(
        matches!(&err, CoreError::InvalidPath { path } if path == escape),
        "got: {err:?}"
    );

    let err = gateway
        .get_config(&GetConfigRequest {
            path: "/%2E%2e/tailf/query".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidPath { .. }), "got: {err:?}");

    let err = gateway
        .exec_operation(&ExecOperationRequest {
            path: "/tailf-ncs:devices/../../data/tailf-ncs:devices".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidPath { .. }), "got: {err:?}");

    server.verify().await;
}

// ── Controller errors ───────────────────────────────────────────────

#[tokio::test]
async fn test_errors_envelope_in_200_fails_every_operation() {
    let (server, gateway) = setup(None).await;
    let envelope = r#"{"errors":{"error":[{"error-message":"bad path"}]}}"#;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope))
        .mount(&server)
        .await;

    let results = [
        gateway.get_devices(&GetDevicesRequest::default()).await.map(|_| ()),
        gateway
            .get_config(&GetConfigRequest {
                path: "/bad".into(),
                ..Default::default()
            })
            .await
            .map(|_| ()),
        gateway
            .edit_config(&EditConfigRequest {
                path: "/bad".into(),
                operation_type: "merge".into(),
                ..Default::default()
            })
            .await
            .map(|_| ()),
        gateway.query(&QueryRequest::default()).await.map(|_| ()),
        gateway
            .exec_operation(&ExecOperationRequest {
                path: "/bad".into(),
                ..Default::default()
            })
            .await
            .map(|_| ()),
    ];

    for result in results {
        let err = result.unwrap_err();
        assert!(
            matches!(
                err.controller_error(),
                Some(gnso_api::Error::Controller { message }) if message.contains("bad path")
            ),
            "got: {err:?}"
        );
    }
}

#[tokio::test]
async fn test_http_error_is_passed_through_unmodified() {
    let (server, gateway) = setup(None).await;
    let raw = r#"{"ietf-restconf:errors":{"error":[{"error-type":"application","error-tag":"invalid-value","error-message":"uri keypath not found"}]}}"#;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string(raw))
        .mount(&server)
        .await;

    let err = gateway
        .get_config(&GetConfigRequest {
            path: "/missing".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err.controller_error() {
        Some(gnso_api::Error::Http { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(body, raw);
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

/// A query whose result legitimately has a top-level `errors` member is
/// indistinguishable from a controller error and is reported as one.
#[tokio::test]
async fn test_query_result_with_errors_member_is_reported_as_error() {
    let (server, gateway) = setup(None).await;

    Mock::given(method("POST"))
        .and(path("/restconf/tailf/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"errors":0,"result":[]}"#),
        )
        .mount(&server)
        .await;

    let err = gateway.query(&QueryRequest::default()).await.unwrap_err();
    assert!(matches!(
        err.controller_error(),
        Some(gnso_api::Error::Controller { message }) if message == "0"
    ));
}
