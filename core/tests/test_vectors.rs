//! Verify request building and response interpretation against the JSON
//! vectors in `test-vectors/operations.json`.
//!
//! Each case names an operation, its input, the request it must produce, a
//! simulated response and the outcome that response must turn into. Bodies
//! are compared as parsed JSON so field order does not matter.

use posts_core::{HttpMethod, HttpRequest, HttpResponse, ResourceClient, ResponseOutcome};
use serde_json::Value;

const COLLECTION_URL: &str = "http://localhost:3000/posts";

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn build(client: &ResourceClient, operation: &str, input: &Value) -> HttpRequest {
    let id = || input["id"].as_u64().unwrap();
    match operation {
        "fetch_collection" => client.build_fetch_collection(input["limit"].as_u64().map(|n| n as u32)),
        "fetch_resource" => client.build_fetch_resource(id()),
        "create_resource" => client.build_create_resource(&input["payload"]).unwrap(),
        "replace_resource" => client.build_replace_resource(id(), &input["payload"]).unwrap(),
        "delete_resource" => client.build_delete_resource(id()),
        other => panic!("unknown operation: {other}"),
    }
}

#[test]
fn operation_test_vectors() {
    let raw = include_str!("../../test-vectors/operations.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = ResourceClient::new(COLLECTION_URL);
    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap();
        let operation = case["operation"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = build(&client, operation, &case["input"]);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(
            req.url,
            format!("{COLLECTION_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match &expected_req["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
            expected => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let status = response.status;
        let outcome = match client.parse_response(response) {
            Ok(payload) => ResponseOutcome::Success { status, payload },
            Err(err) => ResponseOutcome::from(err),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            case["expected_outcome"],
            "{name}: outcome"
        );
    }
}
