use hello_echo::hello::{HELLO_HTML, handler, respond};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{Value, json};

/// Tests for the Hello Lambda
/// The greeting must not depend on the event or the context in any way.

#[test]
fn test_hello_empty_objects() {
    let response = respond(&json!({}), &json!({}));

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.header("Content-Type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(
        response.body,
        "<html><body><h1>Hello World!</h1></body></html>"
    );
}

#[test]
fn test_hello_serialized_shape() {
    let response = respond(&json!({}), &json!({}));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(
        value,
        json!({
            "statusCode": 200,
            "headers": { "Content-Type": "text/html; charset=utf-8" },
            "body": "<html><body><h1>Hello World!</h1></body></html>"
        })
    );
}

#[test]
fn test_hello_ignores_input() {
    let inputs = [
        (Value::Null, Value::Null),
        (json!({"path": "/anything", "httpMethod": "POST"}), json!({"requestId": "abc"})),
        (json!([1, 2, 3]), json!("context as a string")),
        (json!(42), json!(true)),
    ];

    for (event, context) in &inputs {
        let response = respond(event, context);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, HELLO_HTML);
        assert_eq!(response.headers.len(), 1);
    }
}

#[test]
fn test_hello_is_idempotent() {
    let event = json!({"a": 1});
    let context = json!({"requestId": "abc"});

    let first = serde_json::to_string(&respond(&event, &context)).unwrap();
    let second = serde_json::to_string(&respond(&event, &context)).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_hello_lambda_handler() {
    let mut context = Context::default();
    context.request_id = "req-hello".to_string();

    let response = handler(LambdaEvent::new(json!({"ignored": true}), context))
        .await
        .expect("hello handler never fails");

    assert_eq!(response, respond(&Value::Null, &Value::Null));
}
