//! End-to-end test against a real listener.

use std::time::Duration;

use serde_json::json;

use calc_api::{HttpServer, ServiceConfig};

#[tokio::test]
async fn test_round_trip_over_real_socket() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServiceConfig::default());
    let handle = tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    // Authenticated request computes.
    let res = client
        .post(format!("http://{}/add/", addr))
        .header("X-Session-Token", "00000000")
        .json(&json!({"number1": 1, "number2": 2}))
        .send()
        .await
        .expect("Service unreachable");
    assert_eq!(res.status(), 202);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["output"], 3);

    // Same user immediately again is too early.
    let res = client
        .post(format!("http://{}/add/", addr))
        .header("X-Session-Token", "00000000")
        .json(&json!({"number1": 1, "number2": 2}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 425);

    // Unauthenticated request never reaches the dispatcher.
    let res = client
        .post(format!("http://{}/divide/", addr))
        .json(&json!({"number1": 6, "number2": 3}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);

    handle.abort();
}
