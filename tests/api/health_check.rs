use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_endpoint_returns_200() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/health", app.addr))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn server_listens_on_the_configured_host() {
    let app = spawn_app().await;

    assert_ne!(app.port, 0);
    assert!(app.addr.contains(&app.config.app.host));
}
