mod booking_types;
mod bookings;
mod courts;

use test_helpers::{API_KEY, assert_status_code, spawn_app};

#[tokio::test]
async fn list_empty_table() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let courts: Vec<payloads::Court> = app
        .client
        .list_rows(payloads::tables::COURTS, "*")
        .await?;
    assert!(courts.is_empty());

    Ok(())
}

#[tokio::test]
async fn wrong_api_key_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.client_with_key(&format!("{API_KEY}-wrong"));

    let result = client
        .list_rows::<payloads::Court>(payloads::tables::COURTS, "*")
        .await;
    assert_status_code(result, reqwest::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn unknown_table_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .list_rows::<serde_json::Value>("matches", "*")
        .await;
    assert_status_code(result, reqwest::StatusCode::NOT_FOUND);

    Ok(())
}
