use std::sync::Arc;

use reqwest::StatusCode;
use test_helpers::{court_details_a, court_details_b, spawn_app};
use ui::hooks::use_courts;

#[tokio::test]
async fn create_and_load_courts() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let courts = use_courts(app.client.clone());

    let a = courts.create_court(&court_details_a()).await?;
    let b = courts.create_court(&court_details_b()).await?;
    assert_eq!(a.slug, "cancha-1");
    assert!(a.created_at.is_some());
    assert_ne!(a.id, b.id);

    let listed = courts.load_courts().await?;
    assert_eq!(listed, vec![a, b]);
    assert!(!courts.is_loading());
    assert!(courts.error().is_none());

    Ok(())
}

#[tokio::test]
async fn sequential_loads_are_stable() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_court().await?;
    let courts = use_courts(app.client.clone());

    let first = courts.load_courts().await?;
    let second = courts.load_courts().await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn duplicate_slug_is_recorded_and_returned() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let courts = use_courts(app.client.clone());
    courts.create_court(&court_details_a()).await?;

    let err = courts.create_court(&court_details_a()).await.unwrap_err();

    assert!(Arc::ptr_eq(&err, &courts.error().unwrap()));
    assert!(err.to_string().contains("duplicate key value"));
    match &*err {
        ui::Error::Client(e) => assert_eq!(e.status(), Some(StatusCode::CONFLICT)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!courts.is_loading());

    // Failure did not store anything.
    assert_eq!(courts.load_courts().await?.len(), 1);
    assert!(courts.error().is_none());

    Ok(())
}

#[tokio::test]
async fn service_outage_surfaces_status() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.fail_next(503, "upstream connect error");
    let courts = use_courts(app.client.clone());

    let err = courts.load_courts().await.unwrap_err();

    assert_eq!(err.to_string(), "upstream connect error");
    assert!(courts.error().is_some());
    assert!(!courts.is_loading());

    Ok(())
}
