use test_helpers::{booking_type_details_a, spawn_app};
use ui::hooks::use_booking_types;

#[tokio::test]
async fn create_and_load_booking_types() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let booking_types = use_booking_types(app.client.clone());

    let created = booking_types
        .create_booking_type(&booking_type_details_a())
        .await?;
    assert_eq!(created.icon.as_deref(), Some("🏐"));

    let listed = booking_types.load_booking_types().await?;
    assert_eq!(listed, vec![created]);

    Ok(())
}

#[tokio::test]
async fn booking_type_without_icon() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let booking_types = use_booking_types(app.client.clone());

    let created = booking_types
        .create_booking_type(&payloads::requests::CreateBookingType {
            name: "Clase".into(),
            icon: None,
        })
        .await?;

    assert_eq!(created.icon, None);
    let stored = app.store.rows(payloads::tables::BOOKING_TYPES);
    assert!(stored[0].get("icon").is_none());

    Ok(())
}
