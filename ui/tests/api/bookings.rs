use jiff::Timestamp;
use serde_json::json;
use test_helpers::mock::DevDataset;
use test_helpers::spawn_app;
use ui::hooks::use_bookings;

#[tokio::test]
async fn bookings_are_listed_with_relations() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_booking().await?;
    // The insert representation has no embedded relations.
    assert!(created.court.is_none());

    let bookings = use_bookings(app.client.clone());
    let listed = bookings.load_bookings().await?;

    assert_eq!(listed.len(), 1);
    let court = listed[0].court.as_ref().unwrap();
    assert_eq!(court.slug.as_deref(), Some("cancha-1"));
    let booking_type = listed[0].booking_type.as_ref().unwrap();
    assert_eq!(booking_type.icon.as_deref(), Some("🏐"));

    Ok(())
}

#[tokio::test]
async fn calendar_events_from_service() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_booking().await?;
    let bookings = use_bookings(app.client.clone());

    let events = bookings.load_calendar_events().await?;

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.title, "🏐Turno - Cancha 1");
    assert_eq!(event.calendar_id.as_deref(), Some("cancha-1"));
    assert_eq!(
        event.start.to_string(),
        "2025-01-06T10:00:00-03:00[America/Argentina/Buenos_Aires]"
    );
    assert_eq!(event.meta.state, Some(json!("confirmed")));
    assert_eq!(event.meta.client.as_ref().unwrap()["name"], json!("Ana"));

    Ok(())
}

#[tokio::test]
async fn malformed_row_fails_calendar_load() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.store.insert_raw(
        payloads::tables::BOOKINGS,
        json!({
            "id": 99,
            "start_at": "2025-01-06 10:00",
            "end_at": "2025-01-06T14:00:00Z",
        }),
    );
    let bookings = use_bookings(app.client.clone());

    let err = bookings.load_calendar_events().await.unwrap_err();

    assert!(matches!(&*err, ui::Error::Map(_)));
    assert!(bookings.error().is_some());
    assert!(!bookings.is_loading());

    Ok(())
}

#[tokio::test]
async fn dev_dataset_maps_completely() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let day_start: Timestamp = "2025-01-06T12:00:00Z".parse()?;
    let dataset = DevDataset::create(&app.client, day_start).await?;
    assert_eq!(dataset.courts.len(), 2);
    assert_eq!(dataset.booking_types.len(), 3);
    let slugs: Vec<_> =
        dataset.courts.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cancha-1", "cancha-central"]);
    assert!(
        dataset
            .bookings
            .iter()
            .all(|b| b.court.as_ref().is_some_and(|c| c.slug.is_some()))
    );

    let bookings = use_bookings(app.client.clone());
    let events = bookings.load_calendar_events().await?;

    assert_eq!(events.len(), dataset.bookings.len());
    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "🏐Turno - Cancha 1",
            "🎾Final de torneo",
            "Escuelita",
            "Turno - Cancha Central",
        ]
    );

    Ok(())
}
