use super::*;

/// Tests unregistering an existing monitor.
///
/// Expected: Ok and the entry removed
#[tokio::test]
async fn unregisters_existing_monitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::monitor::MonitorFactory::new(db)
        .guild_id("123456789")
        .twitch_channel("shroud")
        .build()
        .await?;

    let service = MonitorService::new(db);
    service.unregister_monitor("123456789", "shroud").await.unwrap();

    let remaining = MonitorRepository::new(db).get("123456789", "shroud").await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests that the unregister lookup is normalized like registration.
///
/// Expected: Ok when unregistering with different casing and padding
#[tokio::test]
async fn unregisters_with_unnormalized_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::monitor::MonitorFactory::new(db)
        .guild_id("123456789")
        .twitch_channel("shroud")
        .build()
        .await?;

    let service = MonitorService::new(db);
    service
        .unregister_monitor("123456789", "  SHROUD ")
        .await
        .unwrap();

    Ok(())
}

/// Tests unregistering a monitor that was never registered.
///
/// Expected: NotFound
#[tokio::test]
async fn unregister_missing_monitor_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);
    let result = service.unregister_monitor("123456789", "shroud").await;

    assert_monitor_err(result, MonitorError::NotFound("shroud".to_string()));

    Ok(())
}
