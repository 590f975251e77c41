use super::*;

/// Tests that a registered monitor is immediately visible in the guild's list.
///
/// Expected: Ok, list contains exactly one matching entry
#[tokio::test]
async fn register_then_list_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);
    service
        .register_monitor("123456789", "shroud", "987654321")
        .await
        .unwrap();

    let monitors = service.list_monitors("123456789").await.unwrap();

    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].twitch_channel, "shroud");
    assert_eq!(monitors[0].discord_channel_id, "987654321");

    Ok(())
}

/// Tests that registering the same (guild, channel) twice yields a conflict.
///
/// Expected: AlreadyExists on the second call, one stored entry
#[tokio::test]
async fn duplicate_registration_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);
    service
        .register_monitor("123456789", "shroud", "987654321")
        .await
        .unwrap();

    let result = service
        .register_monitor("123456789", "shroud", "111111111")
        .await;

    assert_monitor_err(result, MonitorError::AlreadyExists("shroud".to_string()));

    let count = entity::prelude::ChannelConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that channel name matching is case-insensitive and trimmed.
///
/// "  Shroud  " and "shroud" are the same monitor.
///
/// Expected: AlreadyExists on the differently-cased second call
#[tokio::test]
async fn normalizes_channel_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);
    let monitor = service
        .register_monitor("123456789", "  Shroud  ", "987654321")
        .await
        .unwrap();

    assert_eq!(monitor.twitch_channel, "shroud");

    let result = service
        .register_monitor("123456789", "SHROUD", "987654321")
        .await;

    assert_monitor_err(result, MonitorError::AlreadyExists("shroud".to_string()));

    Ok(())
}

/// Tests that malformed channel names are rejected before any store mutation.
///
/// Covers empty, whitespace-only, and the literal "null" in any case.
///
/// Expected: InvalidChannelName for each, zero stored entries
#[tokio::test]
async fn rejects_invalid_channel_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);

    for name in ["", "  ", "null", "NULL", "Null"] {
        let result = service.register_monitor("123456789", name, "987654321").await;
        assert_monitor_err(result, MonitorError::InvalidChannelName);
    }

    let count = entity::prelude::ChannelConfig::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
