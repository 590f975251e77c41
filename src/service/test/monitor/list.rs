use super::*;

/// Tests that listing only returns the requesting guild's monitors.
///
/// Expected: Ok with the guild's two entries, not the third
#[tokio::test]
async fn lists_only_own_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::monitor::MonitorFactory::new(db)
        .guild_id("111111111")
        .twitch_channel("shroud")
        .build()
        .await?;
    factory::monitor::MonitorFactory::new(db)
        .guild_id("111111111")
        .twitch_channel("lirik")
        .build()
        .await?;
    factory::monitor::MonitorFactory::new(db)
        .guild_id("222222222")
        .twitch_channel("shroud")
        .build()
        .await?;

    let service = MonitorService::new(db);
    let monitors = service.list_monitors("111111111").await.unwrap();

    assert_eq!(monitors.len(), 2);

    Ok(())
}

/// Tests listing for a guild with no monitors.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn lists_empty_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MonitorService::new(db);
    let monitors = service.list_monitors("123456789").await.unwrap();

    assert!(monitors.is_empty());

    Ok(())
}
