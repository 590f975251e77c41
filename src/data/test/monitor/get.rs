use super::*;

/// Tests retrieving an existing channel config by its composite key.
///
/// Expected: Ok(Some) with the matching config
#[tokio::test]
async fn gets_existing_monitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::monitor::MonitorFactory::new(db)
        .guild_id("123456789")
        .twitch_channel("shroud")
        .discord_channel_id("987654321")
        .build()
        .await?;

    let repo = MonitorRepository::new(db);
    let monitor = repo.get("123456789", "shroud").await?;

    let monitor = monitor.expect("monitor should exist");
    assert_eq!(monitor.discord_channel_id, "987654321");

    Ok(())
}

/// Tests retrieving an absent channel config.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_monitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitorRepository::new(db);
    let monitor = repo.get("123456789", "shroud").await?;

    assert!(monitor.is_none());

    Ok(())
}

/// Tests that the lookup key is exact per guild.
///
/// A config registered by one guild must not be visible under another
/// guild's key.
///
/// Expected: Ok(None) for the other guild
#[tokio::test]
async fn does_not_cross_guilds() -> Result<(), DbErr> {
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

    let repo = MonitorRepository::new(db);
    let monitor = repo.get("222222222", "shroud").await?;

    assert!(monitor.is_none());

    Ok(())
}
