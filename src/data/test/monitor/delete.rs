use super::*;

/// Tests deleting an existing channel config.
///
/// Expected: Ok(1) and the row removed
#[tokio::test]
async fn deletes_existing_monitor() -> Result<(), DbErr> {
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

    let repo = MonitorRepository::new(db);
    let deleted = repo.delete("123456789", "shroud").await?;

    assert_eq!(deleted, 1);

    let remaining = entity::prelude::ChannelConfig::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting an absent channel config.
///
/// Expected: Ok(0), no error
#[tokio::test]
async fn returns_zero_for_missing_monitor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitorRepository::new(db);
    let deleted = repo.delete("123456789", "shroud").await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that deletion only removes the targeted guild's config.
///
/// Two guilds monitor the same channel; deleting one must leave the other.
///
/// Expected: Ok(1) and the other guild's row intact
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
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
        .guild_id("222222222")
        .twitch_channel("shroud")
        .build()
        .await?;

    let repo = MonitorRepository::new(db);
    let deleted = repo.delete("111111111", "shroud").await?;

    assert_eq!(deleted, 1);

    let remaining = repo.get("222222222", "shroud").await?;
    assert!(remaining.is_some());

    Ok(())
}
