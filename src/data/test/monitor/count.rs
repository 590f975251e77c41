use super::*;

/// Tests counting monitored channels across all guilds.
///
/// Expected: Ok with the total number of stored configs
#[tokio::test]
async fn counts_monitors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitorRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_monitor(db).await?;
    factory::create_monitor(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
