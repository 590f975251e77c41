use super::*;

/// Tests membership check for a recorded clip.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_recorded_clip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seen_clip::SeenClipFactory::new(db)
        .guild_id("123456789")
        .clip_id("AwkwardClipId")
        .build()
        .await?;

    let repo = SeenClipRepository::new(db);
    assert!(repo.is_seen("123456789", "AwkwardClipId").await?);

    Ok(())
}

/// Tests membership check for an unknown clip.
///
/// Expected: Ok(false)
#[tokio::test]
async fn misses_unknown_clip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenClipRepository::new(db);
    assert!(!repo.is_seen("123456789", "AwkwardClipId").await?);

    Ok(())
}

/// Tests that one guild's record does not satisfy another guild's check.
///
/// Expected: Ok(false) for the other guild
#[tokio::test]
async fn does_not_cross_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seen_clip::SeenClipFactory::new(db)
        .guild_id("111111111")
        .clip_id("AwkwardClipId")
        .build()
        .await?;

    let repo = SeenClipRepository::new(db);
    assert!(!repo.is_seen("222222222", "AwkwardClipId").await?);

    Ok(())
}
