use super::*;

/// Tests recording a clip as seen.
///
/// Expected: Ok and the row stored
#[tokio::test]
async fn marks_clip_seen() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenClipRepository::new(db);
    repo.mark_seen("123456789", "AwkwardClipId").await?;

    let count = entity::prelude::SeenClip::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that recording the same clip twice is idempotent.
///
/// A poll run may re-evaluate a clip after a crash between publish and
/// record; the second insert must be a no-op, not an error.
///
/// Expected: Ok both times, one stored row
#[tokio::test]
async fn marking_twice_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenClipRepository::new(db);
    repo.mark_seen("123456789", "AwkwardClipId").await?;
    repo.mark_seen("123456789", "AwkwardClipId").await?;

    let count = entity::prelude::SeenClip::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same clip id is tracked separately per guild.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn tracks_guilds_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SeenClip)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeenClipRepository::new(db);
    repo.mark_seen("111111111", "AwkwardClipId").await?;
    repo.mark_seen("222222222", "AwkwardClipId").await?;

    let count = entity::prelude::SeenClip::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
