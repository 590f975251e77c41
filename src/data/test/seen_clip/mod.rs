use crate::data::seen_clip::SeenClipRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod is_seen;
mod mark_seen;
