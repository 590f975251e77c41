use crate::{
    data::monitor::MonitorRepository,
    error::{monitor::MonitorError, AppError},
    service::MonitorService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod register;
mod unregister;

/// Asserts that an `AppError` is the expected user-visible monitor error.
fn assert_monitor_err(result: Result<impl std::fmt::Debug, AppError>, expected: MonitorError) {
    match result {
        Err(AppError::MonitorErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
