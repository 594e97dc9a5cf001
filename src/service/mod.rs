pub mod calendar_presenter;
pub mod schedule_service;
