pub mod schedule;
pub mod view;
