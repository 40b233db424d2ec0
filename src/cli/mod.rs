pub mod report;
pub mod setup;
pub mod show;
pub mod ui;
