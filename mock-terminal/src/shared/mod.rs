/// Shared modules for the mock trading terminal
pub mod clock;
pub mod config;
pub mod desk;
pub mod error;
pub mod panels;
pub mod sink;
pub mod table;
pub mod tables;
pub mod widget;
