pub mod add;
pub mod config;
pub mod list;
pub mod remove;
