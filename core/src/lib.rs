pub mod action;
pub mod build;
pub mod config;
pub mod fsutil;
pub mod storage;
pub mod style;
pub mod verify;

pub use crate::config::Config;
