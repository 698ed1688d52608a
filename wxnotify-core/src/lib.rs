//! Core library for the `wxnotify` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - A typed client for the weather endpoint
//! - Report rendering and bot message delivery
//!
//! It is used by `wxnotify-cli`, but can also be reused by other binaries or services.

pub mod amap;
pub mod config;
pub mod district;
pub mod error;
pub mod model;
pub mod report;
pub mod telegram;

pub use amap::{AmapClient, QueryKind};
pub use config::{Config, TelegramConfig, WeatherConfig};
pub use error::{Error, Result};
pub use model::{DailyCast, Forecast, LiveWeather, WeatherResponse};
pub use telegram::BotClient;
