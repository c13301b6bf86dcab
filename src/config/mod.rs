//! Configuration management for pinkink.
//!
//! This module handles loading and saving configuration from `~/.pinkink/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    mask_key, AiConfig, ColorSetting, Config, GeneralConfig, JournalConfig, StatsConfig,
};
