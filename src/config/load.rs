use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 預設的設定檔位置（程式執行的當前目錄）
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 載入設定，設定檔不存在或無法解析時使用預設值
    #[must_use]
    pub fn new(settings_path: Option<&Path>) -> Self {
        let path = settings_path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
        let settings = Self::load_settings(path).unwrap_or_else(|e| {
            warn!("無法載入設定，使用預設值: {e:#}");
            UserSettings::default()
        });

        Self { settings }
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
