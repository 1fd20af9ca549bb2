// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use opsdeck_app::TabKind;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "opsdeck";
const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub expanded: Option<Vec<String>>,
    pub start_tab: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            expanded: Some(vec![opsdeck_content::DEFAULT_EXPANDED_ID.to_owned()]),
            start_tab: Some(TabKind::Sections.label().to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("OPSDECK_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set OPSDECK_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(start_tab) = &self.ui.start_tab
            && TabKind::parse(start_tab).is_none()
        {
            let labels: Vec<&str> = TabKind::ALL.iter().map(|tab| tab.label()).collect();
            bail!(
                "ui.start_tab in {} is {:?}; expected one of: {}",
                path.display(),
                start_tab,
                labels.join(", ")
            );
        }

        if let Some(expanded) = &self.ui.expanded
            && expanded.iter().any(|id| id.trim().is_empty())
        {
            bail!(
                "ui.expanded in {} contains an empty identifier",
                path.display()
            );
        }

        Ok(())
    }

    /// Identifiers expanded at startup. Unknown identifiers are carried
    /// as-is; they simply never match a catalog entry.
    pub fn expanded_ids(&self) -> Vec<String> {
        match &self.ui.expanded {
            Some(ids) => ids.clone(),
            None => vec![opsdeck_content::DEFAULT_EXPANDED_ID.to_owned()],
        }
    }

    pub fn start_tab(&self) -> TabKind {
        self.ui
            .start_tab
            .as_deref()
            .and_then(TabKind::parse)
            .unwrap_or(TabKind::Sections)
    }

    pub fn example_config(path: &Path) -> String {
        let labels: Vec<&str> = TabKind::ALL.iter().map(|tab| tab.label()).collect();
        format!(
            "# opsdeck config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Section identifiers expanded at startup.\nexpanded = [\"{}\"]\n# One of: {}\nstart_tab = \"sections\"\n",
            path.display(),
            opsdeck_content::DEFAULT_EXPANDED_ID,
            labels.join(", "),
        )
    }
}
