use directories::ProjectDirs;
use flowdesk::assistant::AssistantConfig;
use flowdesk::canvas::EditorSettings;
use flowdesk::graph::{Tone, WorkflowCategory};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assistant: AssistantSection,
    pub canvas: CanvasSection,
    pub flow: FlowSection,
    pub store: StoreSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSection {
    pub zoom_sensitivity: f32,
    pub zoom_step: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowSection {
    pub category: WorkflowCategory,
    pub tone: Tone,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Overrides the flow file location.
    pub path: Option<PathBuf>,
}

impl Default for AssistantSection {
    fn default() -> Self {
        let defaults = AssistantConfig::default();
        Self {
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

impl Default for CanvasSection {
    fn default() -> Self {
        let defaults = EditorSettings::default();
        Self {
            zoom_sensitivity: defaults.zoom_sensitivity,
            zoom_step: defaults.zoom_step,
        }
    }
}

impl AppConfig {
    pub fn assistant_config(&self) -> AssistantConfig {
        AssistantConfig {
            base_url: self.assistant.base_url.clone(),
            timeout_secs: self.assistant.timeout_secs,
        }
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            zoom_sensitivity: self.canvas.zoom_sensitivity,
            zoom_step: self.canvas.zoom_step,
            ..EditorSettings::default()
        }
    }

    /// Explicit override, else `flow.json` in the platform data directory.
    pub fn store_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.store.path {
            return Some(path.clone());
        }
        project_dirs().map(|dirs| dirs.data_dir().join("flow.json"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("app", "flowdesk", "flowdesk")
}

fn get_config_path() -> Option<PathBuf> {
    let proj_dirs = project_dirs()?;
    let config_dir = proj_dirs.config_dir();
    if !config_dir.exists() {
        if let Err(e) = fs::create_dir_all(config_dir) {
            error!("Failed to create config directory: {}", e);
            return None;
        }
    }
    Some(config_dir.join("config.toml"))
}

pub fn save_config(config: &AppConfig) {
    let Some(path) = get_config_path() else {
        return;
    };
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            if let Err(e) = fs::write(&path, toml_str) {
                error!("Failed to write config file: {}", e);
            } else {
                info!("Config saved to {}", path.display());
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Missing file: defaults are written out. Unreadable file: defaults are
/// used and the file is left alone.
pub fn load_config() -> AppConfig {
    let Some(path) = get_config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        let config = AppConfig::default();
        save_config(&config);
        return config;
    }
    match fs::read_to_string(&path) {
        Ok(toml_str) => match toml::from_str(&toml_str) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse config file, using defaults: {}", e);
                AppConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config file, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("base_url = \"http://localhost:3001/api\""));
        assert!(text.contains("category = \"Lettings Residential\""));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let text = "[canvas]\nzoom_step = 0.25\n\n[flow]\ntone = \"Playful\"\n";
        let parsed: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(parsed.canvas.zoom_step, 0.25);
        assert_eq!(parsed.canvas.zoom_sensitivity, 0.001);
        assert_eq!(parsed.flow.tone, Tone::Playful);
        assert_eq!(parsed.assistant.timeout_secs, 30);
        assert_eq!(parsed.editor_settings().zoom_step, 0.25);
    }
}
