use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexi_config::Config;
use serde::{Deserialize, Serialize};

/// `$LEXI_HOME`, else `~/.config/lexi`
fn lexi_root() -> PathBuf {
    if let Some(home) = std::env::var_os("LEXI_HOME") {
        return PathBuf::from(home);
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".config")
        .join("lexi")
}

pub fn profiles_dir() -> PathBuf {
    lexi_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// File a profile argument refers to: an existing path, or a name inside `dir`
pub fn profile_path(dir: &Path, name_or_path: &str) -> PathBuf {
    let as_path = Path::new(name_or_path);
    if as_path.is_file() {
        as_path.to_path_buf()
    } else {
        dir.join(format!("{name_or_path}.json"))
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Load a profile from `dir`, falling back to `main` and then to environment defaults
pub fn load_profile_from(dir: &Path, name_or_path: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(dir, name_or_path);

    if profile_file.exists() {
        tracing::info!("Loading profile {}", profile_file.display());
        return read_profile(&profile_file);
    }

    let main_file = dir.join("main.json");
    if main_file.exists() {
        tracing::warn!("Profile {name_or_path} not found, falling back to main profile");
        return read_profile(&main_file);
    }

    tracing::debug!("No profile found, using environment defaults");
    Ok(Config::new())
}

pub fn load_profile(name_or_path: &str) -> anyhow::Result<Config> {
    load_profile_from(&profiles_dir(), name_or_path)
}

/// Write `config` as profile `name` inside `dir`
pub fn save_profile_to(dir: &Path, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create profile directory {}", dir.display()))?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profile_path(dir, name);
    fs::write(&file, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write profile {}", file.display()))?;

    tracing::info!("Saved profile: {name}");
    Ok(file)
}

pub fn save_profile(name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    save_profile_to(&profiles_dir(), name, config)
}
