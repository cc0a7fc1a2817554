use anyhow::{Context, Result};
use deathchest_world::ChestConfig;
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/deathchest.toml";

/// Load death-chest configuration from an explicit path, falling back to
/// defaults on errors. The result is sanitized.
pub fn load_from_path(path: &Path) -> ChestConfig {
    let config = match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ChestConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                ChestConfig::default()
            }
        },
        Err(err) => {
            if path != Path::new(DEFAULT_CONFIG_PATH)
                || err.kind() != std::io::ErrorKind::NotFound
            {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            } else {
                warn!(
                    "Death chest config not found at {}. Using defaults",
                    path.display()
                );
            }
            ChestConfig::default()
        }
    };
    config.sanitized()
}

/// Write `config` as TOML, creating parent directories.
pub fn save_to_path(config: &ChestConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("deathchest_config_{}_{name}", std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_from_path(&temp_path("missing.toml"));
        assert_eq!(config, ChestConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let path = temp_path("partial.toml");
        fs::write(
            &path,
            "search_radius = 3\n\n[label]\nenabled = false\n\n[messages]\ncontainer_removed = \"gone\"\n",
        )
        .expect("write config");

        let config = load_from_path(&path);
        assert_eq!(config.search_radius, 3);
        assert!(!config.label.enabled);
        assert_eq!(config.messages.container_removed, "gone");
        assert_eq!(
            config.messages.container_created,
            ChestConfig::default().messages.container_created
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn negative_radius_becomes_zero() {
        let path = temp_path("radius.toml");
        fs::write(&path, "search_radius = -2\n").expect("write config");
        assert_eq!(load_from_path(&path).search_radius, 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn large_radius_is_kept() {
        let path = temp_path("wide.toml");
        fs::write(&path, "search_radius = 20\n").expect("write config");
        assert_eq!(load_from_path(&path).search_radius, 20);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn invalid_toml_falls_back() {
        let path = temp_path("broken.toml");
        fs::write(&path, "search_radius = [").expect("write config");
        assert_eq!(load_from_path(&path), ChestConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_path("saved/deathchest.toml");
        let mut config = ChestConfig::default();
        config.search_radius = 4;
        config.label.lines[0] = "RIP".to_string();
        save_to_path(&config, &path).expect("save config");

        assert_eq!(load_from_path(&path), config);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }
}
