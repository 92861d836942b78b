//! `phoenix init`: write a starter `phoenix.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use phoenix_core::config::CONFIG_FILE_NAME;
use phoenix_core::PhoenixConfig;
use tracing::info;

use crate::error::CliError;

/// Write the default config template into `dir`, refusing to overwrite an
/// existing file. Returns the path written.
pub fn init_config(dir: &Path) -> Result<PathBuf, CliError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(CliError::AlreadyExists(path));
    }
    fs::write(&path, PhoenixConfig::default_template()).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote config template");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("phoenix-init-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_a_loadable_template() {
        let dir = scratch_dir("fresh");
        let path = init_config(&dir).unwrap();
        assert_eq!(path, dir.join("phoenix.toml"));
        assert_eq!(
            PhoenixConfig::load_from(&path).unwrap(),
            PhoenixConfig::default()
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = scratch_dir("existing");
        fs::write(dir.join("phoenix.toml"), "[sort]\nbogo_limit = 3\n").unwrap();
        let err = init_config(&dir).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert!(err.to_string().ends_with("already exists, not overwriting"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
