pub use serde::{de::DeserializeOwned, Serialize};

use std::path::{Path, PathBuf};

/// A JSON settings file living in the bot's working directory.
pub trait Config: Serialize + DeserializeOwned {
    /// File name, relative to the config directory
    const KEY: &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn config_path<T: Config>(dir: &Path) -> PathBuf {
    dir.join(<T as Config>::KEY)
}

/// `Ok(None)` when the file does not exist.
pub fn load_config<T: Config>(dir: &Path) -> Result<Option<T>, ConfigError> {
    let path = config_path::<T>(dir);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    match serde_json::from_str(&raw) {
        Ok(val) => Ok(Some(val)),
        Err(source) => {
            error!(
                "Error when deserializing config `{}`: {}",
                <T as Config>::KEY,
                source
            );
            Err(ConfigError::Parse { path, source })
        }
    }
}

pub fn load_config_or_default<T: Config + Default>(dir: &Path) -> Result<T, ConfigError> {
    let config = load_config::<T>(dir)?;
    if config.is_none() {
        warn!(
            "No `{}` found in `{}`, using defaults",
            <T as Config>::KEY,
            dir.display()
        );
    }
    Ok(config.unwrap_or_default())
}
