use std::path::PathBuf;

/// Get the Spectrum home directory
/// Checks SPECTRUM_HOME environment variable, falls back to ${HOME}/.spectrum
pub fn spectrum_home() -> PathBuf {
    if let Ok(path) = std::env::var("SPECTRUM_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".spectrum")
    }
}

/// Get the data directory holding persisted datasets
/// Checks SPECTRUM_DATA_DIR environment variable, falls back to SPECTRUM_HOME/data
pub fn spectrum_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SPECTRUM_DATA_DIR") {
        PathBuf::from(path)
    } else {
        spectrum_home().join("data")
    }
}

/// Get the configuration file path
/// Checks SPECTRUM_CONFIG environment variable, falls back to SPECTRUM_HOME/config.toml
pub fn spectrum_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SPECTRUM_CONFIG") {
        PathBuf::from(path)
    } else {
        spectrum_home().join("config.toml")
    }
}

/// Resolve a dataset file name against the data directory.
/// Absolute paths are returned unchanged.
pub fn dataset_path(file_name: &str) -> PathBuf {
    let path = PathBuf::from(file_name);
    if path.is_absolute() {
        path
    } else {
        spectrum_data_dir().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_data_dir_follows_home() {
        let original_home = std::env::var("SPECTRUM_HOME").ok();
        let original_data = std::env::var("SPECTRUM_DATA_DIR").ok();

        std::env::set_var("SPECTRUM_HOME", "/tmp/spectrum-home");
        std::env::remove_var("SPECTRUM_DATA_DIR");

        assert_eq!(spectrum_home(), PathBuf::from("/tmp/spectrum-home"));
        assert_eq!(spectrum_data_dir(), PathBuf::from("/tmp/spectrum-home/data"));
        assert_eq!(
            dataset_path("species_data.json"),
            PathBuf::from("/tmp/spectrum-home/data/species_data.json")
        );
        assert_eq!(dataset_path("/abs/file.json"), PathBuf::from("/abs/file.json"));

        match original_home {
            Some(v) => std::env::set_var("SPECTRUM_HOME", v),
            None => std::env::remove_var("SPECTRUM_HOME"),
        }
        if let Some(v) = original_data {
            std::env::set_var("SPECTRUM_DATA_DIR", v);
        }
    }
}
