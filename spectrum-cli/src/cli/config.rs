//! Configuration lookup for the command line

use spectrum_core::{load_config, spectrum_config_path, Config, SpectrumResult};
use std::path::Path;
use tracing::debug;

/// Load the explicit config file, else the default location when it exists,
/// else built-in defaults. An explicit path that cannot be read is an error.
pub fn resolve(explicit: Option<&Path>) -> SpectrumResult<Config> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config(path);
    }

    let default_path = spectrum_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        load_config(&default_path)
    } else {
        Ok(Config::default())
    }
}
