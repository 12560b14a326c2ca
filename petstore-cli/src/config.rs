use crate::codec::Format;
use anyhow::{Context, Result};
use std::path::Path;

pub const APP_NAME: &str = "petstore-cli";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: f32,
    /// format used when a command is not given one explicitly
    pub default_format: Format,
}

/// `Config` implements `Default`
impl ::std::default::Default for Config {
    fn default() -> Self {
        Self {
            version: 0.1,
            default_format: Format::Json,
        }
    }
}

/// Load the configuration from `path`, or from the user's config directory.
/// A missing file is created with the default values.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => confy::load_path(path)
            .with_context(|| format!("trying to load configuration from {:?}", path)),
        None => confy::load(APP_NAME, None)
            .with_context(|| format!("trying to load configuration for {}", APP_NAME)),
    }
}
