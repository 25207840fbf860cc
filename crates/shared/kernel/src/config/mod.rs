use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use plinth_domain::PlatformSettings;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `PLINTH__FAILURE_POLICY=terminate_on_failure`.
pub const ENV_PREFIX: &str = "PLINTH";

/// Layered configuration loader combining an optional file with environment overrides.
///
/// 1. **Base File**: when `path` is given, the file must exist; its format is
///    inferred from the extension (`.toml`, `.json`, `.yaml`, ...).
/// 2. **Environment Overrides**: variables prefixed with `PLINTH__`, nested keys
///    separated by double underscores.
///
/// # Errors
/// Returns [`KernelError::Config`] if the file is missing, an override is malformed,
/// or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use plinth_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     verbose: Option<bool>,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// # let _ = cfg.verbose;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}

/// Loads [`PlatformSettings`] overrides.
///
/// # Errors
/// See [`load_config`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<PlatformSettings, KernelError> {
    load_config(path)
}
