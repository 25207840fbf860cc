//! The process-wide [`BuildConfig`].

use crate::error::KernelError;
use plinth_domain::BuildConfig;
use std::sync::OnceLock;
use tracing::info;

static BUILD_CONFIG: OnceLock<BuildConfig> = OnceLock::new();

/// Installs the process-wide configuration.
///
/// Must run before the first assertion; any earlier read fixes the
/// configuration to [`BuildConfig::detected`].
///
/// # Errors
/// Returns [`KernelError::AlreadyInstalled`] if a configuration is already in place.
pub fn install(config: BuildConfig) -> Result<&'static BuildConfig, KernelError> {
    let mut installed = false;
    let current = BUILD_CONFIG.get_or_init(|| {
        installed = true;
        config
    });

    if !installed {
        return Err(KernelError::AlreadyInstalled {
            message: format!("active configuration is {current:?}").into(),
            context: None,
        });
    }

    info!(
        debug_build = current.debug_build,
        os = %current.os,
        compiler = %current.compiler,
        policy = ?current.failure_policy,
        "Build configuration installed"
    );
    Ok(current)
}

/// Returns the process-wide configuration, installing the detected one on first use.
#[must_use]
pub fn build_config() -> &'static BuildConfig {
    BUILD_CONFIG.get_or_init(BuildConfig::detected)
}

/// Whether a configuration has been fixed for this process.
#[must_use]
pub fn is_installed() -> bool {
    BUILD_CONFIG.get().is_some()
}
