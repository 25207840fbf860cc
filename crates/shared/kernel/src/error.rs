use std::borrow::Cow;

/// Errors raised while loading settings or installing the build configuration.
#[plinth_derive::plinth_error]
pub enum KernelError {
    /// Settings file or environment overrides could not be read or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The process-wide build configuration was already set.
    #[error("Build configuration already installed{}: {message}", format_context(.context))]
    AlreadyInstalled { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
