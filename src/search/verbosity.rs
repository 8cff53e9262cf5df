use serde::{Deserialize, Serialize};

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
