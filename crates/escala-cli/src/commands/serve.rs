use escala_core::error::EscalaError;
use std::path::PathBuf;

use crate::config::{ServeConfig, ServeOverrides};
use crate::{commands, server, Backend};

pub fn run(
    config_file: Option<PathBuf>,
    overrides: ServeOverrides,
    backend: Backend,
) -> Result<(), EscalaError> {
    let config = ServeConfig::load(config_file.as_deref(), overrides)?;
    let extractor = commands::extractor(backend, config.layout);
    tracing::info!(backend = extractor.backend_name(), "starting escala server");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run(config, extractor))
}
