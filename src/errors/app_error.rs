use taskchain_core::{ComposeError, StepError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de composición: {0}")]
    Compose(#[from] ComposeError),
    #[error("Error de step: {0}")]
    Step(#[from] StepError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de telemetría: {0}")]
    Telemetry(String),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
