//! Inicialización del subscriber de `tracing` para el binario.
//!
//! Respeta `RUST_LOG`; si no está definido usa el filtro de la
//! configuración (`TASKCHAIN_LOG`).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::errors::AppError;

pub fn init_tracing(default_filter: &str) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(default_filter)?,
    };
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(env_filter)
                                  .with(fmt_layer)
                                  .try_init()
                                  .map_err(|e| AppError::Telemetry(e.to_string()))
}

fn build_filter(directives: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directives).map_err(|e| AppError::Config(format!("filtro de logs inválido '{directives}': {e}")))
}
