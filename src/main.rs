use taskchain::config::CONFIG;
use taskchain::errors::AppError;
use taskchain::{demo, telemetry};
use tracing::info;

fn main() -> Result<(), AppError> {
    let cfg = &*CONFIG;
    telemetry::init_tracing(&cfg.log_filter)?;
    info!(?cfg, "configuración cargada");

    let report = demo::run(cfg)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
