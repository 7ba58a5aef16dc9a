//! Pipelines del demo `taskchain-demo`.
//!
//! - numérico `i64 -> String`: `addOne` (con `log_value`), `double`, un step
//!   que siempre falla y `toString`; se reporta con la llamada estricta.
//! - texto `String -> String`: `Atoi`, `double` (con `log_value`), `Itoa`;
//!   finalizado como función total según la `ErrorPolicy` configurada.

use serde::Serialize;
use taskchain_core::{with_err_fn, with_fn, wrap, Composer};
use tracing::{info, warn};

use crate::config::DemoConfig;
use crate::decorators::log_value;
use crate::errors::AppError;

#[derive(Debug, thiserror::Error)]
#[error("an error occurred")]
pub struct DemoFailure;

fn add_one(n: i64) -> i64 {
    n + 1
}

fn double(n: i64) -> i64 {
    n * 2
}

fn to_string(n: i64) -> String {
    n.to_string()
}

fn always_fails(_n: i64) -> Result<i64, DemoFailure> {
    Err(DemoFailure)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub numeric_input: i64,
    pub numeric_output: String,
    pub numeric_error: Option<String>,
    pub numeric_definition_hash: String,
    pub text_input: String,
    pub text_output: String,
    pub text_definition_hash: String,
}

pub fn numeric_pipeline() -> Composer<i64, String> {
    let mut c = Composer::new();
    c.add_fn("addOne", wrap(log_value::<i64>, add_one))
     .add_fn("double", double)
     .add_err_fn("error", always_fails)
     .add_fn("toString", to_string);
    c
}

pub fn text_pipeline() -> Composer<String, String> {
    Composer::with_options([with_err_fn("Atoi", |s: String| s.trim().parse::<i64>()),
                            with_fn("double", wrap(log_value::<i64>, double)),
                            with_fn("Itoa", to_string)])
}

pub fn run(cfg: &DemoConfig) -> Result<DemoReport, AppError> {
    let numeric = numeric_pipeline();
    let f = numeric.compose()?;
    info!(steps = numeric.len(), shape = ?f.shape(), "numeric pipeline ready");
    let (numeric_output, numeric_error) = f.call(cfg.input);
    if let Some(err) = &numeric_error {
        warn!(error = %err, "numeric pipeline step failed");
    }

    let text = text_pipeline();
    let g = text.compose_total(cfg.error_policy())?;
    let text_output = g(cfg.text_input.clone());

    Ok(DemoReport { numeric_input: cfg.input,
                    numeric_output,
                    numeric_error: numeric_error.map(|e| e.to_string()),
                    numeric_definition_hash: numeric.describe().definition_hash(),
                    text_input: cfg.text_input.clone(),
                    text_output,
                    text_definition_hash: text.describe().definition_hash() })
}
