//! Decoradores de ejemplo para steps.

use std::fmt::Debug;
use std::sync::Arc;

use taskchain_core::StepFnRef;
use tracing::info;

/// Registra el valor antes y después de cada llamada al step envuelto.
///
/// Uso: `composer.add_fn("double", wrap(log_value::<i64>, double))`.
pub fn log_value<T: Debug + 'static>(inner: StepFnRef<T, T>) -> StepFnRef<T, T> {
    Arc::new(move |value: T| {
        info!(value = ?value, "value before");
        let out = inner(value);
        info!(value = ?out, "value after");
        out
    })
}
