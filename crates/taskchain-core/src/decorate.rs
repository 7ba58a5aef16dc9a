//! Decoradores de steps (logging, timing, ...), fuera del compositor.
//!
//! Un decorador es cualquier función `StepFnRef<R, S> -> StepFnRef<R, S>`.

use std::sync::Arc;

pub type StepFnRef<R, S> = Arc<dyn Fn(R) -> S + Send + Sync>;

/// Aplica `wrapper` a `f`. El resultado puede registrarse como un step
/// normal; la lógica del decorador corre una vez por cada llamada.
pub fn wrap<R, S, W, F>(wrapper: W, f: F) -> impl Fn(R) -> S + Send + Sync + 'static
    where R: 'static,
          S: 'static,
          W: FnOnce(StepFnRef<R, S>) -> StepFnRef<R, S>,
          F: Fn(R) -> S + Send + Sync + 'static
{
    let decorated = wrapper(Arc::new(f));
    move |r: R| decorated(r)
}
