//! Finalización: convierte un `Composed` falible en una función total.

use std::sync::Arc;

use tracing::debug;

use super::compositor::Composed;
use crate::step::{StepFn, TotalFn};

/// Qué hacer con un error de step al convertir a función total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Descarta el error y devuelve `O::default()`.
    #[default]
    Discard,
    /// Panic en el momento en que un step falla.
    Escalate,
}

impl ErrorPolicy {
    pub fn from_escalate(escalate: bool) -> Self {
        if escalate {
            ErrorPolicy::Escalate
        } else {
            ErrorPolicy::Discard
        }
    }
}

impl<I: 'static, O: Default + 'static> Composed<I, O> {
    /// Sin steps falibles es la identidad: se devuelve la función interna
    /// sin envoltorio.
    pub fn into_total(self, policy: ErrorPolicy) -> TotalFn<I, O> {
        let f = match self {
            StepFn::Total(f) => return f,
            StepFn::Fallible(f) => f,
        };
        let total: TotalFn<I, O> = match policy {
            ErrorPolicy::Discard => Arc::new(move |input: I| match f(input) {
                Ok(out) => out,
                Err(err) => {
                    debug!(step = err.step(), error = %err, "step error discarded");
                    O::default()
                }
            }),
            ErrorPolicy::Escalate => Arc::new(move |input: I| match f(input) {
                Ok(out) => out,
                Err(err) => panic!("pipeline step failed: {err}"),
            }),
        };
        total
    }
}
