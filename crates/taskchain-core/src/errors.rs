//! Errores del core.
//!
//! Dos familias separadas:
//! - `ComposeError`: errores detectados al componer (nunca durante la
//!   invocación).
//! - `StepError`: error devuelto por un step falible en tiempo de llamada; el
//!   engine sólo lo reenvía, nunca lo genera.

use std::error::Error as StdError;

use thiserror::Error;

/// Error boxed tal como lo devuelve la función del caller.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ComposeError {
    #[error("invalid argument: composer handle is absent")]
    InvalidArgument,
    #[error("empty composer: no steps to compose")]
    EmptyChain,
    #[error("invalid composer: first step '{step}' expects {found}, pipeline input is {expected}")]
    InputMismatch { step: String, expected: &'static str, found: &'static str },
    #[error("type mismatch at step {index} '{step}': expected {expected}, found {found}")]
    TypeMismatch { step: String, index: usize, expected: &'static str, found: &'static str },
}

impl ComposeError {
    /// Sin steps o con un input global que no coincide.
    pub fn is_empty_or_invalid(&self) -> bool {
        matches!(self, ComposeError::EmptyChain | ComposeError::InputMismatch { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ComposeError::TypeMismatch { .. })
    }
}

/// Fallo de un step falible durante la invocación del pipeline compuesto.
///
/// El error original del caller se conserva intacto como `source()`; el
/// nombre del step sólo sirve para diagnóstico.
#[derive(Debug, Error)]
#[error("step '{step}' failed: {source}")]
pub struct StepError {
    step: String,
    #[source]
    source: BoxError,
}

impl StepError {
    pub fn new(step: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self { step: step.into(),
               source: source.into() }
    }

    /// Nombre del step que falló.
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Acceso tipado al error original devuelto por el step.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> BoxError {
        self.source
    }
}
