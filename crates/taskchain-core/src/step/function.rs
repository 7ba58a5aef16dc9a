//! Representación tipada de una función de step (o de un prefijo ya
//! compuesto): total `I -> O` o falible `I -> Result<O, StepError>`.
//!
//! La composición de dos `StepFn` implementa las cuatro reglas de
//! propagación de falibilidad; ver `StepFn::then`.

use std::fmt;
use std::sync::Arc;

use crate::errors::{BoxError, StepError};

pub type TotalFn<I, O> = Arc<dyn Fn(I) -> O + Send + Sync>;
pub type FallibleFn<I, O> = Arc<dyn Fn(I) -> Result<O, StepError> + Send + Sync>;

/// Forma de la función resultante, consultable sin invocarla.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Total,
    Fallible,
}

pub enum StepFn<I, O> {
    Total(TotalFn<I, O>),
    Fallible(FallibleFn<I, O>),
}

impl<I, O> Clone for StepFn<I, O> {
    fn clone(&self) -> Self {
        match self {
            StepFn::Total(f) => StepFn::Total(Arc::clone(f)),
            StepFn::Fallible(f) => StepFn::Fallible(Arc::clone(f)),
        }
    }
}

impl<I, O> fmt::Debug for StepFn<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFn")
         .field("shape", &self.shape())
         .field("input", &std::any::type_name::<I>())
         .field("output", &std::any::type_name::<O>())
         .finish()
    }
}

impl<I, O> StepFn<I, O> {
    pub fn shape(&self) -> Shape {
        match self {
            StepFn::Total(_) => Shape::Total,
            StepFn::Fallible(_) => Shape::Fallible,
        }
    }

    pub fn is_fallible(&self) -> bool {
        matches!(self, StepFn::Fallible(_))
    }

    pub fn try_call(&self, input: I) -> Result<O, StepError> {
        match self {
            StepFn::Total(f) => Ok(f(input)),
            StepFn::Fallible(f) => f(input),
        }
    }
}

impl<I: 'static, O: 'static> StepFn<I, O> {
    pub fn total<F>(f: F) -> Self
        where F: Fn(I) -> O + Send + Sync + 'static
    {
        StepFn::Total(Arc::new(f))
    }

    /// Envuelve una función falible; su error se conserva tal cual dentro de
    /// un `StepError` etiquetado con `name`.
    pub fn fallible<E, F>(name: impl Into<String>, f: F) -> Self
        where F: Fn(I) -> Result<O, E> + Send + Sync + 'static,
              E: Into<BoxError>
    {
        let name: Arc<str> = Arc::from(name.into());
        StepFn::Fallible(Arc::new(move |input| f(input).map_err(|e| StepError::new(name.as_ref(), e))))
    }

    /// Encadena `next` detrás de `self`.
    ///
    /// - total ∘ total → total
    /// - total tras falible → falible; el error del prefijo corta y `next` no se invoca
    /// - falible tras total → falible
    /// - falible tras falible → falible; error del prefijo corta, el de `next`
    ///   se devuelve sin cambios
    pub fn then<S: 'static>(self, next: StepFn<O, S>) -> StepFn<I, S> {
        match (self, next) {
            (StepFn::Total(prev), StepFn::Total(f)) => StepFn::Total(Arc::new(move |input| f(prev(input)))),
            (StepFn::Fallible(prev), StepFn::Total(f)) => {
                StepFn::Fallible(Arc::new(move |input| prev(input).map(|r| f(r))))
            }
            (StepFn::Total(prev), StepFn::Fallible(f)) => StepFn::Fallible(Arc::new(move |input| f(prev(input)))),
            (StepFn::Fallible(prev), StepFn::Fallible(f)) => {
                StepFn::Fallible(Arc::new(move |input| prev(input).and_then(|r| f(r))))
            }
        }
    }
}

impl<I, O: Default> StepFn<I, O> {
    /// Llamada estricta: `(resultado, error)`. Ante un fallo el resultado es
    /// `O::default()`.
    pub fn call(&self, input: I) -> (O, Option<StepError>) {
        match self.try_call(input) {
            Ok(out) => (out, None),
            Err(err) => (O::default(), Some(err)),
        }
    }
}
