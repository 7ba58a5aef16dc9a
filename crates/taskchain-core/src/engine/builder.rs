//! Builder de pipelines (`Composer`).
//!
//! Dos estilos de población, equivalentes y combinables:
//! - Imperativo: `add_fn` / `add_err_fn` / `add_task` sobre un `Composer`
//!   existente.
//! - Declarativo: opciones (`with_fn`, `with_err_fn`, `with_task`) aplicadas
//!   en orden al construir con `Composer::with_options`.
//!
//! El orden de inserción es el orden del pipeline. Los nombres son etiquetas
//! libres: se aceptan duplicados y nunca se reordena ni deduplica.
//!
//! ```ignore
//! let mut c = Composer::<i32, String>::with_options([with_fn("addOne", add_one)]);
//! c.add_fn("toString", |n: i32| n.to_string());
//! let f = c.compose()?;
//! assert_eq!(f.try_call(8)?, "9");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::compositor::{compose_tasks, Composed};
use super::finalize::ErrorPolicy;
use crate::definition::{ChainDescription, StepDescription};
use crate::errors::{BoxError, ComposeError};
use crate::step::{FnTask, Task, TotalFn, TypeTag};

/// Opción declarativa: se aplica sobre el `Composer` al construirlo.
pub type ComposerOption<I, O> = Box<dyn FnOnce(&mut Composer<I, O>)>;

/// Colección ordenada de tasks pendientes para un pipeline `I -> O`.
pub struct Composer<I, O> {
    tasks: Vec<Box<dyn Task<I>>>,
    _out: PhantomData<fn() -> O>,
}

impl<I: 'static, O: 'static> Default for Composer<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> fmt::Debug for Composer<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
         .field("input", &std::any::type_name::<I>())
         .field("output", &std::any::type_name::<O>())
         .field("steps", &self.tasks.iter().map(|t| t.name()).collect::<Vec<_>>())
         .finish()
    }
}

impl<I: 'static, O: 'static> Composer<I, O> {
    pub fn new() -> Self {
        Self { tasks: Vec::new(),
               _out: PhantomData }
    }

    /// Construye aplicando las opciones en el orden dado.
    pub fn with_options(options: impl IntoIterator<Item = ComposerOption<I, O>>) -> Self {
        let mut composer = Self::new();
        for option in options {
            option(&mut composer);
        }
        composer
    }

    pub(crate) fn from_tasks(tasks: Vec<Box<dyn Task<I>>>) -> Self {
        Self { tasks,
               _out: PhantomData }
    }

    pub fn apply(&mut self, option: ComposerOption<I, O>) -> &mut Self {
        option(self);
        self
    }

    /// Añade un step total `R -> S`. La adyacencia se valida al componer.
    pub fn add_fn<R, S, F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
        where R: 'static,
              S: 'static,
              F: Fn(R) -> S + Send + Sync + 'static
    {
        self.add_task(FnTask::<I, R, S>::total(name, f))
    }

    /// Añade un step falible `R -> Result<S, E>`.
    pub fn add_err_fn<R, S, E, F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
        where R: 'static,
              S: 'static,
              F: Fn(R) -> Result<S, E> + Send + Sync + 'static,
              E: Into<BoxError>
    {
        self.add_task(FnTask::<I, R, S>::fallible(name, f))
    }

    pub fn add_task<T: Task<I> + 'static>(&mut self, task: T) -> &mut Self {
        self.tasks.push(Box::new(task));
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// `true` si algún step es falible, es decir si `compose` producirá un
    /// `Composed::Fallible`.
    pub fn is_fallible(&self) -> bool {
        self.tasks.iter().any(|t| t.is_fallible())
    }

    pub fn describe(&self) -> ChainDescription {
        let steps = self.tasks
                        .iter()
                        .enumerate()
                        .map(|(index, t)| StepDescription { index,
                                                            name: t.name().to_string(),
                                                            input: t.input().name().to_string(),
                                                            output: t.output().name().to_string(),
                                                            fallible: t.is_fallible() })
                        .collect();
        ChainDescription { input: TypeTag::of::<I>().name().to_string(),
                           output: TypeTag::of::<O>().name().to_string(),
                           steps }
    }

    /// Compone los steps en una función `I -> O`. Puede llamarse varias
    /// veces; cada resultado es independiente del builder.
    pub fn compose(&self) -> Result<Composed<I, O>, ComposeError> {
        compose_tasks::<I, O>(&self.tasks)
    }

    /// Como `compose`, pero un error de composición aborta con panic.
    pub fn must_compose(&self) -> Composed<I, O> {
        match self.compose() {
            Ok(composed) => composed,
            Err(err) => panic!("failed to compose pipeline: {err}"),
        }
    }
}

impl<I: 'static, O: Default + 'static> Composer<I, O> {
    /// Compone y convierte a una función total según `policy`.
    pub fn compose_total(&self, policy: ErrorPolicy) -> Result<TotalFn<I, O>, ComposeError> {
        self.compose().map(|composed| composed.into_total(policy))
    }

    pub fn must_compose_total(&self, policy: ErrorPolicy) -> TotalFn<I, O> {
        self.must_compose().into_total(policy)
    }
}

pub fn with_fn<I, O, R, S, F>(name: impl Into<String>, f: F) -> ComposerOption<I, O>
    where I: 'static,
          O: 'static,
          R: 'static,
          S: 'static,
          F: Fn(R) -> S + Send + Sync + 'static
{
    let name = name.into();
    Box::new(move |c: &mut Composer<I, O>| {
        c.add_fn(name, f);
    })
}

pub fn with_err_fn<I, O, R, S, E, F>(name: impl Into<String>, f: F) -> ComposerOption<I, O>
    where I: 'static,
          O: 'static,
          R: 'static,
          S: 'static,
          F: Fn(R) -> Result<S, E> + Send + Sync + 'static,
          E: Into<BoxError>
{
    let name = name.into();
    Box::new(move |c: &mut Composer<I, O>| {
        c.add_err_fn(name, f);
    })
}

pub fn with_task<I, O, T>(task: T) -> ComposerOption<I, O>
    where I: 'static,
          O: 'static,
          T: Task<I> + 'static
{
    Box::new(move |c: &mut Composer<I, O>| {
        c.add_task(task);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(n: i32) -> i32 {
        n * 2
    }

    #[test]
    fn options_append_in_order() {
        let c = Composer::<i32, String>::with_options([with_fn("a", double), with_fn("b", double)]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.step_names(), vec!["a", "b"]);
    }

    #[test]
    fn options_and_appends_mix() {
        let mut c = Composer::<i32, String>::with_options([with_fn("double", double)]);
        c.add_fn("toString", |n: i32| n.to_string());
        assert_eq!(c.step_names(), vec!["double", "toString"]);
        assert_eq!(c.must_compose().try_call(4).unwrap(), "8");
    }

    #[test]
    fn duplicate_names_are_accepted() {
        let mut c = Composer::<i32, i32>::new();
        c.add_fn("double", double).add_fn("double", double);
        assert_eq!(c.len(), 2);
        assert_eq!(c.must_compose().try_call(3).unwrap(), 12);
    }

    #[test]
    fn fallibility_is_known_before_composing() {
        let mut c = Composer::<String, i32>::new();
        c.add_err_fn("parse", |s: String| s.parse::<i32>());
        assert!(c.is_fallible());
        assert!(c.compose().unwrap().is_fallible());
    }

    #[test]
    #[should_panic(expected = "failed to compose pipeline")]
    fn must_compose_panics_on_empty() {
        Composer::<i32, String>::new().must_compose();
    }
}
