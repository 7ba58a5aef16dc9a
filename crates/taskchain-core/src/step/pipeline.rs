use std::marker::PhantomData;

use super::definition::{FnTask, Task};
use crate::engine::Composer;
use crate::errors::BoxError;

/// Typed chain builder that enforces at compile time that the next step's
/// input matches the previous step's output.
///
/// Usage:
///   let composer = Chain::start("parse", parse).then("double", double).build();
///   let f = composer.compose()?;
///
/// `R` is the output of the last step added; `build` yields a
/// `Composer<I, R>` whose composition cannot fail on adjacency.
pub struct Chain<I, R> {
    tasks: Vec<Box<dyn Task<I>>>,
    _out: PhantomData<fn() -> R>,
}

impl<I: 'static> Chain<I, I> {
    pub fn start<S, F>(name: impl Into<String>, f: F) -> Chain<I, S>
        where S: 'static,
              F: Fn(I) -> S + Send + Sync + 'static
    {
        Chain { tasks: vec![Box::new(FnTask::<I, I, S>::total(name, f))],
                _out: PhantomData }
    }

    pub fn start_fallible<S, E, F>(name: impl Into<String>, f: F) -> Chain<I, S>
        where S: 'static,
              F: Fn(I) -> Result<S, E> + Send + Sync + 'static,
              E: Into<BoxError>
    {
        Chain { tasks: vec![Box::new(FnTask::<I, I, S>::fallible(name, f))],
                _out: PhantomData }
    }
}

impl<I: 'static, R: 'static> Chain<I, R> {
    /// Append a total step taking the current output.
    pub fn then<S, F>(mut self, name: impl Into<String>, f: F) -> Chain<I, S>
        where S: 'static,
              F: Fn(R) -> S + Send + Sync + 'static
    {
        self.tasks.push(Box::new(FnTask::<I, R, S>::total(name, f)));
        Chain { tasks: self.tasks,
                _out: PhantomData }
    }

    pub fn then_fallible<S, E, F>(mut self, name: impl Into<String>, f: F) -> Chain<I, S>
        where S: 'static,
              F: Fn(R) -> Result<S, E> + Send + Sync + 'static,
              E: Into<BoxError>
    {
        self.tasks.push(Box::new(FnTask::<I, R, S>::fallible(name, f)));
        Chain { tasks: self.tasks,
                _out: PhantomData }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Build a `Composer` from the typed chain. Further steps may still be
    /// appended to it imperatively.
    pub fn build(self) -> Composer<I, R> {
        Composer::from_tasks(self.tasks)
    }
}
