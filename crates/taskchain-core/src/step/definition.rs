//! Interfaz neutral de un step (`Task`) usada por el compositor.
//!
//! Cada `Task<I>` oculta sus tipos concretos `R -> S` detrás de `TypeTag`s y
//! sabe plegarse sobre el prefijo ya compuesto (`Prefix`), que internamente
//! guarda un `StepFn<I, R>` borrado como `Box<dyn Any>`.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::function::StepFn;
use super::type_tag::TypeTag;
use crate::errors::{BoxError, ComposeError};

/// Prefijo compuesto: todo lo anterior al step que se está plegando.
pub struct Prefix {
    stage: Box<dyn Any>,
    output: TypeTag,
    fallible: bool,
    len: usize,
}

impl Prefix {
    /// `len` es la cantidad de steps que cubre el prefijo.
    pub fn new<I: 'static, S: 'static>(stage: StepFn<I, S>, len: usize) -> Self {
        Self { fallible: stage.is_fallible(),
               stage: Box::new(stage),
               output: TypeTag::of::<S>(),
               len }
    }

    pub fn output(&self) -> TypeTag {
        self.output
    }

    pub fn is_fallible(&self) -> bool {
        self.fallible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Recupera la función tipada. Devuelve el prefijo intacto si los tipos
    /// no coinciden.
    pub fn downcast<I: 'static, R: 'static>(self) -> Result<StepFn<I, R>, Prefix> {
        let Prefix { stage, output, fallible, len } = self;
        match stage.downcast::<StepFn<I, R>>() {
            Ok(stage) => Ok(*stage),
            Err(stage) => Err(Prefix { stage, output, fallible, len }),
        }
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefix")
         .field("output", &self.output)
         .field("fallible", &self.fallible)
         .field("len", &self.len)
         .finish()
    }
}

/// Un step del pipeline con los tipos concretos borrados.
///
/// `I` es el input global del pipeline: todas las tasks de un mismo
/// `Composer<I, _>` comparten ese parámetro.
pub trait Task<I>: Send + Sync {
    /// Etiqueta libre, sólo para diagnóstico.
    fn name(&self) -> &str;

    fn input(&self) -> TypeTag;

    fn output(&self) -> TypeTag;

    fn is_fallible(&self) -> bool;

    /// Esta task como prefijo de un solo step (primer elemento del pliegue).
    fn seed(&self) -> Prefix;

    /// Pliega esta task sobre `prefix`, cuyo output debe ser exactamente el
    /// input de la task.
    fn fold(&self, prefix: Prefix) -> Result<Prefix, ComposeError>;
}

/// `Task` respaldada por una función `R -> S` (total o falible).
pub struct FnTask<I, R, S> {
    name: String,
    func: StepFn<R, S>,
    _input: PhantomData<fn(I)>,
}

impl<I, R: 'static, S: 'static> FnTask<I, R, S> {
    pub fn total<F>(name: impl Into<String>, f: F) -> Self
        where F: Fn(R) -> S + Send + Sync + 'static
    {
        Self { name: name.into(),
               func: StepFn::total(f),
               _input: PhantomData }
    }

    pub fn fallible<E, F>(name: impl Into<String>, f: F) -> Self
        where F: Fn(R) -> Result<S, E> + Send + Sync + 'static,
              E: Into<BoxError>
    {
        let name = name.into();
        Self { func: StepFn::fallible(name.clone(), f),
               name,
               _input: PhantomData }
    }
}

impl<I: 'static, R: 'static, S: 'static> Task<I> for FnTask<I, R, S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn input(&self) -> TypeTag {
        TypeTag::of::<R>()
    }

    fn output(&self) -> TypeTag {
        TypeTag::of::<S>()
    }

    fn is_fallible(&self) -> bool {
        self.func.is_fallible()
    }

    fn seed(&self) -> Prefix {
        Prefix::new(self.func.clone(), 1)
    }

    fn fold(&self, prefix: Prefix) -> Result<Prefix, ComposeError> {
        let index = prefix.len();
        let found = prefix.output();
        let mismatch = || ComposeError::TypeMismatch { step: self.name.clone(),
                                                       index,
                                                       expected: self.input().name(),
                                                       found: found.name() };
        if found != self.input() {
            return Err(mismatch());
        }
        let prev = prefix.downcast::<I, R>().map_err(|_| mismatch())?;
        Ok(Prefix::new(prev.then(self.func.clone()), index + 1))
    }
}
