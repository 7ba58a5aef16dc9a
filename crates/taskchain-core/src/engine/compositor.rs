//! Compositor: pliega la secuencia de tasks en una única función `I -> O`.
//!
//! Recorrido único, izquierda a derecha, fail-fast: el primer pliegue que
//! falla aborta la composición sin resultado parcial.

use tracing::{debug, warn};

use crate::errors::ComposeError;
use crate::step::{StepFn, Task, TypeTag};

/// Función compuesta de extremo a extremo. Misma representación que un
/// step: `Total(I -> O)` o `Fallible(I -> Result<O, StepError>)`.
pub type Composed<I, O> = StepFn<I, O>;

pub(crate) fn compose_tasks<I: 'static, O: 'static>(tasks: &[Box<dyn Task<I>>]) -> Result<Composed<I, O>, ComposeError> {
    let result = fold_tasks::<I, O>(tasks);
    match &result {
        Ok(composed) => debug!(steps = tasks.len(), shape = ?composed.shape(), "pipeline composed"),
        Err(err) => warn!(error = %err, steps = tasks.len(), "pipeline composition failed"),
    }
    result
}

fn fold_tasks<I: 'static, O: 'static>(tasks: &[Box<dyn Task<I>>]) -> Result<Composed<I, O>, ComposeError> {
    let input = TypeTag::of::<I>();
    let output = TypeTag::of::<O>();

    let (first, rest) = tasks.split_first().ok_or(ComposeError::EmptyChain)?;
    if first.input() != input {
        return Err(ComposeError::InputMismatch { step: first.name().to_string(),
                                                 expected: input.name(),
                                                 found: first.input().name() });
    }

    let mut acc = first.seed();
    for task in rest {
        acc = task.fold(acc)?;
        debug!(step = task.name(), index = acc.len() - 1, fallible = acc.is_fallible(), "step folded");
    }

    let last = acc.len() - 1;
    let found = acc.output();
    let mismatch = || ComposeError::TypeMismatch { step: tasks[last].name().to_string(),
                                                   index: last,
                                                   expected: output.name(),
                                                   found: found.name() };
    if found != output {
        return Err(mismatch());
    }
    acc.downcast::<I, O>().map_err(|_| mismatch())
}
