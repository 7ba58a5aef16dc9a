//! taskchain-core: composición de pipelines de steps tipados.
//!
//! Un `Composer<I, O>` acumula steps `R -> S` (totales o falibles) en orden
//! y los pliega en una única función `I -> O`, validando en la composición
//! que cada salida coincide con la entrada siguiente.
pub mod decorate;
pub mod definition;
pub mod engine;
pub mod errors;
pub mod hashing;
pub mod step;

pub use decorate::{wrap, StepFnRef};
pub use definition::{ChainDescription, StepDescription};
pub use engine::{with_err_fn, with_fn, with_task, Composed, Composer, ComposerOption, ErrorPolicy};
pub use errors::{BoxError, ComposeError, StepError};
pub use step::{Chain, FnTask, Prefix, Shape, StepFn, Task, TotalFn, TypeTag};
