//! Definiciones relacionadas a Steps.
//!
//! Un step es una función `R -> S` (total) o `R -> Result<S, E>` (falible)
//! registrada con un nombre. Este módulo define:
//! - `StepFn`: la función tipada y su encadenamiento (`then`).
//! - `Task` / `FnTask`: interfaz neutral con tipos borrados usada por el
//!   compositor, y su implementación basada en closures.
//! - `TypeTag`: testigo estructural de tipos para validar adyacencia.
//! - `Chain` para construir pipelines tipados que validan IO en compilación.

pub mod definition;
pub mod function;
pub mod pipeline;
mod type_tag;

pub use definition::{FnTask, Prefix, Task};
pub use function::{FallibleFn, Shape, StepFn, TotalFn};
pub use pipeline::Chain;
pub use type_tag::TypeTag;
