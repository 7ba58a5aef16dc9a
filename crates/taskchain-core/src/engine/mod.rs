//! Engine de composición.
//!
//! Provee el compositor (pliegue de tasks), el builder `Composer`, las
//! variantes de finalización y las entradas a nivel de handle.

pub mod builder;
pub mod compositor;
pub mod finalize;
pub mod handle;

pub use builder::{with_err_fn, with_fn, with_task, Composer, ComposerOption};
pub use compositor::Composed;
pub use finalize::ErrorPolicy;
