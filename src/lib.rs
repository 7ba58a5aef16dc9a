//! taskchain
//!
//! Este crate acompaña a `taskchain-core` con lo necesario para el binario
//! de demostración:
//! - `config`: configuración desde variables de entorno (.env).
//! - `telemetry`: subscriber de `tracing`.
//! - `decorators`: decoradores de ejemplo para steps.
//! - `demo`: los pipelines que ejecuta `taskchain-demo`.

pub mod config;
pub mod decorators;
pub mod demo;
pub mod errors;
pub mod telemetry;
