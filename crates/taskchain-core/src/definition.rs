//! Descripción inmutable de un pipeline, para diagnóstico.
//!
//! `definition_hash` identifica la secuencia de steps (nombres, tipos,
//! falibilidad y orden) de forma determinista.

use serde::{Deserialize, Serialize};

use crate::hashing::hash_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescription {
    pub index: usize,
    pub name: String,
    pub input: String,
    pub output: String,
    pub fallible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescription {
    pub input: String,
    pub output: String,
    pub steps: Vec<StepDescription>,
}

impl ChainDescription {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn definition_hash(&self) -> String {
        // serde_json::to_value de structs con campos String/bool/usize no falla.
        match serde_json::to_value(self) {
            Ok(value) => hash_value(&value),
            Err(_) => String::new(),
        }
    }
}
