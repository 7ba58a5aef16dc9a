//! Configuración del demo.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`). Valores ausentes o no parseables usan los defaults.
use once_cell::sync::Lazy;
use std::env;

use dotenvy::dotenv;
use taskchain_core::ErrorPolicy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_INPUT: i64 = 8;
pub const DEFAULT_TEXT_INPUT: &str = "2";
pub const DEFAULT_LOG: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Entrada del pipeline `int -> string` (`TASKCHAIN_INPUT`).
    pub input: i64,
    /// Entrada del pipeline `string -> string` (`TASKCHAIN_TEXT_INPUT`).
    pub text_input: String,
    /// `TASKCHAIN_ESCALATE`: si es true un error de step aborta el demo.
    pub escalate_on_error: bool,
    /// Filtro de logs usado cuando `RUST_LOG` no está definido (`TASKCHAIN_LOG`).
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { input: DEFAULT_INPUT,
               text_input: DEFAULT_TEXT_INPUT.to_string(),
               escalate_on_error: false,
               log_filter: DEFAULT_LOG.to_string() }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración desde una fuente arbitraria de variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let input = lookup("TASKCHAIN_INPUT").and_then(|v| v.trim().parse().ok()).unwrap_or(defaults.input);
        let text_input = lookup("TASKCHAIN_TEXT_INPUT").unwrap_or(defaults.text_input);
        let escalate_on_error = lookup("TASKCHAIN_ESCALATE").and_then(|v| parse_bool(&v))
                                                            .unwrap_or(defaults.escalate_on_error);
        let log_filter = lookup("TASKCHAIN_LOG").filter(|v| !v.trim().is_empty()).unwrap_or(defaults.log_filter);
        Self { input,
               text_input,
               escalate_on_error,
               log_filter }
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy::from_escalate(self.escalate_on_error)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<DemoConfig> = Lazy::new(DemoConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(DemoConfig::from_lookup(|_| None), DemoConfig::default());
        assert_eq!(DemoConfig::default().error_policy(), ErrorPolicy::Discard);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = DemoConfig::from_lookup(lookup_from(&[("TASKCHAIN_INPUT", " 3 "),
                                                        ("TASKCHAIN_TEXT_INPUT", "21"),
                                                        ("TASKCHAIN_ESCALATE", "Yes"),
                                                        ("TASKCHAIN_LOG", "debug")]));
        assert_eq!(cfg.input, 3);
        assert_eq!(cfg.text_input, "21");
        assert!(cfg.escalate_on_error);
        assert_eq!(cfg.error_policy(), ErrorPolicy::Escalate);
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = DemoConfig::from_lookup(lookup_from(&[("TASKCHAIN_INPUT", "eight"),
                                                        ("TASKCHAIN_ESCALATE", "maybe"),
                                                        ("TASKCHAIN_LOG", "  ")]));
        assert_eq!(cfg.input, DEFAULT_INPUT);
        assert!(!cfg.escalate_on_error);
        assert_eq!(cfg.log_filter, DEFAULT_LOG);
    }
}
