//! Configuración del frontend de flota en tiempo de compilación.
//!
//! `src/config.rs` lee con `option_env!` la base del backend Django
//! (API_BASE_URL), el logging en consola (ENABLE_LOGGING, LOG_LEVEL) y el
//! llenado de desarrollo del checklist (ENABLE_DEV_AUTOFILL, DEV_KM_VALUE).
//! Este script las toma de `.env`; una variable ya exportada gana.

use std::env;
use std::fs;
use std::path::Path;

const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "ENABLE_DEV_AUTOFILL",
    "DEV_KM_VALUE",
];

/// `CLAVE=valor` de una línea de `.env`; None para comentarios y vacías
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin .env: backend en el mismo origen, log nivel info, llenado de desarrollo activo");
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
