use std::env;
use std::fs;
use std::path::Path;

/// Claves de `.env` que llegan a `option_env!` en `src/config.rs`
const CONFIG_KEYS: [&str; 6] = [
    "LOGIN_PAGE",
    "HOME_PAGE",
    "LOGIN_DELAY_MS",
    "TOAST_DURATION_MS",
    "COUNTRY_CODE",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        // Se usan los valores por defecto compilados
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Ignoring malformed .env line: {line}");
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Unknown .env key {key}, ignoring");
            continue;
        }

        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
