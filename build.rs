use std::env;
use std::fs;
use std::path::Path;

/// Variables que el dashboard lee con `option_env!` en tiempo de compilación
const DASHBOARD_VARS: &[&str] = &[
    "DASHBOARD_BACKEND_URL",
    "DASHBOARD_BACKEND_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "POLL_INTERVAL_MS",
    "NETWORK_TIMEOUT_SECONDS",
];

fn main() {
    for var in DASHBOARD_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, con comillas opcionales
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !DASHBOARD_VARS.contains(&key) {
                        continue;
                    }

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else if env::var("DASHBOARD_BACKEND_URL").is_err() {
        println!("cargo:warning=No .env file found and DASHBOARD_BACKEND_URL is not set. Data views will show a configuration error.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
