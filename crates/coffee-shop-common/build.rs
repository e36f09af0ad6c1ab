//! Bakes deployment overrides into `auth_constants`.
//!
//! Values come from the build environment first, then from a `.env` file in
//! the crate or workspace root.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

const BAKED_KEYS: &[&str] = &[
    "COFFEE_SHOP_API_SERVER_URL",
    "COFFEE_SHOP_AUTH0__URL",
    "COFFEE_SHOP_AUTH0__AUDIENCE",
    "COFFEE_SHOP_AUTH0__CLIENT_ID",
    "COFFEE_SHOP_AUTH0__CALLBACK_URL",
];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let candidates = [
        manifest_dir.join(".env"),
        manifest_dir.join("..").join("..").join(".env"),
    ];

    let mut dotenv_values = HashMap::new();
    for path in &candidates {
        println!("cargo:rerun-if-changed={}", path.display());
        let Ok(iter) = dotenvy::from_path_iter(path) else {
            continue;
        };
        for (key, value) in iter.flatten() {
            dotenv_values.entry(key).or_insert(value);
        }
    }

    for key in BAKED_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        let value = env::var(key)
            .ok()
            .or_else(|| dotenv_values.get(*key).cloned());
        if let Some(value) = value {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
