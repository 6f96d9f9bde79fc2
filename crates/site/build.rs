//! Fingerprints the stylesheet at build time.
//!
//! The short hash lands in `CSS_HASH` so templates can link an immutable
//! `/static/css/derived/main.<hash>.css` URL, and the hashed copy is
//! written alongside the source for `ServeDir` to pick up.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

const STYLESHEET: &str = "static/css/main.css";

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join(STYLESHEET);
    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(content) = fs::read(&css_path) else {
        // First build may run before the stylesheet exists
        println!("cargo:warning=missing {STYLESHEET}; stylesheet link will be unhashed");
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..8).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("create static/css/derived");
    fs::copy(&css_path, derived_dir.join(format!("main.{short}.css")))
        .expect("copy hashed stylesheet");
}
