//! Common test utilities and setup

#![allow(dead_code)]

use inipp::IniDocument;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Route library logs to the test output; honours `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The animal hierarchy used across the integration tests
pub const ANIMALS: &str = "\
; Animal definitions
[_animal]
legs=4
alive=true
diet=Omnivore

[_feline:_animal]
diet=Carnivore
whiskers=24

[cat:_feline]
weight_in_kilograms=4.5
name=\"Tom Cat\"
tags=indoor,lazy,fluffy

[kitten:cat]
weight_in_kilograms=1.2

[spider:_animal]
legs=8
";

pub fn animals() -> IniDocument {
    init_tracing();
    IniDocument::parse(ANIMALS)
}

/// Temporary directory plus a file path inside it
pub fn temp_ini_path(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    (temp_dir, path)
}
