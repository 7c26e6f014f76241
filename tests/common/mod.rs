//! Shared utilities for integration tests.

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use server_config::config::{FnLoader, LoadOutcome};

/// Location of the checked-in fixture, relative to the package root
/// (the working directory `cargo test` runs integration tests in).
pub const FIXTURE_LOCATION: &str = "./tests/fixtures/server.yaml";

pub const MINIMAL_YAML: &str = "server:\n  port: \"80\"\n";

/// Write `contents` to `dir/name`.
pub fn write_config(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A named loader that always returns `response` and counts its calls.
pub fn counting_loader(
    name: &str,
    response: Option<&'static str>,
) -> (FnLoader<impl Fn(&str) -> LoadOutcome>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let loader = FnLoader::named(name, move |_: &str| {
        counter.set(counter.get() + 1);
        Ok(response.map(|s| s.as_bytes().to_vec()))
    });
    (loader, calls)
}
