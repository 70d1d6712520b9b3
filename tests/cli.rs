use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

struct Sandbox {
    _temp_dir: tempfile::TempDir,
    output: PathBuf,
    cache: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("plots");
        let cache = temp_dir.path().join("cache.json");
        Self {
            _temp_dir: temp_dir,
            output,
            cache,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stylernizer").unwrap();
        cmd.env("STYLERNIZER_OUTPUT", &self.output)
            .env("STYLERNIZER_CACHE", &self.cache)
            .env_remove("STYLERNIZER_BASE_STYLE")
            .env_remove("STYLERNIZER_VIEWER")
            .env_remove("RUST_LOG");
        cmd
    }

    fn register_gallery(&self) {
        self.cmd()
            .args(["register", "stylernizer.gallery"])
            .assert()
            .success();
    }
}

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

#[test]
fn register_prints_tree_and_writes_cache() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["register", "stylernizer.gallery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plots Tree"))
        .stdout(predicate::str::contains("stylernizer.gallery.lines:sine"))
        .stdout(predicate::str::contains("stylernizer.gallery.bars:histogram_10_3"));

    let cache = std::fs::read_to_string(&sandbox.cache).unwrap();
    let json: serde_json::Value = serde_json::from_str(&cache).unwrap();
    assert_eq!(
        json["modules"],
        serde_json::json!(["stylernizer.gallery.lines", "stylernizer.gallery.bars"])
    );
    assert!(json["plots"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("stylernizer.gallery.lines:damped_4")));
    assert!(sandbox.output.is_dir());
}

#[test]
fn register_unknown_module_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["register", "no.such.module"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Could not import module no.such.module",
        ));
    assert!(!sandbox.cache.exists());
}

#[test]
fn list_reloads_cached_modules() {
    let sandbox = Sandbox::new();
    sandbox.register_gallery();

    sandbox
        .cmd()
        .args(["list", "stylernizer.gallery.bars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stylernizer.gallery.bars:ranking"))
        .stdout(predicate::str::contains("stylernizer.gallery.lines:sine").not());
}

#[test]
fn list_without_registrations() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plots registered."))
        .stdout(predicate::str::contains("Plots Tree").not());
}

#[test]
fn run_saves_matching_plots() {
    let sandbox = Sandbox::new();
    sandbox.register_gallery();

    sandbox
        .cmd()
        .args(["run", "stylernizer.gallery.lines:sine", "stylernizer.gallery.lines:damped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 4 plots"));

    assert_eq!(
        svg_files(&sandbox.output),
        vec![
            "stylernizer_gallery_lines_damped_1.svg",
            "stylernizer_gallery_lines_damped_2.svg",
            "stylernizer_gallery_lines_damped_4.svg",
            "stylernizer_gallery_lines_sine.svg",
        ]
    );
    let svg = std::fs::read_to_string(
        sandbox.output.join("stylernizer_gallery_lines_sine.svg"),
    )
    .unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<polyline"));
}

#[test]
fn run_without_save_writes_nothing() {
    let sandbox = Sandbox::new();
    sandbox.register_gallery();

    sandbox
        .cmd()
        .args(["run", "stylernizer.gallery.bars", "--save", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Made 3 plots"));
    assert!(svg_files(&sandbox.output).is_empty());
}

#[test]
fn run_unknown_prefix_lists_available_keys() {
    let sandbox = Sandbox::new();
    sandbox.register_gallery();

    sandbox
        .cmd()
        .args(["run", "no.such.prefix"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "No plot found in registry for no.such.prefix!",
        ))
        .stderr(predicate::str::contains("stylernizer.gallery.bars:ranking"));
}
