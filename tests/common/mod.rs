#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the copy-guard binary, isolated from
/// the caller's `COPY_GUARD_PATH` and `RUST_LOG`.
#[macro_export]
macro_rules! copy_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("copy-guard"));
        cmd.env_remove("COPY_GUARD_PATH").env_remove("RUST_LOG");
        cmd
    }};
}

/// A unit with two wide types (`Foo` 24 bytes, `other` 32 bytes), one
/// narrow type and six callables declared out of source order.
pub const GOLDEN_MODEL: &str = r#"{
  "unit": "shapes",
  "types": [
    { "name": "Foo", "fields": [
      { "name": "a", "type": { "scalar": "int" } },
      { "name": "b", "type": { "scalar": "int" } },
      { "name": "c", "type": { "scalar": "int" } }
    ] },
    { "name": "other", "fields": [
      { "name": "a", "type": { "scalar": "int" } },
      { "name": "b", "type": { "scalar": "int" } },
      { "name": "c", "type": { "scalar": "int" } },
      { "name": "d", "type": { "scalar": "int" } }
    ] },
    { "name": "small", "fields": [
      { "name": "a", "type": { "scalar": "int" } },
      { "name": "b", "type": { "scalar": "int" } }
    ] }
  ],
  "callables": [
    { "name": "OnStruct2", "receiver": { "name": "o", "type": { "named": "other" } },
      "position": { "file": "shapes/inner.go", "line": 35, "column": 16 } },
    { "name": "CallsFoo", "params": [{ "name": "f", "type": { "named": "Foo" } }],
      "position": { "file": "shapes/inner.go", "line": 24, "column": 6 } },
    { "name": "OnPointer", "receiver": { "name": "f", "type": { "pointer": { "named": "Foo" } } },
      "position": { "file": "shapes/inner.go", "line": 20, "column": 16 } },
    { "name": "OnStruct", "receiver": { "name": "o", "type": { "named": "other" } },
      "position": { "file": "shapes/inner.go", "line": 32, "column": 16 } },
    { "name": "OnOtherToo", "receiver": { "name": "f", "type": { "named": "Foo" } },
      "params": [{ "name": "o", "type": { "named": "other" } }],
      "position": { "file": "shapes/inner.go", "line": 28, "column": 14 } },
    { "name": "CallsSmall", "params": [{ "name": "s", "type": { "named": "small" } }],
      "results": [{ "type": { "pointer": { "named": "Foo" } } }],
      "position": { "file": "shapes/inner.go", "line": 40, "column": 6 } }
  ]
}"#;

/// Compact report of [`GOLDEN_MODEL`] with default settings.
pub const GOLDEN_COMPACT: &str = "\
shapes/inner.go:24:6: parameter 'f' at index 0 should be made into a pointer (func CallsFoo(f Foo))
shapes/inner.go:28:14: receiver, and parameter 'o' at index 0 should be made into pointers (func (Foo).OnOtherToo(o other))
shapes/inner.go:32:16: receiver should be made into a pointer (func (other).OnStruct())
shapes/inner.go:35:16: receiver should be made into a pointer (func (other).OnStruct2())
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().display().to_string()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".copy-guard.toml", content);
    }

    /// Writes `<dir>/<unit>.model.json`.
    pub fn create_model(&self, dir: &str, unit: &str, content: &str) {
        self.create_file(&format!("{dir}/{unit}.model.json"), content);
    }

    /// Writes a unit with no callables, so it never produces diagnostics.
    pub fn create_clean_model(&self, dir: &str, unit: &str) {
        self.create_model(
            dir,
            unit,
            &format!(
                r#"{{"unit": "{unit}", "types": [{{"name": "T", "fields": [{{"name": "v", "type": {{"scalar": "int"}}}}]}}]}}"#
            ),
        );
    }

    pub fn create_golden_model(&self, dir: &str) {
        self.create_model(dir, "shapes", GOLDEN_MODEL);
    }
}
