use crate::CopyGuardError;
use crate::config::{ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

fn load_local(content: &str) -> crate::Result<crate::config::Config> {
    let fs = MockFileSystem::new().with_file("/project/.copy-guard.toml", content);
    FileConfigLoader::with_fs(fs).load()
}

#[test]
fn full_document_parses() {
    let config = load_local(
        r#"
[sizing]
max = 32
word_size = 4
max_align = 4

[scope]
roots = ["src", "vendor/x"]
fixtures_dir = "fixtures"
exclude = ["**/gen"]
"#,
    )
    .unwrap();

    assert_eq!(config.sizing.max, 32);
    assert_eq!(config.scope.roots.len(), 2);
    assert_eq!(config.scope.fixtures_dir, "fixtures");
}

#[test]
fn syntax_error_is_reported_as_toml_error() {
    let err = load_local("[sizing\nmax = 1").unwrap_err();
    assert!(matches!(err, CopyGuardError::TomlParse(_)));
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = load_local("[sizing]\nmax = \"big\"\n").unwrap_err();
    assert!(matches!(err, CopyGuardError::TomlParse(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let err = load_local("[sizing]\nmax_align = 3\n").unwrap_err();
    assert!(matches!(err, CopyGuardError::Config(_)));
}

#[test]
fn invalid_exclude_fails_validation() {
    let err = load_local("[scope]\nexclude = [\"a/[\"]\n").unwrap_err();
    assert!(matches!(err, CopyGuardError::InvalidPattern { .. }));
}
