use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Config", "word_size must be greater than 0", None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ Config: word_size must be greater than 0\n");
}

#[test]
fn error_without_colors_with_suggestion() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "Scope",
        "no directory matched",
        Some("add a search root"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("✖ Scope: no directory matched\n"));
    assert!(result.contains("  help: add a search root\n"));
}

#[test]
fn error_with_colors_contains_ansi_codes() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "IO", "disk gone", Some("retry"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b[31m"));
    assert!(result.contains("\x1b[36mhelp:"));
}

#[test]
fn error_from_copy_guard_error_uses_category() {
    let err = CopyGuardError::Config("bad".to_string());
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, err.error_type(), &err.message(), err.suggestion());
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad\n");
}
