//! Filesystem integration tests for the template assembler.

use std::{fs, path::Path};

use vestibule_assemble::{AssembleError, Variant, assemble};

const DEV_BASE: &str = "<html><script>{{config}}</script>\
    <script>{{interfaceConfig}}</script>\
    <script>{{loggingConfig}}</script></html>";

const PROD_BASE: &str = "<html><!-- prod --><script>{{config}}</script>\
    <script>{{interfaceConfig}}</script>\
    <script>{{loggingConfig}}</script></html>";

fn write_inputs(root: &Path) {
    fs::write(root.join("base.html"), DEV_BASE).unwrap();
    fs::write(root.join("base_prod.html"), PROD_BASE).unwrap();
    fs::write(root.join("config.js"), "var config = { hosts: {} };").unwrap();
    fs::write(root.join("interface_config.js"), "var interfaceConfig = { APP_NAME: 'Vestibule' };")
        .unwrap();
    fs::write(root.join("logging_config.js"), "var loggingConfig = {};").unwrap();
}

#[test]
fn production_variant_substitutes_all_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = assemble(dir.path(), Variant::Production).unwrap();
    let html = fs::read_to_string(&output).unwrap();

    // The production base document was selected.
    assert!(html.contains("<!-- prod -->"));

    // The literal configuration text is present.
    assert!(html.contains("var config = { hosts: {} };"));
    assert!(html.contains("APP_NAME: 'Vestibule'"));
    assert!(html.contains("var loggingConfig = {};"));

    // Zero remaining occurrences of the placeholder tokens.
    assert!(!html.contains("{{config}}"));
    assert!(!html.contains("{{interfaceConfig}}"));
    assert!(!html.contains("{{loggingConfig}}"));
}

#[test]
fn development_variant_uses_dev_base() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = assemble(dir.path(), Variant::Development).unwrap();
    let html = fs::read_to_string(&output).unwrap();

    assert!(!html.contains("<!-- prod -->"));
    assert!(!html.contains("{{"));
}

#[test]
fn missing_input_aborts_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::remove_file(dir.path().join("logging_config.js")).unwrap();

    let err = assemble(dir.path(), Variant::Development).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::Read { ref path, .. } if path.ends_with("logging_config.js")
    ));

    // No partial output file is produced on failure.
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn missing_base_reports_variant_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::remove_file(dir.path().join("base_prod.html")).unwrap();

    let err = assemble(dir.path(), Variant::Production).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::Read { ref path, .. } if path.ends_with("base_prod.html")
    ));
}
