//! Integration tests for configuration loading
//!
//! YAML files on disk flowing into the analyzer and highlighter.

use complexity_core::config::{ConfigError, EstimatorConfig, Preset, Validatable};
use complexity_core::{CostAnalyzer, EstimatorError, Highlighter};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_yaml_file_drives_analyzer_and_highlighter() {
    let file = write_temp(
        r#"
version: 1
preset: batch
overrides:
  cache:
    enabled: true
    capacity: 2
  highlight:
    class_prefix: "cl-"
"#,
    );

    let config = EstimatorConfig::from_yaml(file.path()).unwrap();
    assert_eq!(config.cache.capacity, 2);

    let analyzer = CostAnalyzer::new(&config);
    for code in ["a = 1", "b = 2", "c = 3", "a = 1"] {
        analyzer.analyze(code);
    }
    let stats = analyzer.cache_stats().unwrap();
    assert_eq!(stats.entries, 2);
    // "a = 1" was evicted before it came back
    assert_eq!(stats.hits, 0);

    let html = Highlighter::from_config(&config.highlight).render("pass");
    assert_eq!(html, "<span class=\"cl-keyword\">pass</span>");
}

#[test]
fn test_export_then_load() {
    let config = EstimatorConfig::preset(Preset::Minimal).highlight(|h| h.class_prefix("x_"));
    let file = write_temp(&config.to_yaml().unwrap());
    assert_eq!(EstimatorConfig::from_yaml(file.path()).unwrap(), config);
}

#[test]
fn test_invalid_file_is_config_error() {
    let file = write_temp("version: 1\npreset: turbo\n");
    let err: EstimatorError = EstimatorConfig::from_yaml(file.path()).unwrap_err().into();
    assert!(matches!(
        err,
        EstimatorError::Config(ConfigError::UnknownPreset(ref name)) if name == "turbo"
    ));
}

#[test]
fn test_presets_validate() {
    for preset in [Preset::Interactive, Preset::Batch, Preset::Minimal] {
        assert!(EstimatorConfig::preset(preset).validate().is_ok(), "{preset}");
    }
}
