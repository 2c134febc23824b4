use pulse::handlers::*;
use pulse_core::config::default_targets;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use url::Url;

#[test]
fn test_parse_target_line_with_scheme() {
    let result = parse_target_line("https://example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_target_line_without_scheme() {
    let result = parse_target_line("example.com");
    assert_eq!(result, Some("http://example.com".to_string()));
}

#[test]
fn test_parse_target_line_invalid() {
    let result = parse_target_line("not a valid url!!!");
    assert_eq!(result, None);
}

#[test]
fn test_load_targets_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "# local services")?;
    writeln!(temp_file, "http://localhost:8080/api/health")?;
    writeln!(temp_file, "localhost:4000/api/health")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "https://api.example.com/health")?;

    let path = PathBuf::from(temp_file.path());
    let targets = load_targets_from_file(&path)?;

    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0], "http://localhost:8080/api/health");
    assert_eq!(targets[1], "http://localhost:4000/api/health");
    assert_eq!(targets[2], "https://api.example.com/health");

    Ok(())
}

#[test]
fn test_load_targets_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();
    writeln!(temp_file, "# only a comment").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_targets_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid target URLs"));
}

#[test]
fn test_load_targets_from_file_missing() {
    let path = PathBuf::from("/definitely/not/a/real/targets/file.txt");
    let result = load_targets_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read targets file"));
}

#[test]
fn test_load_targets_from_source_explicit_urls() {
    let urls = vec![
        Url::parse("https://example.com").unwrap(),
        Url::parse("http://localhost:9000/health").unwrap(),
    ];
    let result = load_targets_from_source(&urls, None).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0], "https://example.com/");
    assert_eq!(result[1], "http://localhost:9000/health");
}

#[test]
fn test_load_targets_from_source_falls_back_to_defaults() {
    let result = load_targets_from_source(&[], None).unwrap();

    assert_eq!(result, default_targets());
    assert_eq!(result.len(), 3);
}

#[test]
fn test_load_targets_from_source_file_wins_over_urls() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "http://localhost:1234/health")?;

    let urls = vec![Url::parse("https://example.com").unwrap()];
    let path = PathBuf::from(temp_file.path());
    let result = load_targets_from_source(&urls, Some(&path))?;

    assert_eq!(result, vec!["http://localhost:1234/health".to_string()]);

    Ok(())
}
