//! Integration tests for the resume matcher

use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::input::InputManager;
use resume_matcher::output::{MatchReport, ReportGenerator, ReportMetadata};
use resume_matcher::processing::{CategoryRegistry, KeywordMatcher, MatchStrategy};
use resume_matcher::{extract, extract_and_score, ResumeMatcherError};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::TempDir;

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Kubernetes"));
    // Markdown formatting is stripped
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_fixture_match_score() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    // technical 3/4 of 2.0, soft 1/2 of 1.5, industry 1/1 of 1.0
    let result = extract_and_score(&resume, &job);
    assert_eq!(result.score, 72);
    assert_eq!(
        result.details,
        vec![
            "Technical skills matched: rust, kafka, kubernetes".to_string(),
            "Soft skills matched: mentoring".to_string(),
            "Industry skills matched: fintech".to_string(),
        ]
    );

    let technical = &result.categories[0];
    assert_eq!(technical.category, "technical");
    assert_eq!(technical.missing, vec!["terraform".to_string()]);

    // "team" is too short to count as "teamwork"
    let soft = &result.categories[1];
    assert_eq!(soft.missing, vec!["leadership".to_string()]);
}

#[tokio::test]
async fn test_markdown_and_text_resumes_score_alike() {
    let mut manager = InputManager::new();
    let job = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();
    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let md = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert_eq!(
        extract_and_score(&txt, &job).score,
        extract_and_score(&md, &job).score
    );
}

#[tokio::test]
async fn test_docx_job_description() {
    let temp_dir = TempDir::new().unwrap();
    let job_path = temp_dir.path().join("job.docx");
    std::fs::write(
        &job_path,
        docx_bytes(&["Backend Engineer", "Rust and Kafka", "Mentoring a small team"]),
    )
    .unwrap();

    let mut manager = InputManager::new();
    let job = manager.extract_text(&job_path).await.unwrap();
    assert!(job.contains("Rust and Kafka"));

    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(extract_and_score(&resume, &job).score, 100);
}

#[tokio::test]
async fn test_keyword_strategy_through_trait() {
    let matcher = KeywordMatcher::new();
    let result = matcher
        .analyze(
            "Experienced in Python and React with strong leadership skills",
            "Looking for python, react, and leadership",
        )
        .await
        .unwrap();

    assert_eq!(matcher.name(), "keyword");
    assert_eq!(result.score, 100);
}

#[test]
fn test_full_match_scenario() {
    let result = extract_and_score(
        "Experienced in Python and React with strong leadership skills",
        "Looking for python, react, and leadership",
    );
    assert_eq!(result.score, 100);
    assert_eq!(
        result.details,
        vec![
            "Technical skills matched: python, react".to_string(),
            "Soft skills matched: leadership".to_string(),
        ]
    );
}

#[test]
fn test_disjoint_vocabularies_score_floor() {
    let result = extract_and_score(
        "Enjoys cooking, gardening and knitting on weekends",
        "Seeking a Kafka developer with Terraform experience",
    );
    assert_eq!(result.score, 40);
    assert!(result.details.is_empty());
}

#[test]
fn test_typo_is_canonicalized() {
    let terms = extract("Five years of pyhton");
    assert!(terms.contains("technical", "python"));
    assert!(!terms.contains("other", "pyhton"));

    let result = extract_and_score("Five years of pyhton", "Python developer");
    assert_eq!(result.score, 100);
}

#[test]
fn test_keyword_prefixes_are_not_skills() {
    let result = extract_and_score("Senior JavaScript engineer", "Java engineer wanted");
    assert_eq!(result.score, 40);
    assert!(result.details.is_empty());

    assert!(extract("Designed scalable systems").get("technical").is_empty());
    assert!(extract("Maintains projects on github").get("technical").is_empty());
}

#[test]
fn test_empty_inputs() {
    assert!(extract("").is_empty());
    let result = extract_and_score("", "");
    assert_eq!(result.score, 40);
    assert!(result.details.is_empty());
}

#[test]
fn test_configured_keywords_extend_registry() {
    let mut extra = HashMap::new();
    extra.insert("technical".to_string(), vec!["Haskell".to_string()]);
    let registry = CategoryRegistry::builtin()
        .with_additional_keywords(&extra)
        .unwrap();

    let matcher = KeywordMatcher::with_registry(registry);
    let terms = matcher.extract("Haskell and Rust");
    assert!(terms.contains("technical", "haskell"));

    // The built-in registry is untouched
    assert!(extract("Haskell").contains("other", "haskell"));
}

#[test]
fn test_report_rendering_end_to_end() {
    let detailed = KeywordMatcher::new().analyze_detailed(
        "Rust engineer, mentoring juniors, fintech background",
        "Rust and Kafka, mentoring, fintech",
    );
    let metadata = ReportMetadata::new("cv.txt", "job.txt", "keyword", 3);
    let report = MatchReport::new(detailed.result, metadata)
        .with_terms(detailed.resume_terms, detailed.job_terms);

    let generator = ReportGenerator::with_options(false, true);
    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["result"]["score"], report.result.score);
    assert_eq!(parsed["metadata"]["strategy"], "keyword");

    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("kafka"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::load_from(&path).unwrap();
    assert!(path.exists());
    config.output.format = OutputFormat::Markdown;
    config
        .scoring
        .extra_keywords
        .insert("industry".to_string(), vec!["biotech".to_string()]);
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.output.format, OutputFormat::Markdown);
    assert_eq!(
        reloaded.scoring.extra_keywords.get("industry"),
        Some(&vec!["biotech".to_string()])
    );
}
