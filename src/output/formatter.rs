//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::MatchReport;
use crate::processing::categories::OTHER_CATEGORY;
use crate::processing::match_scorer::CategoryScore;
use crate::processing::term_extractor::TermSet;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("GOOD", Color::Yellow),
            50..=59 => ("PARTIAL", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_category(&self, category: &CategoryScore) -> String {
        let coverage = match category.coverage() {
            Some(coverage) => format!("{:.0}%", coverage * 100.0),
            None => "n/a".to_string(),
        };
        let mut line = format!(
            "  • {} (weight {:.1}): {} of {} job terms, coverage {}\n",
            category.category,
            category.weight,
            category.matched.len(),
            category.job_term_count(),
            coverage
        );
        if !category.missing.is_empty() {
            let missing = format!("    Missing: {}\n", category.missing.join(", "));
            line.push_str(&self.colorize(&missing, Color::Yellow));
        }
        line
    }

    fn format_terms(&self, label: &str, terms: &TermSet) -> String {
        let mut output = format!("  {}:\n", label);
        for entry in terms.iter().filter(|e| e.category != OTHER_CATEGORY) {
            if !entry.terms.is_empty() {
                output.push_str(&format!("    {}: {}\n", entry.category, entry.terms.join(", ")));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH", 1));
        output.push_str(&format!(
            "Generated: {} | Strategy: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.strategy,
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "Score: {}% {}\n",
            report.result.score,
            self.format_score_badge(report.result.score)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));

        output.push_str(&self.format_header("Match Details", 2));
        if report.result.details.is_empty() {
            output.push_str(&self.colorize("  No matching skills found\n", Color::BrightBlack));
        }
        for detail in &report.result.details {
            output.push_str(&format!("  • {}\n", self.colorize(detail, Color::Green)));
        }

        if self.detailed {
            if !report.result.categories.is_empty() {
                output.push_str(&self.format_header("Category Breakdown", 3));
                for category in &report.result.categories {
                    output.push_str(&self.format_category(category));
                }
            }

            if let (Some(resume_terms), Some(job_terms)) = (&report.resume_terms, &report.job_terms) {
                output.push_str(&self.format_header("Extracted Terms", 3));
                output.push_str(&self.format_terms("Resume", resume_terms));
                output.push_str(&self.format_terms("Job description", job_terms));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Matcher v{} | Resume: {} | Job: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version,
            report.metadata.resume_file,
            report.metadata.job_file
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut md = String::new();
        let result = &report.result;

        md.push_str("# Resume Match Report\n\n");
        md.push_str(&format!("**Score:** {}% ({})\n\n", result.score, report.verdict()));
        md.push_str("## Match Details\n\n");

        if result.details.is_empty() {
            md.push_str("_No matching skills found._\n");
        }
        for detail in &result.details {
            md.push_str(&format!("- {}\n", detail));
        }

        if !result.categories.is_empty() {
            md.push_str("\n## Category Breakdown\n\n");
            md.push_str("| Category | Weight | Matched | Missing |\n");
            md.push_str("|----------|--------|---------|---------|\n");
            for category in &result.categories {
                md.push_str(&format!(
                    "| {} | {:.1} | {} | {} |\n",
                    category.category,
                    category.weight,
                    display_terms(&category.matched),
                    display_terms(&category.missing)
                ));
            }
        }

        if self.include_metadata {
            md.push_str("\n---\n\n");
            md.push_str(&format!(
                "_Generated {} by Resume Matcher v{} using the {} strategy._  \n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.matcher_version,
                report.metadata.strategy
            ));
            md.push_str(&format!(
                "_Resume: `{}` | Job: `{}`_\n",
                report.metadata.resume_file, report.metadata.job_file
            ));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn display_terms(terms: &[String]) -> String {
    if terms.is_empty() {
        "-".to_string()
    } else {
        terms.join(", ")
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        let formatter = self
            .formatters()
            .into_iter()
            .find(|f| f.supports_format() == *format)
            .ok_or_else(|| {
                ResumeMatcherError::OutputFormatting(format!("No formatter for {:?} output", format))
            })?;
        formatter.format_report(report)
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 3] {
        [&self.console_formatter, &self.json_formatter, &self.markdown_formatter]
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}
