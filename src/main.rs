//! Resume matcher: score a resume against a job description

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, Strategy};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::llm::{ChatClient, LlmMatcher};
use resume_matcher::output::formatter::suggest_filename;
use resume_matcher::output::{save_report_to_file, MatchReport, ReportGenerator, ReportMetadata};
use resume_matcher::processing::{CategoryRegistry, KeywordMatcher, MatchResult, MatchStrategy};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Align {
            resume,
            job,
            strategy,
            output,
            save,
            detailed,
            api_key,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };
            let request = AlignRequest {
                resume,
                job,
                strategy,
                output_format,
                save,
                detailed: detailed || config.output.detailed,
                api_key,
            };
            run_align(request, &config).await.context("Analysis failed")?;
        }

        Commands::Categories { keywords } => {
            let registry = build_registry(&config)?;
            println!("📚 Skill Categories\n");
            for category in registry.categories() {
                if category.is_catch_all() {
                    println!("  • {} (not scored): tokens no other category claims", category.name());
                    continue;
                }
                println!(
                    "  • {} (weight {:.1}): {} keywords",
                    category.name(),
                    category.weight(),
                    category.keyword_count()
                );
                if keywords {
                    println!("    {}", category.keywords().collect::<Vec<_>>().join(", "));
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let rendered = toml::to_string_pretty(&config)
                    .context("Failed to render configuration")?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

struct AlignRequest {
    resume: PathBuf,
    job: PathBuf,
    strategy: Strategy,
    output_format: OutputFormat,
    save: Option<PathBuf>,
    detailed: bool,
    api_key: Option<String>,
}

async fn run_align(request: AlignRequest, config: &Config) -> Result<()> {
    info!("Starting resume match analysis");

    cli::validate_file_extension(&request.resume, cli::SUPPORTED_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(&request.job, cli::SUPPORTED_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;

    let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
    let resume_text = input_manager
        .extract_text(&request.resume)
        .await
        .map_err(ResumeMatcherError::into_analysis_failure)?;
    let job_text = input_manager
        .extract_text(&request.job)
        .await
        .map_err(ResumeMatcherError::into_analysis_failure)?;
    info!(
        "Extracted {} resume characters and {} job description characters",
        resume_text.len(),
        job_text.len()
    );

    if request.detailed {
        println!("\n📄 Resume Preview:\n{}", truncate_text(&resume_text, 300));
        println!("\n💼 Job Description Preview:\n{}", truncate_text(&job_text, 300));
    }

    let start = Instant::now();
    let report = match request.strategy {
        Strategy::Keyword => {
            let matcher = KeywordMatcher::with_registry(build_registry(config)?);
            debug!(
                "Scoring against {} categories with {} keywords",
                matcher.registry().categories().len(),
                matcher.registry().keyword_count()
            );
            let detailed = matcher.analyze_detailed(&resume_text, &job_text);
            let metadata = report_metadata(&request, matcher.name(), start);
            MatchReport::new(detailed.result, metadata).with_terms(detailed.resume_terms, detailed.job_terms)
        }
        Strategy::Llm => {
            let matcher = config
                .resolve_api_key(request.api_key.clone())
                .and_then(|api_key| ChatClient::new(config.llm.clone(), api_key))
                .map(LlmMatcher::new)
                .map_err(ResumeMatcherError::into_analysis_failure)?;
            let result = run_with_spinner(&matcher, &resume_text, &job_text)
                .await
                .map_err(ResumeMatcherError::into_analysis_failure)?;
            MatchReport::new(result, report_metadata(&request, matcher.name(), start))
        }
    };

    let generator = ReportGenerator::with_options(config.output.color_output, request.detailed);
    let content = generator.generate_report(&report, &request.output_format)?;

    match &request.save {
        Some(path) => {
            let path = if path.is_dir() {
                let resume_name = request.resume.to_string_lossy();
                path.join(suggest_filename(&request.output_format, &resume_name, true))
            } else {
                path.clone()
            };
            save_report_to_file(&content, &path)?;
            println!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn build_registry(config: &Config) -> Result<CategoryRegistry> {
    CategoryRegistry::builtin().with_additional_keywords(&config.scoring.extra_keywords)
}

fn report_metadata(request: &AlignRequest, strategy: &str, start: Instant) -> ReportMetadata {
    ReportMetadata::new(
        &request.resume.to_string_lossy(),
        &request.job.to_string_lossy(),
        strategy,
        start.elapsed().as_millis() as u64,
    )
}

async fn run_with_spinner<S: MatchStrategy>(strategy: &S, resume_text: &str, job_text: &str) -> Result<MatchResult> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Running {} analysis...", strategy.name()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = strategy.analyze(resume_text, job_text).await;
    spinner.finish_and_clear();
    result
}

/// Truncate text to a maximum number of characters on a word boundary
fn truncate_text(text: &str, max_length: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_length {
        return text.to_string();
    }

    let truncated = graphemes[..max_length].concat();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}
