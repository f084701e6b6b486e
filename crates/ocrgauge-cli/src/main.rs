//! Command-line interface for ocrgauge.
//!
//! Evaluates every requested PDF, printing the reconstructed OCR text, the
//! cleaned ground truth, and the per-file accuracy pair, then an average
//! across the files that succeeded. A failing file is reported on stderr and
//! excluded from the average; the exit status is non-zero when any file
//! failed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use ocrgauge::{EvaluationConfig, FileEvaluation, evaluate_file};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ocrgauge",
    version,
    about = "Measure OCR accuracy against the PDF text layer"
)]
struct Cli {
    /// PDF files to evaluate
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// TOML config file (default: ocrgauge.toml discovered in parent directories)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Minimum rounded word confidence, 0-100
    #[arg(long)]
    threshold: Option<f64>,

    /// Vertical tolerance band in pixels for same-line clustering
    #[arg(long)]
    band: Option<i64>,

    /// Tesseract language code
    #[arg(long)]
    language: Option<String>,

    /// Page rendering resolution in DPI
    #[arg(long)]
    dpi: Option<u32>,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Skip the reconstructed/ground-truth text dumps
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct FailureReport {
    path: PathBuf,
    error: String,
}

#[derive(Debug, Serialize)]
struct AverageReport {
    char_accuracy: f64,
    word_accuracy: f64,
    evaluated: usize,
    failed: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    files: Vec<FileEvaluation>,
    failures: Vec<FailureReport>,
    average: Option<AverageReport>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ocrgauge=info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(&cli)?;
    config.validate()?;

    let mut summary = Summary {
        files: Vec::new(),
        failures: Vec::new(),
        average: None,
    };

    for path in &cli.files {
        match evaluate_file(path, &config) {
            Ok(evaluation) => {
                if !cli.json {
                    print_evaluation(&evaluation, cli.quiet);
                }
                summary.files.push(evaluation);
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                summary.failures.push(FailureReport {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    summary.average = compute_average(&summary.files, summary.failures.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(average) = &summary.average {
        println!(
            "Average {:.2}, {:.2} ({}/{} files)",
            average.char_accuracy,
            average.word_accuracy,
            average.evaluated,
            average.evaluated + average.failed
        );
    }

    if summary.failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Load the base config (explicit file, discovered file, or defaults) and
/// apply command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<EvaluationConfig> {
    let mut config = match &cli.config {
        Some(path) => EvaluationConfig::from_toml_file(path)?,
        None => EvaluationConfig::discover()?.unwrap_or_default(),
    };

    if let Some(threshold) = cli.threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(band) = cli.band {
        config.line_band = band;
    }
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(dpi) = cli.dpi {
        config.dpi = dpi;
    }

    Ok(config)
}

fn print_evaluation(evaluation: &FileEvaluation, quiet: bool) {
    if !quiet {
        println!("{}", evaluation.recognized);
        println!("{}", evaluation.ground_truth);
    }
    println!(
        "{:.2}, {:.2}, {}",
        evaluation.report.char_accuracy,
        evaluation.report.word_accuracy,
        evaluation.path.display()
    );
}

/// Average accuracies over the files that evaluated successfully. Failed
/// files are counted but never pollute the averages.
fn compute_average(files: &[FileEvaluation], failed: usize) -> Option<AverageReport> {
    if files.is_empty() {
        return None;
    }

    let count = files.len() as f64;
    let char_accuracy = files.iter().map(|f| f.report.char_accuracy).sum::<f64>() / count;
    let word_accuracy = files.iter().map(|f| f.report.word_accuracy).sum::<f64>() / count;

    Some(AverageReport {
        char_accuracy,
        word_accuracy,
        evaluated: files.len(),
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ocrgauge::AccuracyReport;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_files_are_required() {
        assert!(Cli::try_parse_from(["ocrgauge"]).is_err());
        let cli = Cli::try_parse_from(["ocrgauge", "a.pdf", "b.pdf"]).unwrap();
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_resolve_config_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("ocrgauge.toml");
        std::fs::write(&config_path, "confidence_threshold = 70.0\nline_band = 25\n").unwrap();

        let cli = Cli::try_parse_from([
            "ocrgauge",
            "--config",
            config_path.to_str().unwrap(),
            "--band",
            "60",
            "doc.pdf",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.confidence_threshold, 70.0);
        assert_eq!(config.line_band, 60);
        assert_eq!(config.language, "lit");
    }

    fn evaluation(char_accuracy: f64, word_accuracy: f64) -> FileEvaluation {
        FileEvaluation {
            path: PathBuf::from("doc.pdf"),
            recognized: String::new(),
            ground_truth: String::new(),
            report: AccuracyReport {
                char_accuracy,
                word_accuracy,
            },
        }
    }

    #[test]
    fn test_average_ignores_failures() {
        let files = vec![evaluation(1.0, 1.0), evaluation(0.5, 0.0)];
        let average = compute_average(&files, 3).unwrap();
        assert!((average.char_accuracy - 0.75).abs() < 1e-12);
        assert!((average.word_accuracy - 0.5).abs() < 1e-12);
        assert_eq!(average.evaluated, 2);
        assert_eq!(average.failed, 3);
    }

    #[test]
    fn test_average_of_no_successes_is_none() {
        assert!(compute_average(&[], 2).is_none());
    }
}
