use std::path::Path;

use anyhow::Result;
use clap::Parser;

use jobsift::annotate::Annotator;
use jobsift::cli::{Cli, Commands};
use jobsift::config::{self, JobsiftConfig};
use jobsift::core::{AnnotatedRecord, CleanedRecord};
use jobsift::{cleaning, io, report};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = config::load_config();

    match cli.command {
        Commands::Clean { input, output_dir } => {
            run_clean(&input, &output_dir)?;
        }
        Commands::Annotate {
            input,
            output_dir,
            no_sample,
        } => {
            let cleaned = io::read_cleaned_records(&input)?;
            log::info!("loaded {} cleaned records", cleaned.len());
            run_annotate(&cleaned, &output_dir, &config, no_sample)?;
        }
        Commands::Run {
            input,
            output_dir,
            no_sample,
        } => {
            let cleaned = run_clean(&input, &output_dir)?;
            run_annotate(&cleaned, &output_dir, &config, no_sample)?;
        }
    }

    Ok(())
}

fn run_clean(input: &Path, output_dir: &Path) -> Result<Vec<CleanedRecord>> {
    let raw = io::read_raw_records(input)?;
    log::info!("loaded {} raw records", raw.len());

    let cleaned = cleaning::clean_records(raw);
    io::write_stage_output(output_dir, "cleaned_jobs", &cleaned)?;

    report::print_cleaning_stats(&report::cleaning_stats(&cleaned));
    Ok(cleaned)
}

fn run_annotate(
    cleaned: &[CleanedRecord],
    output_dir: &Path,
    config: &JobsiftConfig,
    no_sample: bool,
) -> Result<Vec<AnnotatedRecord>> {
    let annotator = Annotator::new(config.taxonomy());
    let annotated = annotator.annotate_all(cleaned);
    io::write_stage_output(output_dir, "annotated_jobs", &annotated)?;

    if !no_sample {
        let samples = io::sample_annotations(&annotated, config.sample_size);
        io::write_json(&output_dir.join("sample_annotations.json"), &samples)?;
    }

    report::print_corpus_summary(&report::summarize(&annotated, config.top_skills));
    Ok(annotated)
}
