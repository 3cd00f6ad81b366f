use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jobsift",
    about = "Clean, deduplicate and annotate scraped job-market records",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize, validate and deduplicate raw records
    Clean {
        /// Raw records (JSON array)
        #[arg(short, long, default_value = "data/raw_jobs.json")]
        input: PathBuf,

        /// Directory for cleaned_jobs.json / cleaned_jobs.csv
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,
    },

    /// Annotate cleaned records and rank them by relevance
    Annotate {
        /// Cleaned records (JSON array)
        #[arg(short, long, default_value = "data/cleaned_jobs.json")]
        input: PathBuf,

        /// Directory for annotated_jobs.json / annotated_jobs.csv
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,

        /// Skip the sample_annotations.json review export
        #[arg(long)]
        no_sample: bool,
    },

    /// Run the full clean + annotate pipeline
    Run {
        /// Raw records (JSON array)
        #[arg(short, long, default_value = "data/raw_jobs.json")]
        input: PathBuf,

        /// Directory for all stage outputs
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,

        /// Skip the sample_annotations.json review export
        #[arg(long)]
        no_sample: bool,
    },
}
