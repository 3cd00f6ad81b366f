//! Read-only reductions over stage outputs: distributions, averages and
//! top-k skills for the annotated corpus, plus basic shape statistics for
//! the cleaned corpus. Nothing here produces or mutates records.

use std::collections::{BTreeMap, HashMap, HashSet};

use colored::*;
use serde::Serialize;

use crate::core::{AnnotatedRecord, CleanedRecord};

/// Shape statistics over the cleaned sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningStats {
    pub total_entries: usize,
    pub sources: BTreeMap<String, usize>,
    pub job_types: BTreeMap<String, usize>,
    pub unique_companies: usize,
    pub avg_description_length: f64,
}

/// Aggregate statistics over the annotated sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub total_entries: usize,
    pub experience_levels: BTreeMap<String, usize>,
    pub content_types: BTreeMap<String, usize>,
    pub top_skills: Vec<SkillCount>,
    pub avg_relevance_score: f64,
    pub remote_work_percentage: f64,
    pub company_sizes: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

pub fn cleaning_stats(records: &[CleanedRecord]) -> CleaningStats {
    let mut sources = BTreeMap::new();
    let mut job_types = BTreeMap::new();
    let mut companies = HashSet::new();
    let mut total_description_chars = 0usize;

    for record in records {
        *sources.entry(record.source.clone()).or_insert(0) += 1;
        *job_types.entry(record.kind.clone()).or_insert(0) += 1;
        companies.insert(record.company.as_str());
        total_description_chars += record.description.chars().count();
    }

    CleaningStats {
        total_entries: records.len(),
        sources,
        job_types,
        unique_companies: companies.len(),
        avg_description_length: mean(total_description_chars as f64, records.len()),
    }
}

/// Compute the corpus summary. `top_skills_limit` bounds the ranked skill
/// list; ties keep first-seen order (stable frequency ranking).
pub fn summarize(records: &[AnnotatedRecord], top_skills_limit: usize) -> CorpusSummary {
    let mut experience_levels = BTreeMap::new();
    let mut content_types = BTreeMap::new();
    let mut company_sizes = BTreeMap::new();
    let mut total_relevance = 0.0;
    let mut remote_count = 0usize;

    let mut skill_counts: HashMap<&str, usize> = HashMap::new();
    let mut skill_order: Vec<&str> = Vec::new();

    for record in records {
        let a = &record.annotations;
        *experience_levels
            .entry(a.experience_level.as_str().to_string())
            .or_insert(0) += 1;
        *content_types
            .entry(a.content_type.as_str().to_string())
            .or_insert(0) += 1;
        *company_sizes
            .entry(a.company_size.as_str().to_string())
            .or_insert(0) += 1;

        for skill in &a.skill_tags {
            if !skill_counts.contains_key(skill.as_str()) {
                skill_order.push(skill.as_str());
            }
            *skill_counts.entry(skill.as_str()).or_insert(0) += 1;
        }

        total_relevance += a.relevance_score;
        if a.remote_work {
            remote_count += 1;
        }
    }

    let mut top_skills: Vec<SkillCount> = skill_order
        .iter()
        .map(|skill| SkillCount {
            skill: skill.to_string(),
            count: skill_counts[skill],
        })
        .collect();
    // Stable sort: equal counts keep first-seen order.
    top_skills.sort_by(|a, b| b.count.cmp(&a.count));
    top_skills.truncate(top_skills_limit);

    CorpusSummary {
        total_entries: records.len(),
        experience_levels,
        content_types,
        top_skills,
        avg_relevance_score: mean(total_relevance, records.len()),
        remote_work_percentage: mean(remote_count as f64 * 100.0, records.len()),
        company_sizes,
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

pub fn print_cleaning_stats(stats: &CleaningStats) {
    println!("{}", "Cleaning".bold().blue());
    println!("  Entries kept: {}", stats.total_entries);
    println!("  Unique companies: {}", stats.unique_companies);
    println!(
        "  Average description length: {:.1} chars",
        stats.avg_description_length
    );
    print_distribution("Sources", &stats.sources);
    println!();
}

pub fn print_corpus_summary(summary: &CorpusSummary) {
    println!("{}", "Annotation".bold().blue());
    println!("  Entries: {}", summary.total_entries);
    println!(
        "  Average relevance score: {}",
        format!("{:.2}", summary.avg_relevance_score).green()
    );
    println!(
        "  Remote-friendly: {:.1}%",
        summary.remote_work_percentage
    );
    print_distribution("Experience levels", &summary.experience_levels);
    print_distribution("Content types", &summary.content_types);
    print_distribution("Company sizes", &summary.company_sizes);

    if !summary.top_skills.is_empty() {
        println!("  Top skills:");
        for (i, entry) in summary.top_skills.iter().enumerate() {
            println!(
                "    {}. {} ({})",
                i + 1,
                entry.skill.yellow(),
                entry.count
            );
        }
    }
    println!();
}

fn print_distribution(label: &str, distribution: &BTreeMap<String, usize>) {
    if distribution.is_empty() {
        return;
    }
    println!("  {label}:");
    for (key, count) in distribution {
        println!("    {key}: {count}");
    }
}
