use crate::config::Config;
use crate::fastq::{concatenate_fastq, group_fastq_files, ReadDirection};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

pub fn run(fastq_dir: String, output_dir: String, pattern: Option<String>) -> Result<()> {
    let config = Config::load();
    let pattern_str = pattern.unwrap_or(config.fastq_pattern);
    let pattern = Regex::new(&pattern_str)
        .with_context(|| format!("Invalid filename pattern '{}'", pattern_str))?;

    let samples = group_fastq_files(Path::new(&fastq_dir), &pattern)?;
    if samples.is_empty() {
        println!("No files matching '{}' found in {}", pattern_str, fastq_dir);
        return Ok(());
    }
    println!("Found {} samples in {}", samples.len(), fastq_dir);

    let output_dir = Path::new(&output_dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let output_count = samples
        .values()
        .map(|reads| {
            usize::from(!reads.r1.is_empty()) + usize::from(!reads.r2.is_empty())
        })
        .sum::<usize>() as u64;
    let progress = ProgressBarBuilder::new("Concatenating")
        .with_length(output_count)
        .build()?;

    for (sample, reads) in &samples {
        for direction in [ReadDirection::R1, ReadDirection::R2] {
            let files = reads.files(direction);
            if files.is_empty() {
                continue;
            }

            let output_file =
                output_dir.join(format!("{}_{}_combined.fastq.gz", sample, direction.as_str()));
            progress.set_message(format!("{} {}", sample, direction.as_str()));
            let bytes = concatenate_fastq(files, &output_file)?;
            progress.println(format!(
                "Concatenated {} files into {} ({} bytes of reads)",
                files.len(),
                output_file.display(),
                bytes
            ));
            progress.inc(1);
        }
    }

    progress.finish_with_message(format!(
        "Combined files for {} samples written to {}",
        samples.len(),
        output_dir.display()
    ));
    Ok(())
}
