use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Filename shape produced by Illumina demultiplexing: sample, lane, read
/// direction, segment number.
pub const DEFAULT_FASTQ_PATTERN: &str = r"^(Sample\d+_S\d+)_L\d{3}_(R\d)_\d{3}\.fastq\.gz$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadDirection {
    R1,
    R2,
}

impl ReadDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadDirection::R1 => "R1",
            ReadDirection::R2 => "R2",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "R1" => Some(ReadDirection::R1),
            "R2" => Some(ReadDirection::R2),
            _ => None,
        }
    }
}

/// Per-sample input files, split by read direction and sorted by name so
/// lanes and segments concatenate in order.
#[derive(Debug, Clone, Default)]
pub struct SampleReads {
    pub r1: Vec<PathBuf>,
    pub r2: Vec<PathBuf>,
}

impl SampleReads {
    pub fn files(&self, direction: ReadDirection) -> &[PathBuf] {
        match direction {
            ReadDirection::R1 => &self.r1,
            ReadDirection::R2 => &self.r2,
        }
    }

    fn push(&mut self, direction: ReadDirection, path: PathBuf) {
        match direction {
            ReadDirection::R1 => self.r1.push(path),
            ReadDirection::R2 => self.r2.push(path),
        }
    }
}

/// Scan `dir` (non-recursive) for files matching `pattern` and group them
/// by sample and read direction. The pattern must expose the sample as
/// capture group 1 and the read direction as capture group 2.
pub fn group_fastq_files(dir: &Path, pattern: &Regex) -> Result<BTreeMap<String, SampleReads>> {
    if pattern.captures_len() < 3 {
        bail!(
            "Pattern '{}' needs two capture groups (sample, read direction)",
            pattern.as_str()
        );
    }

    let mut samples: BTreeMap<String, SampleReads> = BTreeMap::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(captures) = pattern.captures(name) else {
            continue;
        };

        let sample = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .with_context(|| format!("Pattern matched '{}' without a sample group", name))?;
        let direction_str = captures
            .get(2)
            .map(|m| m.as_str())
            .with_context(|| format!("Pattern matched '{}' without a direction group", name))?;

        let Some(direction) = ReadDirection::parse(direction_str) else {
            eprintln!(
                "Skipping {}: read direction '{}' is not R1 or R2",
                name, direction_str
            );
            continue;
        };

        samples
            .entry(sample)
            .or_default()
            .push(direction, entry.path());
    }

    for reads in samples.values_mut() {
        reads.r1.sort();
        reads.r2.sort();
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_captures_sample_and_direction() {
        let re = Regex::new(DEFAULT_FASTQ_PATTERN).unwrap();
        let caps = re.captures("Sample001_S1_L001_R1_001.fastq.gz").unwrap();
        assert_eq!(&caps[1], "Sample001_S1");
        assert_eq!(&caps[2], "R1");
    }

    #[test]
    fn default_pattern_rejects_other_names() {
        let re = Regex::new(DEFAULT_FASTQ_PATTERN).unwrap();
        assert!(re.captures("Sample001_S1_L001_R1_001.fastq").is_none());
        assert!(re.captures("Undetermined_S0_L001_R1_001.fastq.gz").is_none());
        assert!(re.captures("xSample001_S1_L001_R1_001.fastq.gz").is_none());
    }

    #[test]
    fn direction_parsing() {
        assert_eq!(ReadDirection::parse("R1"), Some(ReadDirection::R1));
        assert_eq!(ReadDirection::parse("R2"), Some(ReadDirection::R2));
        assert_eq!(ReadDirection::parse("R3"), None);
    }

    #[test]
    fn directions_beyond_r2_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "sample1_R1.fastq.gz",
            "sample1_R3.fastq.gz",
            "sample2_R3.fastq.gz",
        ] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let re = Regex::new(r"^(sample\d+)_(R\d)\.fastq\.gz$").unwrap();
        let samples = group_fastq_files(dir.path(), &re).unwrap();

        // An index read matched by the pattern must not create a group.
        assert_eq!(samples.len(), 1);
        let reads = &samples["sample1"];
        assert_eq!(reads.r1.len(), 1);
        assert!(reads.r2.is_empty());
        assert!(!samples.contains_key("sample2"));
    }

    #[test]
    fn pattern_without_two_groups_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let re = Regex::new(r"^sample\d+\.fastq\.gz$").unwrap();
        let err = group_fastq_files(dir.path(), &re).unwrap_err();
        assert!(err.to_string().contains("capture groups"));
    }
}
