use anyhow::{bail, Context, Result};
use bio::io::fasta;
use niffler::get_reader;
use std::fs::File;
use std::path::Path;

/// One aligned sequence. Bases are stored uppercase so the analyses are
/// insensitive to the case conventions of the aligner that produced the MSA.
#[derive(Debug, Clone)]
pub struct AlignedRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

impl AlignedRecord {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// A multiple sequence alignment. The first record is the reference; all
/// records have the same length.
#[derive(Debug, Clone)]
pub struct Alignment {
    records: Vec<AlignedRecord>,
}

impl Alignment {
    /// Load an alignment from a FASTA file, plain or gzip-compressed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open alignment file {}", path.display()))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let reader = fasta::Reader::new(inner_reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result
                .with_context(|| format!("Malformed FASTA record in {}", path.display()))?;
            records.push(AlignedRecord {
                id: record.id().to_string(),
                seq: record.seq().to_ascii_uppercase(),
            });
        }

        Self::new(records)
    }

    pub fn new(records: Vec<AlignedRecord>) -> Result<Self> {
        if records.len() < 2 {
            bail!(
                "Alignment must contain a reference and at least one query sequence (found {})",
                records.len()
            );
        }

        let ref_len = records[0].len();
        for record in &records[1..] {
            if record.len() != ref_len {
                bail!(
                    "Sequence '{}' has length {} but the reference '{}' has length {}",
                    record.id,
                    record.len(),
                    records[0].id,
                    ref_len
                );
            }
        }

        Ok(Self { records })
    }

    pub fn reference(&self) -> &AlignedRecord {
        &self.records[0]
    }

    /// All records after the reference.
    pub fn queries(&self) -> &[AlignedRecord] {
        &self.records[1..]
    }

    /// Alignment length shared by every record.
    pub fn len(&self) -> usize {
        self.records[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.records[0].is_empty()
    }

    pub fn sequence_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, seq: &str) -> AlignedRecord {
        AlignedRecord {
            id: id.to_string(),
            seq: seq.as_bytes().to_vec(),
        }
    }

    #[test]
    fn rejects_single_sequence() {
        let result = Alignment::new(vec![record("ref", "ACGT")]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = Alignment::new(vec![record("ref", "ACGT"), record("q1", "ACG")]);
        let err = result.err().expect("length mismatch must be rejected");
        assert!(err.to_string().contains("q1"));
    }

    #[test]
    fn exposes_reference_and_queries() {
        let aln =
            Alignment::new(vec![record("ref", "ACGT"), record("q1", "ATGT")]).unwrap();
        assert_eq!(aln.reference().id, "ref");
        assert_eq!(aln.queries().len(), 1);
        assert_eq!(aln.len(), 4);
        assert_eq!(aln.sequence_count(), 2);
    }
}
