use crate::alignment::{trinucleotide_context, AlignedRecord, Alignment, SubstitutionClass};
use std::collections::HashMap;

/// A single APOBEC3-signature call against the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationCall {
    /// Zero-based alignment column.
    pub position: usize,
    pub ref_base: u8,
    pub alt_base: u8,
    /// Trinucleotide window around the call in the query sequence, absent
    /// at alignment boundaries.
    pub context: Option<String>,
}

/// All APOBEC3-signature calls for one query genome.
#[derive(Debug, Clone)]
pub struct GenomeMutations {
    pub genome_id: String,
    pub calls: Vec<MutationCall>,
}

/// Scan results across every query genome in the alignment.
#[derive(Debug, Clone)]
pub struct ApobecScan {
    pub genomes: Vec<GenomeMutations>,
    /// Context occurrences pooled over all genomes.
    pub context_counts: HashMap<String, u64>,
}

impl ApobecScan {
    /// Assemble scan results, pooling each genome's call contexts into the
    /// global frequency table.
    pub fn from_genomes(genomes: Vec<GenomeMutations>) -> Self {
        let mut context_counts: HashMap<String, u64> = HashMap::new();
        for genome in &genomes {
            for call in &genome.calls {
                if let Some(context) = &call.context {
                    *context_counts.entry(context.clone()).or_insert(0) += 1;
                }
            }
        }
        Self {
            genomes,
            context_counts,
        }
    }

    /// The `n` most frequent contexts, count descending with a stable
    /// lexicographic tie-break.
    pub fn top_contexts(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .context_counts
            .iter()
            .map(|(context, &count)| (context.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    pub fn total_calls(&self) -> u64 {
        self.genomes.iter().map(|g| g.calls.len() as u64).sum()
    }
}

/// Collect C>T / G>A calls for one query genome against the reference.
/// The first and last alignment columns are skipped, as is any column
/// where either sequence holds a gap.
pub fn scan_genome(reference: &[u8], record: &AlignedRecord) -> GenomeMutations {
    let mut calls = Vec::new();

    for i in 1..reference.len().saturating_sub(1) {
        let ref_base = reference[i];
        let alt_base = record.seq[i];

        if ref_base == b'-' || alt_base == b'-' {
            continue;
        }

        let is_apobec3 = SubstitutionClass::from_bases(ref_base, alt_base)
            .map(|c| c.is_apobec3())
            .unwrap_or(false);
        if !is_apobec3 {
            continue;
        }

        calls.push(MutationCall {
            position: i,
            ref_base,
            alt_base,
            context: trinucleotide_context(&record.seq, i)
                .map(|w| String::from_utf8_lossy(&w).into_owned()),
        });
    }

    GenomeMutations {
        genome_id: record.id.clone(),
        calls,
    }
}

/// Walk every query genome against the reference.
pub fn scan_alignment(alignment: &Alignment) -> ApobecScan {
    let reference = &alignment.reference().seq;
    let genomes = alignment
        .queries()
        .iter()
        .map(|record| scan_genome(reference, record))
        .collect();
    ApobecScan::from_genomes(genomes)
}
