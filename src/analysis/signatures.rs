use crate::alignment::{AlignedRecord, Alignment, SignatureCounts, SubstitutionClass};

/// Per-genome mutation totals and the 12-class signature breakdown.
#[derive(Debug, Clone)]
pub struct GenomeSignature {
    pub genome_id: String,
    /// Every mismatch against the reference, including ambiguity-code
    /// mismatches that fall outside the 12 classes.
    pub total_mutations: u64,
    pub counts: SignatureCounts,
}

impl GenomeSignature {
    pub fn apobec3_mutations(&self) -> u64 {
        self.counts.apobec3_total()
    }

    /// APOBEC3 share of all mutations, 0.0 for genomes identical to the
    /// reference.
    pub fn apobec3_percent(&self) -> f64 {
        if self.total_mutations == 0 {
            0.0
        } else {
            self.apobec3_mutations() as f64 / self.total_mutations as f64 * 100.0
        }
    }
}

/// Count mismatches between one query genome and the reference across all
/// alignment columns. Columns where either sequence holds a gap or N are
/// ignored.
pub fn profile_genome(reference: &[u8], record: &AlignedRecord) -> GenomeSignature {
    let mut counts = SignatureCounts::default();
    let mut total_mutations = 0u64;

    for (&ref_base, &alt_base) in reference.iter().zip(record.seq.iter()) {
        if ref_base == b'-'
            || alt_base == b'-'
            || ref_base == b'N'
            || alt_base == b'N'
            || ref_base == alt_base
        {
            continue;
        }

        total_mutations += 1;
        if let Some(class) = SubstitutionClass::from_bases(ref_base, alt_base) {
            counts.record(class);
        }
    }

    GenomeSignature {
        genome_id: record.id.clone(),
        total_mutations,
        counts,
    }
}

/// Profile every query genome in the alignment.
pub fn profile_alignment(alignment: &Alignment) -> Vec<GenomeSignature> {
    let reference = &alignment.reference().seq;
    alignment
        .queries()
        .iter()
        .map(|record| profile_genome(reference, record))
        .collect()
}

/// Mean count per substitution class across genomes, sorted descending.
pub fn mean_signature(profiles: &[GenomeSignature]) -> Vec<(SubstitutionClass, f64)> {
    if profiles.is_empty() {
        return Vec::new();
    }

    let mut means: Vec<(SubstitutionClass, f64)> = SubstitutionClass::ALL
        .iter()
        .map(|&class| {
            let sum: u64 = profiles.iter().map(|p| p.counts.get(class)).sum();
            (class, sum as f64 / profiles.len() as f64)
        })
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    means
}
