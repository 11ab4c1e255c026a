use crate::analysis::ApobecScan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApobecScanExport {
    pub genomes: Vec<GenomeMutationsExport>,
    /// Pooled trinucleotide contexts, most frequent first.
    pub contexts: Vec<ContextCountExport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenomeMutationsExport {
    pub genome_id: String,
    pub total_mutations: usize,
    pub mutations: Vec<MutationExport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutationExport {
    pub position: usize,
    pub ref_base: char,
    pub alt_base: char,
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContextCountExport {
    pub context: String,
    pub count: u64,
}

impl From<&ApobecScan> for ApobecScanExport {
    fn from(scan: &ApobecScan) -> Self {
        Self {
            genomes: scan
                .genomes
                .iter()
                .map(|genome| GenomeMutationsExport {
                    genome_id: genome.genome_id.clone(),
                    total_mutations: genome.calls.len(),
                    mutations: genome
                        .calls
                        .iter()
                        .map(|call| MutationExport {
                            position: call.position,
                            ref_base: call.ref_base as char,
                            alt_base: call.alt_base as char,
                            context: call.context.clone(),
                        })
                        .collect(),
                })
                .collect(),
            contexts: scan
                .top_contexts(usize::MAX)
                .into_iter()
                .map(|(context, count)| ContextCountExport { context, count })
                .collect(),
        }
    }
}
