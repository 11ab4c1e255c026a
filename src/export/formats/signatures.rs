use crate::analysis::{mean_signature, GenomeSignature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SignatureExport {
    pub genomes: Vec<GenomeSignatureExport>,
    /// Mean per-class counts across genomes, highest first.
    pub mean_signature: Vec<ClassMeanExport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenomeSignatureExport {
    pub genome_id: String,
    pub total_mutations: u64,
    pub apobec3_mutations: u64,
    pub apobec3_percent: f64,
    pub signatures: Vec<ClassCountExport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassCountExport {
    pub class: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassMeanExport {
    pub class: String,
    pub mean_count: f64,
}

impl From<&[GenomeSignature]> for SignatureExport {
    fn from(profiles: &[GenomeSignature]) -> Self {
        Self {
            genomes: profiles
                .iter()
                .map(|profile| GenomeSignatureExport {
                    genome_id: profile.genome_id.clone(),
                    total_mutations: profile.total_mutations,
                    apobec3_mutations: profile.apobec3_mutations(),
                    apobec3_percent: profile.apobec3_percent(),
                    signatures: profile
                        .counts
                        .iter()
                        .map(|(class, count)| ClassCountExport {
                            class: class.label().to_string(),
                            count,
                        })
                        .collect(),
                })
                .collect(),
            mean_signature: mean_signature(profiles)
                .into_iter()
                .map(|(class, mean_count)| ClassMeanExport {
                    class: class.label().to_string(),
                    mean_count,
                })
                .collect(),
        }
    }
}
