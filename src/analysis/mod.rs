pub mod apobec_scan;
pub mod signatures;

pub use apobec_scan::{scan_alignment, scan_genome, ApobecScan, GenomeMutations, MutationCall};
pub use signatures::{mean_signature, profile_alignment, profile_genome, GenomeSignature};
