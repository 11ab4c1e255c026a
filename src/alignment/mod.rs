pub mod msa;
pub mod mutation;

pub use msa::{AlignedRecord, Alignment};
pub use mutation::{trinucleotide_context, SignatureCounts, SubstitutionClass};
