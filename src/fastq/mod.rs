pub mod concat;
pub mod grouping;

pub use concat::concatenate_fastq;
pub use grouping::{group_fastq_files, ReadDirection, SampleReads, DEFAULT_FASTQ_PATTERN};
