pub mod apobec_scan;
pub mod fastq_cat;
pub mod init_config;
pub mod signatures;
