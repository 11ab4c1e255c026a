use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect APOBEC3-signature mutations (C>T and G>A) in a multiple sequence alignment
    ApobecScan {
        /// FASTA alignment file (first record is the reference; may be gzipped)
        alignment_file: String,

        /// Output CSV with one row per mutation call
        #[arg(short = 'o', long = "output", default_value = "apobec3_mutations.csv")]
        output_file: String,

        /// Output CSV with per-genome mutation totals
        #[arg(long, default_value = "apobec3_summary.csv")]
        summary_file: String,

        /// Output CSV with trinucleotide context counts
        #[arg(long, default_value = "apobec3_contexts.csv")]
        contexts_file: String,

        /// Directory for SVG plots (per-genome histograms and top contexts)
        #[arg(long)]
        plot_dir: Option<String>,

        /// Optional JSON export of the full scan results
        #[arg(long)]
        json: Option<String>,
    },

    /// Compute the 12-class mutation-signature breakdown and APOBEC3 fraction per genome
    Signatures {
        /// FASTA alignment file (first record is the reference; may be gzipped)
        alignment_file: String,

        /// Output CSV with per-genome signature counts
        #[arg(short = 'o', long = "output", default_value = "mutation_signatures.csv")]
        output_file: String,

        /// Directory for SVG plots (totals, APOBEC3 percentage, mean signatures)
        #[arg(long)]
        plot_dir: Option<String>,

        /// Optional JSON export of the full signature results
        #[arg(long)]
        json: Option<String>,
    },

    /// Write a config.toml with the default settings to the user config directory
    InitConfig,

    /// Concatenate gzipped paired-end FASTQ files per sample and read direction
    FastqCat {
        /// Directory containing {sample}_L{lane}_{R1|R2}_*.fastq.gz files
        fastq_dir: String,

        /// Directory for the combined output files
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: String,

        /// Filename regex with (sample) and (read direction) capture groups
        #[arg(long)]
        pattern: Option<String>,
    },
}
