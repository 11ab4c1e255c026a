use clap::Parser;
use mutsig_tools::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::ApobecScan {
            alignment_file,
            output_file,
            summary_file,
            contexts_file,
            plot_dir,
            json,
        } => commands::apobec_scan::run(
            alignment_file,
            output_file,
            summary_file,
            contexts_file,
            plot_dir,
            json,
        ),
        cli::Commands::Signatures {
            alignment_file,
            output_file,
            plot_dir,
            json,
        } => commands::signatures::run(alignment_file, output_file, plot_dir, json),
        cli::Commands::InitConfig => commands::init_config::run(),
        cli::Commands::FastqCat {
            fastq_dir,
            output_dir,
            pattern,
        } => commands::fastq_cat::run(fastq_dir, output_dir, pattern),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
