use crate::alignment::Alignment;
use crate::analysis::{scan_genome, ApobecScan};
use crate::config::Config;
use crate::export::csv::{write_contexts_csv, write_mutations_csv, write_summary_csv};
use crate::export::{AnalysisData, AnalysisExport, ExportMetadata};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use crate::utils::svg_plot::{sanitize_file_stem, write_svg, BarChart, HistogramPlot};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    alignment_file: String,
    output_file: String,
    summary_file: String,
    contexts_file: String,
    plot_dir: Option<String>,
    json: Option<String>,
) -> Result<()> {
    let config = Config::load();

    let alignment = Alignment::from_path(Path::new(&alignment_file))?;
    println!(
        "Loaded alignment with {} sequences",
        alignment.sequence_count()
    );
    println!("Reference sequence length: {}", alignment.len());

    let progress = ProgressBarBuilder::new("Scanning genomes")
        .with_length(alignment.queries().len() as u64)
        .build()?;

    let reference = &alignment.reference().seq;
    let mut genomes = Vec::with_capacity(alignment.queries().len());
    for record in alignment.queries() {
        let genome = scan_genome(reference, record);
        progress.println(format!(
            "Genome {}: {} mutations identified",
            genome.genome_id,
            genome.calls.len()
        ));
        genomes.push(genome);
        progress.inc(1);
    }
    let scan = ApobecScan::from_genomes(genomes);
    progress.finish_with_message(format!(
        "{} APOBEC3-signature calls across {} genomes",
        scan.total_calls(),
        scan.genomes.len()
    ));

    write_mutations_csv(Path::new(&output_file), &scan)?;
    println!("Mutation calls written to {}", output_file);
    write_summary_csv(Path::new(&summary_file), &scan)?;
    println!("Per-genome summary written to {}", summary_file);
    let contexts = scan.top_contexts(usize::MAX);
    write_contexts_csv(Path::new(&contexts_file), &contexts)?;
    println!("Context counts written to {}", contexts_file);

    if let Some(plot_dir) = plot_dir {
        write_plots(&scan, &alignment, &config, Path::new(&plot_dir))?;
        println!("Plots written to {}", plot_dir);
    }

    if let Some(json_file) = json {
        let export = AnalysisExport::new(
            AnalysisData::ApobecScan((&scan).into()),
            ExportMetadata {
                alignment_file,
                reference_id: alignment.reference().id.clone(),
                sequence_count: alignment.sequence_count(),
                alignment_length: alignment.len(),
            },
        );
        export.write_json(Path::new(&json_file))?;
        println!("JSON export written to {}", json_file);
    }

    Ok(())
}

fn write_plots(
    scan: &ApobecScan,
    alignment: &Alignment,
    config: &Config,
    plot_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(plot_dir)
        .with_context(|| format!("Failed to create plot directory {}", plot_dir.display()))?;

    let histogram = HistogramPlot::new(config.histogram_bins);
    for genome in &scan.genomes {
        let positions: Vec<usize> = genome.calls.iter().map(|call| call.position).collect();
        let svg = histogram.render(
            &positions,
            alignment.len(),
            &format!("Mutation distribution in genome {}", genome.genome_id),
        );
        let file_name = format!(
            "{}_mutation_distribution.svg",
            sanitize_file_stem(&genome.genome_id)
        );
        write_svg(&plot_dir.join(file_name), &svg)?;
    }

    let bars: Vec<(String, f64)> = scan
        .top_contexts(config.top_contexts)
        .into_iter()
        .map(|(context, count)| (context, count as f64))
        .collect();
    let chart = BarChart::default().render(
        &bars,
        &format!("Top {} mutation contexts", bars.len()),
    );
    write_svg(&plot_dir.join("top_contexts.svg"), &chart)?;

    Ok(())
}
