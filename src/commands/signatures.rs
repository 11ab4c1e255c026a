use crate::alignment::Alignment;
use crate::analysis::{mean_signature, profile_genome, GenomeSignature};
use crate::export::csv::write_signatures_csv;
use crate::export::{AnalysisData, AnalysisExport, ExportMetadata};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use crate::utils::svg_plot::{write_svg, BarChart};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    alignment_file: String,
    output_file: String,
    plot_dir: Option<String>,
    json: Option<String>,
) -> Result<()> {
    let alignment = Alignment::from_path(Path::new(&alignment_file))?;
    println!(
        "Loaded alignment with {} sequences",
        alignment.sequence_count()
    );
    println!("Reference sequence length: {}", alignment.len());

    let progress = ProgressBarBuilder::new("Profiling genomes")
        .with_length(alignment.queries().len() as u64)
        .build()?;

    let reference = &alignment.reference().seq;
    let mut profiles = Vec::with_capacity(alignment.queries().len());
    for record in alignment.queries() {
        let profile = profile_genome(reference, record);
        progress.println(format!(
            "Genome {}: {} mutations identified",
            profile.genome_id, profile.total_mutations
        ));
        profiles.push(profile);
        progress.inc(1);
    }
    progress.finish_with_message(format!("Profiled {} genomes", profiles.len()));

    write_signatures_csv(Path::new(&output_file), &profiles)?;
    println!("Signature table written to {}", output_file);

    if let Some(plot_dir) = plot_dir {
        write_plots(&profiles, Path::new(&plot_dir))?;
        println!("Plots written to {}", plot_dir);
    }

    if let Some(json_file) = json {
        let export = AnalysisExport::new(
            AnalysisData::Signatures(profiles.as_slice().into()),
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

fn write_plots(profiles: &[GenomeSignature], plot_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(plot_dir)
        .with_context(|| format!("Failed to create plot directory {}", plot_dir.display()))?;

    let chart = BarChart::default();

    let totals: Vec<(String, f64)> = profiles
        .iter()
        .map(|p| (p.genome_id.clone(), p.total_mutations as f64))
        .collect();
    write_svg(
        &plot_dir.join("total_mutations.svg"),
        &chart.render(&totals, "Total mutations per genome"),
    )?;

    let percentages: Vec<(String, f64)> = profiles
        .iter()
        .map(|p| (p.genome_id.clone(), p.apobec3_percent()))
        .collect();
    write_svg(
        &plot_dir.join("apobec3_percentage.svg"),
        &chart.render(&percentages, "APOBEC3-induced mutations (% of all mutations)"),
    )?;

    let means: Vec<(String, f64)> = mean_signature(profiles)
        .into_iter()
        .map(|(class, mean)| (class.label().to_string(), mean))
        .collect();
    write_svg(
        &plot_dir.join("mean_signatures.svg"),
        &chart.render(&means, "Average mutation signatures across genomes"),
    )?;

    Ok(())
}
