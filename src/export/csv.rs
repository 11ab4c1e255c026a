//! CSV report writers. Plain comma-separated tables with a single header
//! row, written through buffered file handles.

use crate::alignment::SubstitutionClass;
use crate::analysis::{ApobecScan, GenomeSignature};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// One row per APOBEC3-signature call across all genomes.
pub fn write_mutations_csv(path: &Path, scan: &ApobecScan) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(writer, "genome_id,position,ref,alt,context")?;
    for genome in &scan.genomes {
        for call in &genome.calls {
            writeln!(
                writer,
                "{},{},{},{},{}",
                genome.genome_id,
                call.position,
                call.ref_base as char,
                call.alt_base as char,
                call.context.as_deref().unwrap_or("")
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Per-genome mutation totals.
pub fn write_summary_csv(path: &Path, scan: &ApobecScan) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(writer, "genome_id,total_mutations")?;
    for genome in &scan.genomes {
        writeln!(writer, "{},{}", genome.genome_id, genome.calls.len())?;
    }
    writer.flush()?;
    Ok(())
}

/// Context frequency table, most frequent first.
pub fn write_contexts_csv(path: &Path, contexts: &[(String, u64)]) -> Result<()> {
    let mut writer = create(path)?;
    writeln!(writer, "context,count")?;
    for (context, count) in contexts {
        writeln!(writer, "{},{}", context, count)?;
    }
    writer.flush()?;
    Ok(())
}

/// Per-genome signature table: totals, APOBEC3 share, and all twelve
/// substitution classes in a fixed column order.
pub fn write_signatures_csv(path: &Path, profiles: &[GenomeSignature]) -> Result<()> {
    let mut writer = create(path)?;

    write!(
        writer,
        "genome_id,total_mutations,apobec3_mutations,apobec3_percent"
    )?;
    for class in SubstitutionClass::ALL {
        write!(writer, ",{}", class.label())?;
    }
    writeln!(writer)?;

    for profile in profiles {
        write!(
            writer,
            "{},{},{},{:.2}",
            profile.genome_id,
            profile.total_mutations,
            profile.apobec3_mutations(),
            profile.apobec3_percent()
        )?;
        for class in SubstitutionClass::ALL {
            write!(writer, ",{}", profile.counts.get(class))?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
