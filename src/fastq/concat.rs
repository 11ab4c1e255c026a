use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use niffler::get_reader;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Concatenate gzip-compressed FASTQ files into a single gzip member at
/// `output`. Each input is decompressed and re-encoded through one writer,
/// so downstream tools see one well-formed stream rather than stacked
/// members. Returns the number of plaintext bytes written.
pub fn concatenate_fastq(inputs: &[impl AsRef<Path>], output: &Path) -> Result<u64> {
    let out_file = File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;
    let mut writer = GzEncoder::new(BufWriter::new(out_file), Compression::new(6));

    let mut total_bytes = 0u64;
    for input in inputs {
        let input = input.as_ref();
        let file = File::open(input)
            .with_context(|| format!("Failed to open input file {}", input.display()))?;
        let (mut reader, _compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to decompress {}", input.display()))?;
        total_bytes += io::copy(&mut reader, &mut writer)
            .with_context(|| format!("Failed to append {}", input.display()))?;
    }

    // Drop would swallow a trailer-write error; finish explicitly.
    writer
        .finish()
        .with_context(|| format!("Failed to finish {}", output.display()))?
        .flush()
        .with_context(|| format!("Failed to finish {}", output.display()))?;
    Ok(total_bytes)
}
