use mutsig_tools::commands;
use mutsig_tools::fastq::concatenate_fastq;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

fn write_gzip(path: &Path, content: &str) {
    let file = fs::File::create(path).unwrap();
    let mut writer = niffler::get_writer(
        Box::new(file),
        niffler::compression::Format::Gzip,
        niffler::compression::Level::Six,
    )
    .unwrap();
    writer.write_all(content.as_bytes()).unwrap();
}

fn read_gzip(path: &Path) -> String {
    let file = fs::File::open(path).unwrap();
    let (mut reader, _) = niffler::get_reader(Box::new(file)).unwrap();
    let mut content = String::new();
    reader.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn concatenation_preserves_plaintext_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.fastq.gz");
    let b = dir.path().join("b.fastq.gz");
    write_gzip(&a, "@r1\nACGT\n+\nIIII\n");
    write_gzip(&b, "@r2\nTTTT\n+\nIIII\n");

    let out = dir.path().join("combined.fastq.gz");
    let bytes = concatenate_fastq(&[a, b], &out).unwrap();

    assert_eq!(read_gzip(&out), "@r1\nACGT\n+\nIIII\n@r2\nTTTT\n+\nIIII\n");
    assert_eq!(bytes, 32);
}

#[test]
fn output_is_a_finished_gzip_member_even_without_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("combined.fastq.gz");
    let inputs: [&Path; 0] = [];
    let bytes = concatenate_fastq(&inputs, &out).unwrap();

    // The header and trailer must be present; decompression yields nothing.
    assert_eq!(bytes, 0);
    assert!(fs::metadata(&out).unwrap().len() >= 20);
    assert_eq!(read_gzip(&out), "");
}

#[test]
fn groups_lanes_per_sample_and_direction() {
    let dir = tempfile::tempdir().unwrap();
    let fastq_dir = dir.path().join("fastq");
    fs::create_dir(&fastq_dir).unwrap();

    // Two lanes of R1 plus one R2 for Sample001, one R1 for Sample002.
    write_gzip(
        &fastq_dir.join("Sample001_S1_L001_R1_001.fastq.gz"),
        "@a\nAAAA\n+\nIIII\n",
    );
    write_gzip(
        &fastq_dir.join("Sample001_S1_L002_R1_001.fastq.gz"),
        "@b\nCCCC\n+\nIIII\n",
    );
    write_gzip(
        &fastq_dir.join("Sample001_S1_L001_R2_001.fastq.gz"),
        "@c\nGGGG\n+\nIIII\n",
    );
    write_gzip(
        &fastq_dir.join("Sample002_S2_L001_R1_001.fastq.gz"),
        "@d\nTTTT\n+\nIIII\n",
    );
    // Does not match the expected filename shape.
    write_gzip(
        &fastq_dir.join("Undetermined_S0_L001_R1_001.fastq.gz"),
        "@x\nNNNN\n+\nIIII\n",
    );

    let out_dir = dir.path().join("combined");
    commands::fastq_cat::run(
        fastq_dir.to_str().unwrap().to_string(),
        out_dir.to_str().unwrap().to_string(),
        None,
    )
    .unwrap();

    // Lanes concatenate in L001, L002 order.
    assert_eq!(
        read_gzip(&out_dir.join("Sample001_S1_R1_combined.fastq.gz")),
        "@a\nAAAA\n+\nIIII\n@b\nCCCC\n+\nIIII\n"
    );
    assert_eq!(
        read_gzip(&out_dir.join("Sample001_S1_R2_combined.fastq.gz")),
        "@c\nGGGG\n+\nIIII\n"
    );
    assert_eq!(
        read_gzip(&out_dir.join("Sample002_S2_R1_combined.fastq.gz")),
        "@d\nTTTT\n+\nIIII\n"
    );
    assert!(!out_dir.join("Undetermined_S0_R1_combined.fastq.gz").exists());
}

#[test]
fn custom_pattern_overrides_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let fastq_dir = dir.path().join("fastq");
    fs::create_dir(&fastq_dir).unwrap();

    write_gzip(&fastq_dir.join("mvd_7_R1.fastq.gz"), "@a\nACGT\n+\nIIII\n");
    write_gzip(&fastq_dir.join("mvd_7_R2.fastq.gz"), "@b\nTGCA\n+\nIIII\n");

    let out_dir = dir.path().join("combined");
    commands::fastq_cat::run(
        fastq_dir.to_str().unwrap().to_string(),
        out_dir.to_str().unwrap().to_string(),
        Some(r"^(\w+_\d+)_(R\d)\.fastq\.gz$".to_string()),
    )
    .unwrap();

    assert_eq!(
        read_gzip(&out_dir.join("mvd_7_R1_combined.fastq.gz")),
        "@a\nACGT\n+\nIIII\n"
    );
    assert_eq!(
        read_gzip(&out_dir.join("mvd_7_R2_combined.fastq.gz")),
        "@b\nTGCA\n+\nIIII\n"
    );
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = commands::fastq_cat::run(
        dir.path().join("nope").to_str().unwrap().to_string(),
        dir.path().join("out").to_str().unwrap().to_string(),
        None,
    );
    assert!(result.is_err());
}
