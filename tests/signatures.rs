use mutsig_tools::commands;
use std::fs;

/// Reference ACGTACGT against:
///   q1 ATGTACGT -> C>T at column 1 (1 mutation, 100% APOBEC3)
///   q2 GCGTACGA -> A>G at column 0 and T>A at column 7 (0% APOBEC3)
const MSA: &str = ">ref\nACGTACGT\n>q1\nATGTACGT\n>q2\nGCGTACGA\n";

#[test]
fn signature_table_has_totals_and_class_columns() {
    let dir = tempfile::tempdir().unwrap();
    let msa_path = dir.path().join("msa.fasta");
    fs::write(&msa_path, MSA).unwrap();

    let output = dir.path().join("signatures.csv");
    let plots = dir.path().join("plots");
    let json = dir.path().join("signatures.json");

    commands::signatures::run(
        msa_path.to_str().unwrap().to_string(),
        output.to_str().unwrap().to_string(),
        Some(plots.to_str().unwrap().to_string()),
        Some(json.to_str().unwrap().to_string()),
    )
    .unwrap();

    let table = fs::read_to_string(output).unwrap();
    let mut lines = table.lines();
    assert_eq!(
        lines.next(),
        Some(
            "genome_id,total_mutations,apobec3_mutations,apobec3_percent,\
             C>T,G>A,A>G,T>C,C>A,G>T,A>C,T>G,C>G,G>C,A>T,T>A"
        )
    );
    assert_eq!(
        lines.next(),
        Some("q1,1,1,100.00,1,0,0,0,0,0,0,0,0,0,0,0")
    );
    assert_eq!(
        lines.next(),
        Some("q2,2,0,0.00,0,0,1,0,0,0,0,0,0,0,0,1")
    );
    assert_eq!(lines.next(), None);

    assert!(plots.join("total_mutations.svg").exists());
    assert!(plots.join("apobec3_percentage.svg").exists());
    assert!(plots.join("mean_signatures.svg").exists());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(json["$type"], "tools.mutsig.signatures");
    assert_eq!(json["genomes"][0]["apobec3_percent"], 100.0);
    assert_eq!(json["mean_signature"][0]["class"], "A>G");
}

#[test]
fn identical_genomes_report_zero_percent() {
    let dir = tempfile::tempdir().unwrap();
    let msa_path = dir.path().join("msa.fasta");
    fs::write(&msa_path, ">ref\nACGT\n>q1\nACGT\n").unwrap();

    let output = dir.path().join("signatures.csv");
    commands::signatures::run(
        msa_path.to_str().unwrap().to_string(),
        output.to_str().unwrap().to_string(),
        None,
        None,
    )
    .unwrap();

    let table = fs::read_to_string(output).unwrap();
    assert!(table.contains("q1,0,0,0.00,"));
}
