pub mod csv;
pub mod formats;

use crate::export::formats::apobec::ApobecScanExport;
use crate::export::formats::signatures::SignatureExport;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root structure for JSON exports.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    #[serde(rename = "$type")]
    pub record_type: String, // e.g. "tools.mutsig.apobec-scan"

    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    #[serde(flatten)]
    pub data: AnalysisData,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisData {
    ApobecScan(ApobecScanExport),
    Signatures(SignatureExport),
}

impl AnalysisData {
    fn record_type(&self) -> &'static str {
        match self {
            AnalysisData::ApobecScan(_) => "tools.mutsig.apobec-scan",
            AnalysisData::Signatures(_) => "tools.mutsig.signatures",
        }
    }
}

/// Provenance block describing the alignment the analysis ran over.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub alignment_file: String,
    pub reference_id: String,
    pub sequence_count: usize,
    pub alignment_length: usize,
}

impl AnalysisExport {
    pub fn new(data: AnalysisData, metadata: ExportMetadata) -> Self {
        Self {
            record_type: data.record_type().to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            data,
            metadata,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create JSON export {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)
            .with_context(|| format!("Failed to write JSON export {}", path.display()))?;
        Ok(())
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_round_trips_through_json() {
        let export = AnalysisExport::new(
            AnalysisData::Signatures(SignatureExport {
                genomes: Vec::new(),
                mean_signature: Vec::new(),
            }),
            ExportMetadata {
                alignment_file: "msa.fasta".to_string(),
                reference_id: "ref".to_string(),
                sequence_count: 2,
                alignment_length: 100,
            },
        );

        let json = serde_json::to_string(&export).unwrap();
        assert!(json.contains("\"$type\":\"tools.mutsig.signatures\""));
        let parsed: AnalysisExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.metadata.sequence_count, 2);
        assert_eq!(parsed.created_at, export.created_at);
    }
}
