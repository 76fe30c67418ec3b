use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use assetseed_core::region_codes;

use crate::errors::GenerationError;
use crate::generators::DocumentGenerator;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::json::{document_file_name, write_document_json};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for writing a directory of synthetic asset documents.
///
/// Documents are generated and written one at a time. A failed write aborts
/// the run and leaves the files already written in place.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let out_dir = self.options.out_dir.clone();
        let count = self.options.count;

        let regions = region_codes(self.options.region_count)
            .map_err(|err| GenerationError::InvalidOptions(err.to_string()))?;
        std::fs::create_dir_all(&out_dir)?;

        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let generator = DocumentGenerator::new(regions);

        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), seed, out_dir.clone(), count);

        info!(
            run_id = %run_id,
            count,
            regions = generator.regions().len(),
            seed,
            out_dir = %out_dir.display(),
            "generation started"
        );

        for index in 1..=count {
            let document = generator.document(index, &mut rng)?;
            let file_name = document_file_name(index);
            let path = out_dir.join(&file_name);
            let bytes = write_document_json(&path, &document)?;
            debug!(
                id = %document.id,
                file = %file_name,
                tags = document.tags.len(),
                streams = document.streams.len(),
                bytes,
                "document written"
            );
            report.record_document(&document, file_name, bytes);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            documents = report.documents_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_out_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("assetseed_engine_{label}_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn zero_regions_fail_before_touching_disk() {
        let out_dir = temp_out_dir("zero_regions");
        let options = GenerateOptions {
            out_dir: out_dir.clone(),
            count: 3,
            region_count: 0,
            seed: Some(1),
        };

        let err = GenerationEngine::new(options).run().expect_err("must fail");
        assert!(matches!(err, GenerationError::InvalidOptions(_)));
        assert!(!out_dir.exists());
    }

    #[test]
    fn zero_count_creates_empty_directory() {
        let out_dir = temp_out_dir("zero_count");
        let options = GenerateOptions {
            out_dir: out_dir.clone(),
            count: 0,
            region_count: 20,
            seed: Some(1),
        };

        let result = GenerationEngine::new(options).run().expect("run");
        assert!(out_dir.is_dir());
        assert_eq!(result.report.documents_written, 0);
        assert_eq!(std::fs::read_dir(&out_dir).expect("read dir").count(), 0);
    }

    #[test]
    fn report_records_seed_and_usage() {
        let options = GenerateOptions {
            out_dir: temp_out_dir("report"),
            count: 12,
            region_count: 3,
            seed: Some(99),
        };

        let report = GenerationEngine::new(options).run().expect("run").report;
        assert_eq!(report.seed, 99);
        assert_eq!(report.documents_requested, 12);
        assert_eq!(report.documents_written, 12);
        assert_eq!(report.files.first().map(String::as_str), Some("asset-001.json"));
        assert_eq!(report.region_usage.values().sum::<u64>(), 12);
        assert!(
            report
                .region_usage
                .keys()
                .all(|r| ["Region01", "Region02", "Region03"].contains(&r.as_str()))
        );
        assert_eq!(report.asset_type_usage.values().sum::<u64>(), 12);
        assert_eq!(report.manufacturer_usage.values().sum::<u64>(), 12);
        assert!(report.tags_total >= 12);
        assert!(report.bytes_written > 0);
    }
}
