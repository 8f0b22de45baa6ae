use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use serde::Serialize;

use super::ResilienceAppError;

pub mod filenames {
    pub const BASELINE_INDICATORS: &str = "baseline-indicators";
    pub const DISRUPTION_SCENARIOS: &str = "disruption-scenarios";
    pub const REMOVED_STATIONS: &str = "disruption-removed-stations";
    pub const FRI_SUMMARY: &str = "fri-summary";
    pub const ACCESSIBILITY: &str = "accessibility";
}

/// writes flat output records as CSV files in a shared directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    directory: PathBuf,
    compress: bool,
    overwrite: bool,
}

impl OutputWriter {
    /// prepares the output directory, creating it if needed.
    pub fn new(
        output_directory: &str,
        compress: bool,
        overwrite: bool,
    ) -> Result<OutputWriter, ResilienceAppError> {
        let directory = PathBuf::from(output_directory);
        if !directory.is_dir() {
            std::fs::create_dir_all(&directory).map_err(|e| {
                ResilienceAppError::OutputError(format!(
                    "unable to create directory {output_directory}: {e}"
                ))
            })?;
        }
        Ok(OutputWriter {
            directory,
            compress,
            overwrite,
        })
    }

    /// full path of an output file, `.csv` or `.csv.gz` by compression.
    pub fn filepath(&self, filename: &str) -> PathBuf {
        let extension = if self.compress { "csv.gz" } else { "csv" };
        self.directory.join(format!("{filename}.{extension}"))
    }

    /// writes one CSV file with a header row. an existing file is only
    /// replaced when overwriting is enabled; otherwise it is kept and
    /// `None` is returned.
    pub fn write_records<T: Serialize>(
        &self,
        filename: &str,
        records: &[T],
    ) -> Result<Option<PathBuf>, ResilienceAppError> {
        let filepath = self.filepath(filename);
        if filepath.exists() && !self.overwrite {
            log::warn!(
                "{} exists and overwrite is disabled, skipping",
                filepath.to_string_lossy()
            );
            return Ok(None);
        }
        let file = File::create(&filepath)?;
        if self.compress {
            let mut writer = create_writer(GzEncoder::new(file, Compression::default()));
            write_all(&mut writer, records)?;
            let encoder = writer
                .into_inner()
                .map_err(|e| ResilienceAppError::OutputError(e.to_string()))?;
            encoder.finish()?;
        } else {
            let mut writer = create_writer(file);
            write_all(&mut writer, records)?;
            writer.flush()?;
        }
        log::info!(
            "wrote {} records to {}",
            records.len(),
            filepath.to_string_lossy()
        );
        Ok(Some(filepath))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

fn create_writer<W: std::io::Write>(destination: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(destination)
}

fn write_all<W: std::io::Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    records: &[T],
) -> Result<(), ResilienceAppError> {
    for record in records.iter() {
        writer.serialize(record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[derive(Serialize)]
    struct Row {
        name: String,
        value: f64,
        note: Option<String>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: String::from("a; b"),
                value: 1.5,
                note: None,
            },
            Row {
                name: String::from("c"),
                value: 2.0,
                note: Some(String::from("x")),
            },
        ]
    }

    fn temp_directory(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.to_string_lossy().to_string()
    }

    #[test]
    fn test_write_plain_csv() {
        let dir = temp_directory("bambam-resilience-writer-plain");
        let writer = OutputWriter::new(&dir, false, false).expect("creates directory");
        let path = writer
            .write_records("rows", &rows())
            .expect("writes")
            .expect("file is new");
        let contents = std::fs::read_to_string(&path).expect("reads back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "name,value,note");
        assert_eq!(lines[1], "a; b,1.5,");
        assert_eq!(lines[2], "c,2.0,x");

        // existing files are kept unless overwriting
        let skipped = writer.write_records("rows", &rows()).expect("no error");
        assert!(skipped.is_none());
        let _ = std::fs::remove_dir_all(writer.directory());
    }

    #[test]
    fn test_write_compressed_csv() {
        let dir = temp_directory("bambam-resilience-writer-gz");
        let writer = OutputWriter::new(&dir, true, true).expect("creates directory");
        let path = writer
            .write_records("rows", &rows())
            .expect("writes")
            .expect("file written");
        assert!(path.to_string_lossy().ends_with("rows.csv.gz"));
        let mut decoded = String::new();
        GzDecoder::new(File::open(&path).expect("opens"))
            .read_to_string(&mut decoded)
            .expect("decodes");
        assert!(decoded.starts_with("name,value,note\n"));
        assert_eq!(decoded.lines().count(), 3);
        let _ = std::fs::remove_dir_all(writer.directory());
    }

    #[test]
    fn test_directory_creation_failure_reports_cause() {
        let dir = temp_directory("bambam-resilience-writer-blocked");
        std::fs::create_dir_all(&dir).expect("creates directory");
        let blocker = PathBuf::from(&dir).join("not-a-directory");
        File::create(&blocker).expect("creates file");
        let target = blocker.join("out").to_string_lossy().to_string();
        match OutputWriter::new(&target, false, false) {
            Err(ResilienceAppError::OutputError(msg)) => {
                assert!(msg.starts_with(&format!("unable to create directory {target}: ")));
                assert!(msg.len() > format!("unable to create directory {target}: ").len());
            }
            other => panic!("expected an output error, found {other:?}"),
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}
