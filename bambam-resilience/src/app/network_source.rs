use std::{fs::File, io::BufReader, path::Path};

use flate2::read::GzDecoder;

use super::ResilienceAppError;
use crate::model::network::NetworkInput;

/// reads an ingested network document from a `.json` or `.json.gz` file.
pub fn read_network_document(path: &str) -> Result<NetworkInput, ResilienceAppError> {
    let filepath = Path::new(path);
    if !filepath.is_file() {
        return Err(ResilienceAppError::NetworkDocumentError(
            path.to_string(),
            String::from("file not found"),
        ));
    }
    let file = File::open(filepath)?;
    let input: NetworkInput = if path.ends_with(".json.gz") {
        serde_json::from_reader(BufReader::new(GzDecoder::new(file)))?
    } else if path.ends_with(".json") {
        serde_json::from_reader(BufReader::new(file))?
    } else {
        return Err(ResilienceAppError::NetworkDocumentError(
            path.to_string(),
            String::from("unsupported file type, expected .json or .json.gz"),
        ));
    };
    log::info!(
        "read network document {} with {} stations, {} lines and {} travel time observations",
        path,
        input.stations.len(),
        input.lines.len(),
        input.travel_times.len()
    );
    Ok(input)
}
