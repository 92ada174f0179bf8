//! Survey file loading.

use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::{ConvertError, ConvertResult, SurveyFormat};

/// Read every record of a survey file in format `F`.
pub fn load_survey_path<F: SurveyFormat>(path: &Path) -> ConvertResult<Vec<F::Record>> {
    debug!("loading {} survey from {}", F::TAG, path.display());
    let file = std::fs::File::open(path).map_err(ConvertError::Io)?;
    let records = load_survey_reader::<F, _>(BufReader::new(file))?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Like [`load_survey_path`] but accepts any `Read` source.
pub fn load_survey_reader<F: SurveyFormat, R: Read>(reader: R) -> ConvertResult<Vec<F::Record>> {
    let root: Value = serde_json::from_reader(reader)?;
    F::records(&root)
}
