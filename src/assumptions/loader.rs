//! JSON-based parameter loader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::parameters::ParameterSet;
use crate::error::Result;

impl ParameterSet {
    /// Load a parameter set from a JSON file; missing fields take their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let params = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("loaded parameter set from {}", path.display());
        Ok(params)
    }

    /// Parse a parameter set from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn test_empty_document_is_defaults() {
        let params = ParameterSet::from_json_str("{}").unwrap();
        assert_eq!(params, ParameterSet::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = ParameterSet::from_json_str("{ horizon_years: ").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ParameterSet::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("downsizing_analyzer_loader_test.json");
        std::fs::write(&path, r#"{ "horizon_years": 7, "discount_rate_pct": 4.0 }"#).unwrap();

        let params = ParameterSet::from_json_path(&path).unwrap();
        assert_eq!(params.horizon_years, 7);
        assert_eq!(params.discount_rate_pct, 4.0);

        std::fs::remove_file(&path).ok();
    }
}
