//! # Catalogue Loading
//!
//! Reads the catalogue snapshot the storage layer exports and checks it
//! against the data-entry rules before any session sees it.

use std::fs;
use std::path::Path;

use boxcraft_core::validation::validate_catalogue;
use boxcraft_core::Catalogue;
use tracing::{debug, warn};

use crate::error::{ApiError, ErrorCode};

/// Loads and validates a snapshot.
///
/// In strict mode a rule violation is an error; otherwise it is logged and
/// the snapshot is used as-is.
pub fn load_catalogue(path: &Path, strict: bool) -> Result<Catalogue, ApiError> {
    let json = fs::read_to_string(path).map_err(|e| {
        ApiError::new(
            ErrorCode::IoError,
            format!("Could not read catalogue {}: {}", path.display(), e),
        )
    })?;

    let catalogue = Catalogue::from_json(&json)?;

    if let Err(problem) = validate_catalogue(&catalogue) {
        if strict {
            return Err(problem.into());
        }
        warn!(
            path = %path.display(),
            %problem,
            "Catalogue breaks data-entry rules, using it anyway"
        );
    }

    if let Some(category) = catalogue.first_empty_required() {
        warn!(%category, "Catalogue has no options in a required category");
    }

    debug!(
        sizes = catalogue.sizes.len(),
        materials = catalogue.materials.len(),
        quantity_tiers = catalogue.quantity_tiers.len(),
        colors = catalogue.colors.len(),
        "Catalogue loaded"
    );

    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = include_str!("../fixtures/catalogue.json");

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_fixture() {
        let file = write_temp(FIXTURE);
        let catalogue = load_catalogue(file.path(), true).unwrap();
        assert_eq!(catalogue.sizes.len(), 2);
        assert_eq!(catalogue.quantity_tiers.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let missing = Path::new("/nonexistent/boxcraft/catalogue.json");
        let err = load_catalogue(missing, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("/nonexistent/boxcraft/catalogue.json"));
    }

    #[test]
    fn test_malformed_snapshot() {
        let file = write_temp("{ not json");
        let err = load_catalogue(file.path(), true).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_strict_mode_rejects_bad_modifier() {
        let bad = FIXTURE.replacen("\"1.10\"", "\"0\"", 1);
        let file = write_temp(&bad);

        let err = load_catalogue(file.path(), true).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price modifier must be positive");

        // Lenient mode keeps going
        assert!(load_catalogue(file.path(), false).is_ok());
    }
}
