//! Raw key/value sources feeding settings resolution.

use std::env;
use std::path::Path;

use super::SettingsError;

/// Default location of the local override file.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Reads `KEY=VALUE` pairs from an override file.
///
/// A missing file yields no pairs. The process environment is not modified.
pub fn read_env_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>, SettingsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let to_error = |source| SettingsError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)
}

/// Snapshots the process environment, skipping non-Unicode entries.
pub fn environment() -> Vec<(String, String)> {
    env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let pairs = read_env_file(temp_dir.path().join(".env")).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn reads_pairs_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(
            &env_path,
            "# local overrides\nPORT=8883\nhost=\"0.0.0.0\"\n\nLOG_LEVEL=warning\n",
        )
        .unwrap();

        let pairs = read_env_file(&env_path).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("PORT".to_string(), "8883".to_string()),
                ("host".to_string(), "0.0.0.0".to_string()),
                ("LOG_LEVEL".to_string(), "warning".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_file_is_reported_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(&env_path, "PORT='unterminated\n").unwrap();

        let err = read_env_file(&env_path).unwrap_err();

        assert!(!err.is_validation());
        assert!(err.to_string().contains(".env"));
    }
}
