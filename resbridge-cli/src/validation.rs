use std::path::Path;

/// Validate that the resource tree exists and is a directory
pub fn validate_source_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Source directory does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Source path is not a directory: {}", path.display()));
    }

    Ok(())
}

/// Validate that an output path does not name an existing directory
pub fn validate_output_file(flag: &str, path: &Path) -> Result<(), String> {
    if path.is_dir() {
        return Err(format!("{} must be a file, found a directory: {}", flag, path.display()));
    }
    Ok(())
}

/// Validate that the destination, if it exists, is a directory
pub fn validate_destination_dir(path: &Path) -> Result<(), String> {
    if path.exists() && !path.is_dir() {
        return Err(format!("Destination is not a directory: {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_source_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("strings.xml");
        fs::write(&file, "<resources/>").unwrap();

        assert!(validate_source_dir(temp.path()).is_ok());
        assert!(
            validate_source_dir(&file)
                .unwrap_err()
                .contains("not a directory")
        );
        assert!(
            validate_source_dir(&temp.path().join("missing"))
                .unwrap_err()
                .contains("does not exist")
        );
    }

    #[test]
    fn test_validate_output_file() {
        let temp = TempDir::new().unwrap();
        assert!(validate_output_file("--report", &temp.path().join("r.csv")).is_ok());
        assert!(
            validate_output_file("--report", temp.path())
                .unwrap_err()
                .starts_with("--report")
        );
    }

    #[test]
    fn test_validate_destination_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();

        assert!(validate_destination_dir(temp.path()).is_ok());
        assert!(validate_destination_dir(&temp.path().join("new")).is_ok());
        assert!(validate_destination_dir(&file).is_err());
    }
}
