use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::error::{Error, Result};

/// Converts a path to a string slice, failing on non-UTF-8 paths.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::ProcessError {
        source_path: path.display().to_string(),
        e: "the path is not valid UTF-8".to_string(),
    })
}

/// Resolves the template directory, verifying that it exists.
pub fn get_template_dir<P: AsRef<Path>>(template: P) -> Result<PathBuf> {
    let template = template.as_ref();
    if !template.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: template.display().to_string(),
        });
    }
    Ok(template.to_path_buf())
}

/// Ensures the output directory exists and is safe to write to.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let source_path = source_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Parses a buffer of predefined answers into a JSON object map.
pub fn parse_string_to_json(
    buf: String,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(&buf)
        .map_err(|e| Error::Other(anyhow!("answers are not valid JSON: {e}")))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(Error::Other(anyhow!("answers must be a JSON object"))),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_parse_to_a_map() {
        let map = parse_string_to_json(r#"{"name": "demo", "tests": true}"#.to_string())
            .unwrap();
        assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("demo"));
        assert_eq!(map.get("tests").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn non_object_answers_are_rejected() {
        assert!(parse_string_to_json("[1, 2]".to_string()).is_err());
        assert!(parse_string_to_json("not json".to_string()).is_err());
    }

    #[test]
    fn missing_template_dir_is_an_error() {
        let result = get_template_dir("/path/that/does/not/exist");
        assert!(matches!(result, Err(Error::TemplateDoesNotExistsError { .. })));
    }

    #[test]
    fn existing_output_dir_requires_force() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let result = get_output_dir(tmp_dir.path(), false);
        assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
        assert!(get_output_dir(tmp_dir.path(), true).is_ok());
    }
}
