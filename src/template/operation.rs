use std::path::PathBuf;

#[derive(Debug)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `user_confirmed_overwrite` - Whether the user has confirmed overwriting existing files
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, user_confirmed_overwrite: bool) -> String {
        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    if user_confirmed_overwrite {
                        format!(
                            "Copying '{}' to '{}' (overwriting existing file)",
                            source.display(),
                            target.display()
                        )
                    } else {
                        format!(
                            "Skipping copy of '{}' to '{}' (target already exists)",
                            source.display(),
                            target.display()
                        )
                    }
                } else {
                    format!("Copying '{}' to '{}'", source.display(), target.display())
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    if user_confirmed_overwrite {
                        format!(
                            "Writing to '{}' (overwriting existing file)",
                            target.display()
                        )
                    } else {
                        format!(
                            "Skipping write to '{}' (target already exists)",
                            target.display()
                        )
                    }
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }

            TemplateOperation::Ignore { source } => {
                format!("Ignoring '{}' (matches ignore pattern)", source.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_operation_logs_overwrite_message() {
        let source = PathBuf::from("/tmp/test/file.txt");
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected = format!(
            "Copying '{}' to '{}' (overwriting existing file)",
            &source.display(),
            &target.display()
        );

        let copy = TemplateOperation::Copy { source, target, target_exists: true };
        assert_eq!(copy.get_message(true), expected);
    }

    #[test]
    fn copy_operation_skips_when_not_confirmed() {
        let source = PathBuf::from("/tmp/test/file.txt");
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected = format!(
            "Skipping copy of '{}' to '{}' (target already exists)",
            &source.display(),
            &target.display()
        );

        let copy = TemplateOperation::Copy { source, target, target_exists: true };
        assert_eq!(copy.get_message(false), expected);
    }

    #[test]
    fn copy_operation_logs_basic_message() {
        let source = PathBuf::from("/tmp/test/file.txt");
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected =
            format!("Copying '{}' to '{}'", &source.display(), &target.display());

        let copy = TemplateOperation::Copy { source, target, target_exists: false };
        assert_eq!(copy.get_message(false), expected);
    }

    #[test]
    fn create_directory_skips_when_exists() {
        let target = PathBuf::from("/tmp/test/dir");
        let expected = format!(
            "Skipping directory creation '{}' (already exists)",
            &target.display()
        );

        let operation =
            TemplateOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(operation.get_message(false), expected);
    }

    #[test]
    fn create_directory_message_when_missing() {
        let target = PathBuf::from("/tmp/test/dir");
        let expected = format!("Creating directory '{}'", &target.display());

        let operation =
            TemplateOperation::CreateDirectory { target, target_exists: false };
        assert_eq!(operation.get_message(false), expected);
    }

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected =
            format!("Writing to '{}' (overwriting existing file)", &target.display());

        let write = TemplateOperation::Write {
            target,
            target_exists: true,
            content: "".to_string(),
        };
        assert_eq!(write.get_message(true), expected);
    }

    #[test]
    fn write_operation_skips_without_confirmation() {
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected =
            format!("Skipping write to '{}' (target already exists)", &target.display());

        let write = TemplateOperation::Write {
            target,
            target_exists: true,
            content: "".to_string(),
        };
        assert_eq!(write.get_message(false), expected);
    }

    #[test]
    fn write_operation_basic_message() {
        let target = PathBuf::from("/tmp/test/file.txt");
        let expected = format!("Writing to '{}'", &target.display());

        let write = TemplateOperation::Write {
            target,
            target_exists: false,
            content: "".to_string(),
        };
        assert_eq!(write.get_message(false), expected);
    }

    #[test]
    fn ignore_operation_logs_message() {
        let source = PathBuf::from("/tmp/test/file.txt");
        let expected =
            format!("Ignoring '{}' (matches ignore pattern)", &source.display());

        let ignore = TemplateOperation::Ignore { source };
        assert_eq!(ignore.get_message(false), expected);
    }
}
