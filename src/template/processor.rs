use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::formatter::{self, TemplateFormatter};
use crate::ioutils::path_to_str;

use super::operation::TemplateOperation;

pub struct TemplateProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    engine: &'a dyn TemplateFormatter,
    seederignore: &'a GlobSet,

    /// Other
    template_root: P,
    output_root: P,
    answers: &'a serde_json::Map<String, serde_json::Value>,
}

impl<'a, P: AsRef<Path>> TemplateProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateFormatter,
        template_root: P,
        output_root: P,
        answers: &'a serde_json::Map<String, serde_json::Value>,
        seederignore: &'a GlobSet,
    ) -> Self {
        Self { engine, template_root, output_root, answers, seederignore }
    }

    /// Validates whether the `formatted_entry` is a usable filesystem path by
    /// comparing its components with those of the original `template_entry`.
    /// The validation ensures no parts of the path are empty after
    /// formatting.
    ///
    /// # Arguments
    /// * `template_path` - The original template path
    /// * `formatted_path` - The path after substituting template variables
    ///
    /// # Returns
    /// * `bool` - Whether the formatted path is valid
    fn has_valid_formatted_path_parts<S: AsRef<str>>(
        &self,
        template_path: S,
        formatted_path: S,
    ) -> bool {
        let template_path: Vec<&str> =
            template_path.as_ref().split(std::path::MAIN_SEPARATOR).collect();
        let formatted_path: Vec<&str> =
            formatted_path.as_ref().split(std::path::MAIN_SEPARATOR).collect();

        for (template_part, formatted_part) in
            template_path.iter().zip(formatted_path.iter())
        {
            if !template_part.is_empty() && formatted_part.is_empty() {
                return false;
            }
        }

        true
    }

    /// Checks if the provided path is a seeder template file (with .tmpl extension)
    ///
    /// # Arguments
    /// * `path` - A path to the file
    ///
    /// # Returns
    /// * `true` - if the file has the .tmpl extension
    /// * `false` - if the path is not a template file
    fn is_template_file<T: AsRef<Path>>(&self, path: T) -> bool {
        path.as_ref().file_name().and_then(|n| n.to_str()).is_some_and(|file_name| {
            file_name.len() > TEMPLATE_SUFFIX.len()
                && file_name.ends_with(TEMPLATE_SUFFIX)
        })
    }

    /// Substitutes answers into a template entry path.
    ///
    /// File and directory names must resolve completely; a path that still
    /// contains a placeholder after formatting cannot be created on disk.
    ///
    /// # Arguments
    /// * `template_entry` - The template path to format
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The formatted path or an error
    fn format_template_entry(&self, template_entry: &PathBuf) -> Result<PathBuf> {
        let formatted_entry =
            self.engine.format_path(template_entry, self.answers)?;

        if !self.has_valid_formatted_path_parts(
            path_to_str(template_entry)?,
            &formatted_entry,
        ) {
            return Err(Error::ProcessError {
                source_path: formatted_entry,
                e: "the formatted path is not valid".to_string(),
            });
        }

        let unresolved = formatter::unresolved_names(&formatted_entry)?;
        if !unresolved.is_empty() {
            return Err(Error::ProcessError {
                source_path: formatted_entry,
                e: format!(
                    "the path contains unresolved placeholders: {}",
                    unresolved.join(", ")
                ),
            });
        }

        Ok(PathBuf::from(formatted_entry))
    }

    /// Removes the `.tmpl` suffix from a template file path.
    fn remove_template_suffix(&self, target_path: &PathBuf) -> Result<PathBuf> {
        let target_path_str = path_to_str(target_path)?;
        let target =
            target_path_str.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(target_path_str);

        Ok(PathBuf::from(target))
    }

    /// Constructs the target path for a formatted entry.
    ///
    /// # Arguments
    /// * `formatted_entry` - The formatted entry path
    /// * `template_entry` - The original template entry path
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The target path in the output directory
    fn get_target_path(
        &self,
        formatted_entry: &Path,
        template_entry: &Path,
    ) -> Result<PathBuf> {
        let target_path = formatted_entry
            .strip_prefix(self.template_root.as_ref())
            .map_err(|e| Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: e.to_string(),
            })?;
        Ok(self.output_root.as_ref().join(target_path))
    }

    /// Processes a template entry and determines the appropriate operation.
    ///
    /// Entries matching the ignore set are skipped. `.tmpl` files are
    /// partially formatted: placeholders with known answers are substituted
    /// and the rest stay in the written content for a later pass. Other
    /// files are copied verbatim.
    ///
    /// # Arguments
    /// * `template_entry` - The template entry to process
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The operation to perform
    pub fn process(&self, template_entry: P) -> Result<TemplateOperation> {
        let template_entry = template_entry.as_ref().to_path_buf();

        // Skip if entry is in .seederignore
        if self.seederignore.is_match(&template_entry) {
            return Ok(TemplateOperation::Ignore { source: template_entry });
        }

        let formatted_entry = self.format_template_entry(&template_entry)?;
        let target_path = self.get_target_path(&formatted_entry, &template_entry)?;
        let target_exists = target_path.exists();

        // Handle different types of entries
        match (template_entry.is_file(), self.is_template_file(&formatted_entry)) {
            // Template file
            (true, true) => {
                let template_content = fs::read_to_string(&template_entry)?;
                let content = self.engine.format(&template_content, self.answers)?;

                Ok(TemplateOperation::Write {
                    target: self.remove_template_suffix(&target_path)?,
                    content,
                    target_exists,
                })
            }
            // Regular file
            (true, false) => Ok(TemplateOperation::Copy {
                source: template_entry,
                target: target_path,
                target_exists,
            }),
            // Directory
            _ => Ok(TemplateOperation::CreateDirectory {
                target: target_path,
                target_exists,
            }),
        }
    }
}
