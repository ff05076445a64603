use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Malformed placeholder syntax in a template string.
    #[error("Malformed template: {0}.")]
    ParseError(String),

    /// Positional placeholders such as `{0}` are rejected; substitution
    /// operates on named placeholders only.
    #[error("Unsupported positional placeholder '{{{0}}}'; only named placeholders are supported.")]
    UnsupportedPlaceholderError(String),

    #[error("No configuration file found in '{template_dir}'. Tried: {config_files}.")]
    ConfigNotFoundError { template_dir: String, config_files: String },

    #[error("Failed to parse config file '{config_file}'. Original error: {e}")]
    ConfigParseError { config_file: String, e: String },

    #[error("Failed to parse .seederignore file. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Prompt error: {0}.")]
    DialoguerError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with seeder's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
