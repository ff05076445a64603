/// Handles argument parsing.
pub mod cli;

/// Constants shared across the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Partial string formatting over the `{name}` placeholder grammar.
pub mod formatter;

/// Processes .seederignore files to exclude specific paths.
pub mod ignore;

/// User input and interaction handling.
pub mod dialoguer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core template processing orchestration.
pub mod template;

/// Configuration handling for seeder templates.
pub mod config;
