//! Template processing engine for seeder
//!
//! This module contains the core template processing components:
//! - `operation`: Defines operations to be performed on templates
//! - `processor`: Contains the logic for processing template files and directories

pub mod operation;
pub mod processor;
