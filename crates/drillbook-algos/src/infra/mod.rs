//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles case file operations.

pub mod case_io;
