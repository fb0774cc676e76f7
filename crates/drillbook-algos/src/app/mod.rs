//! Application layer - Use case implementations
//!
//! This module maps text arguments onto domain routines and evaluates batches of cases.

pub mod catalog;
pub mod runner;
