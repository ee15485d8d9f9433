//! SWT updater library
//!
//! Resolves the latest SWT release on the Eclipse download portal and
//! installs its platform jars into a project-local Maven repository.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
