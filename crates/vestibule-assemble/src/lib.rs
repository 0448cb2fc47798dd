//! Build-time template assembler.
//!
//! Substitutes three configuration blobs into a base HTML document,
//! producing the deployable shell the browser loads. The base document is
//! selected by build variant; each placeholder is replaced by its blob at
//! the placeholder's first occurrence, matching the shell contract of one
//! inline configuration block per kind.
//!
//! All inputs are read and the substitution completes before the output is
//! written, so a failing build never produces a partial `index.html`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use error::AssembleError;

/// Placeholder for the deployment configuration blob.
pub const CONFIG_PLACEHOLDER: &str = "{{config}}";

/// Placeholder for the interface configuration blob.
pub const INTERFACE_CONFIG_PLACEHOLDER: &str = "{{interfaceConfig}}";

/// Placeholder for the logging configuration blob.
pub const LOGGING_CONFIG_PLACEHOLDER: &str = "{{loggingConfig}}";

/// Name of the produced shell document.
pub const OUTPUT_FILE: &str = "index.html";

/// Build variant selecting the base document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Development build, from `base.html`.
    Development,

    /// Production build, from `base_prod.html`.
    Production,
}

impl Variant {
    /// Select the variant from the first command-line argument.
    ///
    /// `prod` and `production` select [`Variant::Production`]; any other or
    /// absent argument selects [`Variant::Development`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("prod" | "production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// File name of the base document for this variant.
    pub fn base_file(self) -> &'static str {
        match self {
            Self::Development => "base.html",
            Self::Production => "base_prod.html",
        }
    }
}

/// Substitute the three configuration blobs into the base document.
///
/// Each placeholder is replaced exactly once, at its first occurrence.
pub fn substitute(
    base: &str,
    config: &str,
    interface_config: &str,
    logging_config: &str,
) -> String {
    base.replacen(CONFIG_PLACEHOLDER, config, 1)
        .replacen(INTERFACE_CONFIG_PLACEHOLDER, interface_config, 1)
        .replacen(LOGGING_CONFIG_PLACEHOLDER, logging_config, 1)
}

/// Assemble the shell document under `root` and return the output path.
///
/// Reads the variant's base document plus `config.js`,
/// `interface_config.js`, and `logging_config.js` from `root`, substitutes
/// the placeholders, and writes [`OUTPUT_FILE`] next to them.
///
/// # Errors
///
/// Returns [`AssembleError`] if any input cannot be read or the output
/// cannot be written; no output file is produced on failure.
pub fn assemble(root: &Path, variant: Variant) -> Result<PathBuf, AssembleError> {
    let base = read(root, variant.base_file())?;
    let config = read(root, "config.js")?;
    let interface_config = read(root, "interface_config.js")?;
    let logging_config = read(root, "logging_config.js")?;

    let result = substitute(&base, &config, &interface_config, &logging_config);

    let output = root.join(OUTPUT_FILE);
    fs::write(&output, result)
        .map_err(|source| AssembleError::Write { path: output.clone(), source })?;

    Ok(output)
}

fn read(root: &Path, name: &str) -> Result<String, AssembleError> {
    let path = root.join(name);
    fs::read_to_string(&path).map_err(|source| AssembleError::Read { path, source })
}
