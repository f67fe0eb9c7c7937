//! Validation Pass
//!
//! One linear run over a tool directory: required-files gate, manifest
//! checks, workflow checks, credential cross-check. The gate is the only
//! early exit; everything after it accumulates into the same report.

use std::path::Path;
use tracing::debug;

use geata_schema::{Manifest, Workflow};

use crate::loader;
use crate::report::Report;
use crate::{credentials, manifest, workflow};

/// Files every tool directory must contain
pub const REQUIRED_FILES: [&str; 3] = ["workflow.json", "manifest.json", "README.md"];

/// Validate one tool directory. Pure function of the filesystem content:
/// unchanged files produce an identical report.
pub fn validate_tool_dir(tool_dir: &str) -> Report {
    let dir = Path::new(tool_dir);
    let mut report = Report::new();

    for file in REQUIRED_FILES {
        if !dir.join(file).exists() {
            report.error(format!("Missing required file: {}", file));
        }
    }
    if !report.passed() {
        return report;
    }

    // Manifest and workflow are validated independently: a parse failure in
    // one never skips the other.
    debug!(tool_dir, "checking manifest");
    let parsed_manifest = match loader::load_json::<Manifest>(&dir.join("manifest.json")) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            report.error(format!("Invalid JSON in manifest.json: {}", e));
            None
        }
    };
    if let Some(parsed) = &parsed_manifest {
        manifest::check_manifest(parsed, tool_dir, &mut report);
    }

    debug!(tool_dir, "checking workflow");
    match loader::load_json::<Workflow>(&dir.join("workflow.json")) {
        Ok(parsed) => workflow::check_workflow(&parsed, &mut report),
        Err(e) => report.error(format!("Invalid JSON in workflow.json: {}", e)),
    }

    if let Some(parsed) = &parsed_manifest {
        credentials::check_required_credentials(parsed, &mut report);
    }

    report
}
