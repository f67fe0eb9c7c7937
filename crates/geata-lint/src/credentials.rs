//! Declared Credential Checks
//!
//! Cross-checks the manifest's `required_credentials` against the platform's
//! credential-type taxonomy. Membership in the known sets is advisory, so an
//! unrecognized type is a warning, not an error.

use geata_schema::credentials::{is_known_generic, is_known_predefined};
use geata_schema::Manifest;

use crate::report::Report;

/// Validate declared credentials, if the manifest declares any
pub fn check_required_credentials(manifest: &Manifest, report: &mut Report) {
    let Some(credentials) = &manifest.required_credentials else {
        return;
    };

    for credential in credentials {
        let name = credential.name.as_deref().unwrap_or_default();
        let auth_type = credential.auth_type.as_deref().unwrap_or_default();
        let credential_type = credential.credential_type.as_deref().unwrap_or_default();

        if auth_type != "predefined" && auth_type != "generic" {
            report.error(format!(
                "Credential \"{}\" must have auth_type: \"predefined\" or \"generic\"",
                name
            ));
        }

        if credential_type.is_empty() {
            report.error(format!(
                "Credential \"{}\" must have credential_type specified",
                name
            ));
        }

        if auth_type == "predefined" && !is_known_predefined(credential_type) {
            report.warning(format!(
                "Credential \"{}\" has auth_type \"predefined\" but credential_type \"{}\" is not a known predefined type",
                name, credential_type
            ));
        }
        if auth_type == "generic" && !is_known_generic(credential_type) {
            report.warning(format!(
                "Credential \"{}\" has auth_type \"generic\" but credential_type \"{}\" is not a known generic type",
                name, credential_type
            ));
        }
    }
}
