//! Workflow Checks
//!
//! Trigger presence, webhook description, voice response node, MCP exposure
//! flag, and credential portability.

use geata_schema::Workflow;

use crate::report::Report;

/// Minimum trimmed length for a webhook node's notes to count as a
/// meaningful description
const MIN_NOTES_LEN: usize = 20;

/// Run all workflow checks (the workflow already parsed successfully)
pub fn check_workflow(workflow: &Workflow, report: &mut Report) {
    match workflow.webhook_node() {
        None => report.error("Workflow must have a webhook trigger node"),
        Some(node) => {
            let notes_len = node.notes.as_deref().map_or(0, |n| n.trim().len());
            if notes_len < MIN_NOTES_LEN {
                report.error("Webhook node must have a meaningful description in the notes field");
            }
        }
    }

    if !workflow.has_respond_node() {
        report.warning("Consider adding a \"Respond to Webhook\" node for proper voice responses");
    }

    if !workflow.settings.available_in_mcp {
        report.error("Workflow must have settings.availableInMCP: true for MCP tool access");
    }

    // Checked-in credential references must stay portable: no environment
    // credential ids, and every reference carries a display name.
    for node in &workflow.nodes {
        let Some(credentials) = &node.credentials else {
            continue;
        };
        for (credential_type, credential) in credentials {
            if !credential.id_is_null() {
                report.error(format!(
                    "Credential ID must be null for portability (node: {}, type: {})",
                    node.name, credential_type
                ));
            }
            if !credential.name.as_deref().is_some_and(|n| !n.is_empty()) {
                report.error(format!(
                    "Credential must have a name (node: {}, type: {})",
                    node.name, credential_type
                ));
            }
        }
    }
}
