//! Workflow Types
//!
//! Structs for the subset of the workflow JSON the linter inspects: node
//! kinds, webhook notes, execution settings, and per-node credential
//! references.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Node type of the platform's plain webhook trigger
pub const WEBHOOK_NODE_TYPE: &str = "n8n-nodes-base.webhook";
/// Node type of the langchain webhook trigger
pub const LANGCHAIN_WEBHOOK_NODE_TYPE: &str = "@n8n/n8n-nodes-langchain.webhook";
/// Node type that sends the voice response back to the caller
pub const RESPOND_NODE_TYPE: &str = "n8n-nodes-base.respondToWebhook";

/// Workflow definition (`workflow.json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default, rename = "availableInMCP")]
    pub available_in_mcp: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default, rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Credential-type name → credential reference. BTreeMap keeps the
    /// iteration (and thus report) order deterministic.
    #[serde(default)]
    pub credentials: Option<BTreeMap<String, NodeCredential>>,
}

/// A credential reference attached to a node.
///
/// `id` distinguishes three states: field absent (`None`), explicit JSON
/// `null` (`Some(Value::Null)`), and a concrete value. Checked-in workflows
/// must carry `id: null` so they stay portable across environments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeCredential {
    #[serde(default, deserialize_with = "some_value")]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NodeCredential {
    /// True iff the checked-in `id` is the literal JSON `null`
    pub fn id_is_null(&self) -> bool {
        matches!(self.id, Some(Value::Null))
    }
}

/// Deserialize any JSON value as `Some(value)`, so that an absent field
/// (`None` via `default`) stays distinguishable from an explicit `null`.
fn some_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Workflow {
    /// First node whose type is one of the webhook trigger kinds
    pub fn webhook_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| {
            n.node_type == WEBHOOK_NODE_TYPE || n.node_type == LANGCHAIN_WEBHOOK_NODE_TYPE
        })
    }

    /// True if any node responds to the webhook caller
    pub fn has_respond_node(&self) -> bool {
        self.nodes.iter().any(|n| n.node_type == RESPOND_NODE_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_id_absent_vs_null_vs_value() {
        let absent: NodeCredential = serde_json::from_str(r#"{"name": "My Cred"}"#).unwrap();
        assert!(absent.id.is_none());
        assert!(!absent.id_is_null());

        let null: NodeCredential =
            serde_json::from_str(r#"{"id": null, "name": "My Cred"}"#).unwrap();
        assert!(null.id_is_null());

        let value: NodeCredential =
            serde_json::from_str(r#"{"id": "abc123", "name": "My Cred"}"#).unwrap();
        assert!(value.id.is_some());
        assert!(!value.id_is_null());
    }

    #[test]
    fn test_webhook_node_lookup() {
        let workflow: Workflow = serde_json::from_str(
            r#"{
                "nodes": [
                    {"type": "n8n-nodes-base.set", "name": "Set"},
                    {"type": "n8n-nodes-base.webhook", "name": "Webhook"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(workflow.webhook_node().unwrap().name, "Webhook");
        assert!(!workflow.has_respond_node());
    }

    #[test]
    fn test_settings_default_to_not_available() {
        let workflow: Workflow = serde_json::from_str(r#"{"nodes": []}"#).unwrap();
        assert!(!workflow.settings.available_in_mcp);
    }
}
