pub mod credentials;
pub mod manifest;
pub mod workflow;

pub use manifest::{Author, CredentialRequirement, Manifest, VALID_CATEGORIES};
pub use workflow::{Node, NodeCredential, Settings, Workflow};
