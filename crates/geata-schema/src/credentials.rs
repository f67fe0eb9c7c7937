//! Credential Type Taxonomy
//!
//! The platform's known credential type identifiers. Predefined types name a
//! specific service integration; generic types name an auth mechanism. Both
//! sets are advisory: a declaration outside them is flagged, not rejected.

/// Service-specific credential types the platform ships
pub const PREDEFINED_TYPES: [&str; 9] = [
    "githubApi",
    "slackApi",
    "notionApi",
    "googleApi",
    "discordApi",
    "spotifyApi",
    "twilioApi",
    "telegramApi",
    "homeAssistantApi",
];

/// Generic auth-mechanism credential types
pub const GENERIC_TYPES: [&str; 6] = [
    "httpHeaderAuth",
    "httpBasicAuth",
    "httpDigestAuth",
    "oAuth2Api",
    "sshPassword",
    "sshPrivateKey",
];

pub fn is_known_predefined(credential_type: &str) -> bool {
    PREDEFINED_TYPES.contains(&credential_type)
}

pub fn is_known_generic(credential_type: &str) -> bool {
    GENERIC_TYPES.contains(&credential_type)
}
