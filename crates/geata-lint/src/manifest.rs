//! Manifest Checks
//!
//! Field presence, voice trigger counts, category membership, author
//! attribution, folder placement, and the kebab-case naming rule.
//!
//! Every check fires only when its input field is present; a missing field is
//! reported once by the presence pass and not again by downstream rules.

use geata_schema::manifest::{is_kebab_case, Manifest, VALID_CATEGORIES};

use crate::report::Report;

/// Run all manifest checks (the manifest already parsed successfully)
pub fn check_manifest(manifest: &Manifest, tool_dir: &str, report: &mut Report) {
    let required = [
        ("name", Manifest::has(&manifest.name)),
        ("version", Manifest::has(&manifest.version)),
        ("description", Manifest::has(&manifest.description)),
        ("category", Manifest::has(&manifest.category)),
        ("voice_triggers", manifest.voice_triggers.is_some()),
        ("author", manifest.author.is_some()),
    ];
    for (field, present) in required {
        if !present {
            report.error(format!("Manifest missing required field: {}", field));
        }
    }

    // Both length rules are evaluated independently: an empty list records the
    // error and the warning.
    if let Some(triggers) = &manifest.voice_triggers {
        if triggers.is_empty() {
            report.error("Must include at least one voice trigger example");
        }
        if triggers.len() < 2 {
            report.warning("Consider adding more voice trigger examples (at least 2 recommended)");
        }
    }

    if let Some(category) = present_str(&manifest.category) {
        if !VALID_CATEGORIES.contains(&category) {
            report.error(format!(
                "Invalid category: {}. Must be one of: {}",
                category,
                VALID_CATEGORIES.join(", ")
            ));
        }
    }

    if let Some(author) = &manifest.author {
        if !Manifest::has(&author.github) {
            report.error("Author must include github username");
        }
    }

    // Folder placement: last path segment must equal the tool name, the
    // segment above it must equal the category.
    let normalized = tool_dir.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').filter(|p| !p.is_empty()).collect();
    let folder_name = parts.last().copied().unwrap_or_default();
    let folder_category = parts
        .len()
        .checked_sub(2)
        .and_then(|i| parts.get(i))
        .copied()
        .unwrap_or_default();

    if let Some(name) = present_str(&manifest.name) {
        if folder_name != name {
            report.error(format!(
                "Folder name \"{}\" doesn't match manifest name \"{}\"",
                folder_name, name
            ));
        }
    }

    if let Some(category) = present_str(&manifest.category) {
        if folder_category != category {
            report.error(format!(
                "Folder category \"{}\" doesn't match manifest category \"{}\". Move to tools/{}/{}/",
                folder_category,
                category,
                category,
                manifest.name.as_deref().unwrap_or_default()
            ));
        }
    }

    if let Some(name) = present_str(&manifest.name) {
        if !is_kebab_case(name) {
            report.error(format!(
                "Tool name \"{}\" must be kebab-case (lowercase letters, numbers, hyphens only)",
                name
            ));
        }
    }
}

fn present_str(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
