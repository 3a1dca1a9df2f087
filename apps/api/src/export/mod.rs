// Kit export: pure serializers producing standalone download documents.
// Both renderers are deterministic and total for any well-formed kit.

pub mod html;
pub mod markdown;

/// Builds the suggested download filename: `interview-prep-<slug>.<ext>`.
pub fn export_filename(role: &str, extension: &str) -> String {
    format!("interview-prep-{}.{extension}", role_slug(role))
}

/// Filename-safe derivation of the role: lower-cased, whitespace runs
/// collapsed to single hyphens.
fn role_slug(role: &str) -> String {
    role.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
