//! Rendering attribute paths as nix expressions.
//!
//! Render-only: parsing nix expressions is out of scope. Names that do not
//! match the nix identifier grammar are emitted as double-quoted strings;
//! nix string syntax is close enough to json that the json rendering is
//! reused, with `$` escaped so the result can never interpolate.

/// Render a string as a nix string literal.
pub fn quote_nix_string(s: &str) -> String {
    let quoted = serde_json::Value::String(s.to_owned()).to_string();
    quoted.replace('$', "\\$")
}

/// True for names matching the nix identifier grammar
/// `[A-Za-z_][A-Za-z0-9_'-]*`.
fn is_nix_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '-'))
}

/// Render an attribute name, quoting it unless it is a valid identifier.
pub fn quote_nix_identifier(name: &str) -> String {
    if is_nix_identifier(name) {
        name.to_owned()
    } else {
        quote_nix_string(name)
    }
}

/// Render an attribute path as a nix expression selecting that path.
pub fn quote_nix_attr_path(attr_path: &[String]) -> String {
    attr_path
        .iter()
        .map(|name| quote_nix_identifier(name))
        .collect::<Vec<_>>()
        .join(".")
}
