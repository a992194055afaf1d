//! Codec for attribute selectors in flake uri fragments.
//!
//! An attribute path is an ordered list of names joined by `.`. Names that
//! contain a `.` (or are empty) are wrapped in double quotes; quotes cannot
//! themselves be escaped inside the fragment grammar, which is why a name
//! containing `"` is unrepresentable.

use crate::error::InstallableError;

/// Quote a single attribute name for use in a uri fragment.
///
/// Names containing a `.` are wrapped in quotes; the empty name is rendered
/// as `""` as well. Fails when the name contains a `"`.
pub fn quote_attr_name(name: &str) -> Result<String, InstallableError> {
    if name.contains('"') {
        return Err(InstallableError::MalformedAttributeName);
    }
    if name.contains('.') || name.is_empty() {
        Ok(format!("\"{name}\""))
    } else {
        Ok(name.to_owned())
    }
}

/// Quote an attribute path for use in a uri fragment.
///
/// Propagates the first [`InstallableError::MalformedAttributeName`].
pub fn quote_attr_path(attr_path: &[String]) -> Result<String, InstallableError> {
    let quoted: Vec<String> = attr_path
        .iter()
        .map(|name| quote_attr_name(name))
        .collect::<Result<_, _>>()?;
    Ok(quoted.join("."))
}

/// Parse an attribute selector from a flake uri fragment.
///
/// A selector starting with `.` is absolute and discards `prefix`; anything
/// else extends a copy of `prefix`. Inside the selector, `.` separates
/// names and `"..."` spans are taken verbatim (a `.` inside quotes does not
/// separate). A trailing `.` is ignored, matching nix: `nixpkgs#hello.` is
/// the same as `nixpkgs#hello`.
///
/// Fails with [`InstallableError::MissingClosingQuote`] when a quoted span
/// is never closed; the error carries the original selector.
pub fn parse_attr_path(selector: &str, prefix: &[String]) -> Result<Vec<String>, InstallableError> {
    let (absolute, mut rest) = match selector.strip_prefix('.') {
        Some(rest) => (true, rest),
        None => (false, selector),
    };
    let mut attr_path = if absolute { Vec::new() } else { prefix.to_vec() };

    let mut current = String::new();
    // Whether `current` was produced by a quoted span, so that a trailing
    // `""` yields an empty name instead of being dropped.
    let mut quoted = false;
    while !rest.is_empty() {
        let Some(at) = rest.find(['.', '"']) else {
            current.push_str(rest);
            attr_path.push(std::mem::take(&mut current));
            quoted = false;
            break;
        };
        current.push_str(&rest[..at]);
        let delimiter = rest.as_bytes()[at];
        rest = &rest[at + 1..];
        match delimiter {
            b'"' => {
                let Some(close) = rest.find('"') else {
                    return Err(InstallableError::MissingClosingQuote(selector.to_owned()));
                };
                current.push_str(&rest[..close]);
                quoted = true;
                rest = &rest[close + 1..];
            }
            // A `.` that ends the selector is a trailing dot and produces
            // no name; the loop simply runs out of input.
            _ => {
                attr_path.push(std::mem::take(&mut current));
                quoted = false;
            }
        }
    }
    if !current.is_empty() || quoted {
        attr_path.push(current);
    }
    Ok(attr_path)
}
