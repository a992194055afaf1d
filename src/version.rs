//! Extracting a nix version from free-form text and gating features on it.

use semver::Version;

/// The nix release that introduced absolute attribute path notation in
/// installables (leading `.` in the fragment). See NixOS/nix#8852.
pub const NIX_ABSOLUTE_ATTR_PATH_VERSION: Version = Version::new(2, 19, 0);

/// Extract the first `major.minor.patch` triple from a version string.
///
/// Scans for the leftmost substring of the form `\d+\.\d+\.\d+`, so the
/// usual `nix (Nix) 2.18.1` banner works as well as a bare `2.18.1`.
/// Returns `None` when no triple exists; callers treat an unknown version
/// as "assume modern".
pub fn parse_version(text: &str) -> Option<Version> {
    let bytes = text.as_bytes();
    let mut at = 0;
    while at < bytes.len() {
        if !bytes[at].is_ascii_digit() {
            at += 1;
            continue;
        }
        if let Some(version) = match_triple(&text[at..]) {
            return Some(version);
        }
        // No triple starts at this digit run, skip past it.
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
    }
    None
}

/// Match `\d+\.\d+\.\d+` anchored at the start of `text`.
fn match_triple(text: &str) -> Option<Version> {
    let (major, rest) = take_number(text)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, rest) = take_number(rest)?;
    let rest = rest.strip_prefix('.')?;
    let (patch, _) = take_number(rest)?;
    Some(Version::new(major, minor, patch))
}

fn take_number(text: &str) -> Option<(u64, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, rest) = text.split_at(end);
    let number = digits.parse().ok()?;
    Some((number, rest))
}

/// Whether the given nix version understands absolute attribute paths.
///
/// An unknown version is assumed to support them; reversing this polarity
/// would silently break environments without a detectable version string.
pub fn supports_absolute_attr_path(version: Option<&Version>) -> bool {
    match version {
        None => true,
        Some(version) => *version >= NIX_ABSOLUTE_ATTR_PATH_VERSION,
    }
}
