//! An installable: a flake reference plus an attribute path into its
//! outputs, with rendering back to uri form.

use semver::Version;

use crate::attr_path::{parse_attr_path, quote_attr_path};
use crate::error::InstallableError;
use crate::fragment::{quote_url_fragment, split_uri_fragment};
use crate::version::supports_absolute_attr_path;

/// A flake reference together with the attribute path it selects.
///
/// The flake reference is opaque to this crate; only the fragment is
/// interpreted. The attribute path is always stored fully resolved, i.e.
/// relative selectors have already been joined onto their prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installable {
    flake_ref: String,
    attr_path: Vec<String>,
}

impl Installable {
    pub fn new(flake_ref: impl Into<String>, attr_path: Vec<String>) -> Self {
        Self {
            flake_ref: flake_ref.into(),
            attr_path,
        }
    }

    /// Parse a flake uri, resolving a relative or missing fragment against
    /// `prefix`.
    pub fn parse(uri: &str, prefix: &[String]) -> Result<Self, InstallableError> {
        let (flake_ref, fragment) = split_uri_fragment(uri);
        let attr_path = match fragment {
            Some(selector) => parse_attr_path(&selector, prefix)?,
            None => prefix.to_vec(),
        };
        Ok(Self::new(flake_ref, attr_path))
    }

    pub fn flake_ref(&self) -> &str {
        &self.flake_ref
    }

    pub fn attr_path(&self) -> &[String] {
        &self.attr_path
    }

    /// Render the attribute path as a fragment, before percent-encoding.
    ///
    /// For nix versions that understand it the fragment uses the absolute
    /// (leading dot) notation; older versions get the bare selector, which
    /// those versions resolve against their built-in prefixes.
    pub fn fragment(&self, nix_version: Option<&Version>) -> Result<String, InstallableError> {
        let selector = quote_attr_path(&self.attr_path)?;
        if supports_absolute_attr_path(nix_version) {
            Ok(format!(".{selector}"))
        } else {
            Ok(selector)
        }
    }

    /// Render the full installable uri, percent-encoding the fragment.
    pub fn to_uri(&self, nix_version: Option<&Version>) -> Result<String, InstallableError> {
        let fragment = quote_url_fragment(&self.fragment(nix_version)?);
        Ok(format!("{}#{}", self.flake_ref, fragment))
    }

    /// Render the attribute path as a nix expression.
    pub fn nix_attr_path(&self) -> String {
        crate::expr::quote_nix_attr_path(&self.attr_path)
    }
}
