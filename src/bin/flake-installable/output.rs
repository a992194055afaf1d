use std::fmt::Display;

use flake_installable::installable::Installable;
use semver::Version;
use serde::Serialize;

use crate::error::FiError;

#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Env,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Env => "env",
        };
        write!(f, "{format}")
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// The resolved installable uri.
    Uri,
    /// The flake reference, without the fragment.
    FlakeRef,
    /// The resolved fragment, before percent-encoding.
    Fragment,
    /// The attribute path as a nix expression.
    AttrPath,
}

impl Field {
    const ALL: [Field; 4] = [Field::Uri, Field::FlakeRef, Field::Fragment, Field::AttrPath];

    fn env_key(self) -> &'static str {
        match self {
            Field::Uri => "URI",
            Field::FlakeRef => "FLAKE_REF",
            Field::Fragment => "FRAGMENT",
            Field::AttrPath => "ATTR_PATH",
        }
    }

    fn value(
        self,
        installable: &Installable,
        nix_version: Option<&Version>,
    ) -> Result<String, FiError> {
        let value = match self {
            Field::Uri => installable.to_uri(nix_version)?,
            Field::FlakeRef => installable.flake_ref().to_owned(),
            Field::Fragment => installable.fragment(nix_version)?,
            Field::AttrPath => installable.nix_attr_path(),
        };
        Ok(value)
    }
}

/// The json rendering of the selected fields; unselected fields stay out of
/// the object entirely.
#[derive(Debug, Default, Serialize)]
struct Resolved {
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flake_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attr_path: Option<String>,
}

/// Print the selected fields of the resolved installable to stdout.
///
/// Without an explicit field selection the text format prints just the uri,
/// while the structured formats carry every field.
pub(crate) fn print(
    installable: &Installable,
    nix_version: Option<&Version>,
    format: OutputFormat,
    fields: &[Field],
) -> Result<(), FiError> {
    let fields: Vec<Field> = if fields.is_empty() {
        match format {
            OutputFormat::Text => vec![Field::Uri],
            OutputFormat::Json | OutputFormat::Env => Field::ALL.to_vec(),
        }
    } else {
        fields.to_vec()
    };

    match format {
        OutputFormat::Text => {
            for field in fields {
                println!("{}", field.value(installable, nix_version)?);
            }
        }
        OutputFormat::Json => {
            let mut resolved = Resolved::default();
            for field in fields {
                let value = Some(field.value(installable, nix_version)?);
                match field {
                    Field::Uri => resolved.uri = value,
                    Field::FlakeRef => resolved.flake_ref = value,
                    Field::Fragment => resolved.fragment = value,
                    Field::AttrPath => resolved.attr_path = value,
                }
            }
            println!("{}", serde_json::to_string(&resolved)?);
        }
        OutputFormat::Env => {
            for field in fields {
                println!(
                    "{}={}",
                    field.env_key(),
                    field.value(installable, nix_version)?
                );
            }
        }
    }

    Ok(())
}
