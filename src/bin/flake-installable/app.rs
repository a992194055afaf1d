use flake_installable::attr_path::parse_attr_path;
use flake_installable::fragment::split_uri_fragment;
use flake_installable::installable::Installable;
use flake_installable::version::parse_version;
use semver::Version;

use crate::cli::CliArgs;
use crate::error::FiError;
use crate::{nix, output};

/// The flake output attribute that holds the configurations.
const CONFIGURATIONS_ATTR: &str = "configurations";

pub(crate) fn run(args: &CliArgs) -> Result<(), FiError> {
    let nix_version = resolve_version(args);
    tracing::debug!("Assuming nix version: {nix_version:?}");

    let (flake_ref, fragment) = split_uri_fragment(args.flake_uri());
    let attr_path = match fragment {
        Some(selector) => {
            // Absolute selectors never consult the prefix; resolve it
            // lazily so nix is not spawned when its output is unused.
            let prefix = if selector.starts_with('.') {
                Vec::new()
            } else {
                config_prefix(args)?
            };
            parse_attr_path(&selector, &prefix)?
        }
        None => {
            let mut attr_path = config_prefix(args)?;
            attr_path.push(resolve_hostname(args)?);
            attr_path
        }
    };

    let installable = Installable::new(flake_ref, attr_path);
    output::print(
        &installable,
        nix_version.as_ref(),
        args.output_format(),
        args.output_fields(),
    )?;

    Ok(())
}

/// The nix version to gate features on, from the cli or from the nix binary.
///
/// A missing nix binary or an unparsable banner both yield `None`, which the
/// version gate treats as "assume modern".
fn resolve_version(args: &CliArgs) -> Option<Version> {
    let banner = match args.nix_version() {
        Some(version) => version.to_owned(),
        None => match nix::version() {
            Ok(banner) => banner,
            Err(err) => {
                tracing::warn!("Could not query the nix version: {err}");
                return None;
            }
        },
    };
    parse_version(&banner)
}

/// The attribute path prefix relative selectors resolve against.
fn config_prefix(args: &CliArgs) -> Result<Vec<String>, FiError> {
    let system = match args.system() {
        Some(system) => system.to_owned(),
        None => nix::current_system()?,
    };
    Ok(vec![CONFIGURATIONS_ATTR.to_owned(), system])
}

fn resolve_hostname(args: &CliArgs) -> Result<String, FiError> {
    if let Some(hostname) = args.hostname() {
        return Ok(hostname.to_owned());
    }
    if let Ok(hostname) = std::env::var("HOSTNAME")
        && !hostname.is_empty()
    {
        return Ok(hostname);
    }
    if let Ok(hostname) = std::fs::read_to_string("/etc/hostname") {
        let hostname = hostname.trim();
        if !hostname.is_empty() {
            return Ok(hostname.to_owned());
        }
    }
    Err(FiError::Error(
        "could not determine the hostname, pass --hostname".to_owned(),
    ))
}
