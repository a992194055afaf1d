use std::process::Command;

use crate::error::FiError;

/// Arguments prepended to every nix invocation; the commands used here are
/// still behind the `nix-command` and `flakes` experimental features on
/// older installations.
const NIX_COMMAND: [&str; 3] = ["nix", "--extra-experimental-features", "nix-command flakes"];

/// Run the nix command and capture stdout.
pub(crate) fn run_nix(args: &[&str]) -> Result<String, FiError> {
    let (program, base_args) = (NIX_COMMAND[0], &NIX_COMMAND[1..]);
    let output = Command::new(program).args(base_args).args(args).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FiError::Error(format!(
            "nix {} failed: {}",
            args.join(" "),
            stderr.trim_end()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// The nix version banner, e.g. `nix (Nix) 2.18.1`.
pub(crate) fn version() -> Result<String, FiError> {
    run_nix(&["--version"])
}

/// The value of `builtins.currentSystem`.
pub(crate) fn current_system() -> Result<String, FiError> {
    run_nix(&[
        "eval",
        "--raw",
        "--no-pure-eval",
        "--option",
        "eval-system",
        "",
        "--expr",
        "builtins.currentSystem",
    ])
}
