use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("flake-installable").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[rstest]
#[case("", "", "", "", "#.configurations.\"\".\"\"")]
#[case("flake", "", "currentSystem", "default", "flake#.configurations.currentSystem.default")]
#[case(
    "flake#machine",
    "",
    "currentSystem",
    "default",
    "flake#.configurations.currentSystem.machine"
)]
#[case("flake#.machine", "", "currentSystem", "default", "flake#.machine")]
#[case(
    "flake",
    "nix (Nix) 2.18.0",
    "currentSystem",
    "default",
    "flake#configurations.currentSystem.default"
)]
#[case("flake#.machine", "2.18.0", "currentSystem", "default", "flake#machine")]
fn resolves_uri(
    #[case] flake_uri: &str,
    #[case] nix_version: &str,
    #[case] system: &str,
    #[case] hostname: &str,
    #[case] expected: &str,
) {
    cli()
        .arg(flake_uri)
        .arg("--nix-version")
        .arg(nix_version)
        .arg("--system")
        .arg(system)
        .arg("--hostname")
        .arg(hostname)
        .assert()
        .success()
        .stdout(format!("{expected}\n"));
}

#[test]
fn missing_closing_quote_fails() {
    cli()
        .arg("flake#\"")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing closing quote"));
}

#[rstest]
#[case("\"", "ok")]
#[case("ok", "\"")]
fn unquotable_default_fails(#[case] system: &str, #[case] hostname: &str) {
    cli()
        .arg("flake")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg(system)
        .arg("--hostname")
        .arg(hostname)
        .assert()
        .failure()
        .stderr(predicate::str::contains("attribute name"));
}

#[test]
fn json_output_carries_all_fields() {
    cli()
        .arg("flake")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg("currentSystem")
        .arg("--hostname")
        .arg("default")
        .arg("--output-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"uri\":\"flake#.configurations.currentSystem.default\"",
        ))
        .stdout(predicate::str::contains("\"flake_ref\":\"flake\""))
        .stdout(predicate::str::contains(
            "\"fragment\":\".configurations.currentSystem.default\"",
        ))
        .stdout(predicate::str::contains(
            "\"attr_path\":\"configurations.currentSystem.default\"",
        ));
}

// Unselected fields are absent from the json object, not null.
#[test]
fn json_output_respects_field_selection() {
    cli()
        .arg("flake")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg("currentSystem")
        .arg("--hostname")
        .arg("default")
        .arg("--output-format")
        .arg("json")
        .arg("--output-fields")
        .arg("uri,flake-ref")
        .assert()
        .success()
        .stdout("{\"uri\":\"flake#.configurations.currentSystem.default\",\"flake_ref\":\"flake\"}\n");
}

#[test]
fn env_output_carries_all_fields() {
    cli()
        .arg("flake")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg("currentSystem")
        .arg("--hostname")
        .arg("default")
        .arg("--output-format")
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "URI=flake#.configurations.currentSystem.default\n",
        ))
        .stdout(predicate::str::contains("FLAKE_REF=flake\n"));
}

#[test]
fn output_fields_selects_and_orders() {
    cli()
        .arg("flake")
        .arg("--nix-version")
        .arg("")
        .arg("--system")
        .arg("currentSystem")
        .arg("--hostname")
        .arg("default")
        .arg("--output-fields")
        .arg("flake-ref,attr-path")
        .assert()
        .success()
        .stdout("flake\nconfigurations.currentSystem.default\n");
}

#[test]
fn version_flag_prints_package_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_mentions_defaults() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--nix-version"))
        .stdout(predicate::str::contains("--output-format"));
}
