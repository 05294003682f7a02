use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::predicate;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn write_exec_script(path: &Path, body: &str) {
    fs::write(path, body).expect("write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }
}

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn passing_suite_exits_zero_with_valid_report() {
    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(fixtures_root().join("all_suite.yml"))
        .arg("--resources")
        .arg(fixtures_root())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""valid": true"#));
}

#[test]
fn failing_suite_exits_two_and_lists_every_finding() {
    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(fixtures_root().join("failing_suite.yml"))
        .arg("--resources")
        .arg(fixtures_root())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""valid": false"#))
        .stdout(predicate::str::contains("hobbies"))
        .stdout(predicate::str::contains("value_mismatch"));
}

#[test]
fn malformed_suite_exits_three_with_input_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let suite_path = dir.path().join("suite.yml");
    fs::write(
        &suite_path,
        "tests:\n  - mode: banana\n    data:\n      resource: /person.json\n    expects:\n      - name\n",
    )
    .expect("write suite");

    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(&suite_path)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("input_usage_error"))
        .stdout(predicate::str::contains("invalid mode"));
}

#[test]
fn missing_payload_exits_one_with_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let suite_path = dir.path().join("suite.yml");
    fs::write(
        &suite_path,
        "tests:\n  - mode: structure\n    data:\n      resource: /absent.json\n    expects:\n      - name\n",
    )
    .expect("write suite");

    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(&suite_path)
        .arg("--resources")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("load_error"));
}

#[test]
fn request_payloads_flow_through_the_http_client() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shim = dir.path().join("fake-xh");
    write_exec_script(
        &shim,
        "#!/bin/sh\necho '{\"name\": \"ada\", \"age\": 64}'\n",
    );

    let suite_path = dir.path().join("suite.yml");
    fs::write(
        &suite_path,
        concat!(
            "config:\n",
            "  base_url: http://localhost\n",
            "  port: 8080\n",
            "tests:\n",
            "  - mode: type\n",
            "    data:\n",
            "      request:\n",
            "        uri: /people/1\n",
            "        method: GET\n",
            "        headers:\n",
            "          - \"Accept: application/json\"\n",
            "    expects:\n",
            "      - name: string\n",
            "      - age: int\n",
        ),
    )
    .expect("write suite");

    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(&suite_path)
        .env("JSONVET_XH_BIN", &shim)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""valid": true"#));
}

#[test]
fn http_failure_aborts_the_run_with_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shim = dir.path().join("fake-xh");
    write_exec_script(&shim, "#!/bin/sh\necho 'HTTP 404 Not Found' >&2\nexit 4\n");

    let suite_path = dir.path().join("suite.yml");
    fs::write(
        &suite_path,
        concat!(
            "tests:\n",
            "  - mode: structure\n",
            "    data:\n",
            "      request:\n",
            "        uri: http://localhost/people/404\n",
            "        method: GET\n",
            "    expects:\n",
            "      - name\n",
        ),
    )
    .expect("write suite");

    assert_cmd::cargo::cargo_bin_cmd!("jsonvet")
        .arg("run")
        .arg("--suite")
        .arg(&suite_path)
        .env("JSONVET_XH_BIN", &shim)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("load_error"))
        .stdout(predicate::str::contains("404"));
}
