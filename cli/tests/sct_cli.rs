use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn sctkit() -> Command {
    Command::cargo_bin("sctkit").unwrap()
}

/// Encodes the fixture into `dir` and returns the binary path.
fn encode_fixture(dir: &TempDir, raw: bool) -> PathBuf {
    let out = dir.path().join(if raw { "list.bin" } else { "ext.bin" });
    let mut cmd = sctkit();
    cmd.args(["encode", &fixture_path("sct_list.json"), "--binary-output"])
        .arg(&out);
    if raw {
        cmd.arg("--raw");
    }
    cmd.assert().success();
    out
}

#[test]
fn test_encode_writes_extension_value() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sct_output.bin");

    sctkit()
        .args(["encode", &fixture_path("sct_list.json"), "--binary-output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# The following value can be used in the certificate config:",
        ))
        // list length 0xb1, first record length 0x76
        .stdout(predicate::str::contains(
            "1.3.6.1.4.1.11129.2.4.2 = critical,ASN1:FORMAT:HEX,OCTETSTRING:00b100760",
        ));

    let bytes = fs::read(&out).unwrap();
    // OCTET STRING of 179 bytes
    assert_eq!(&[0x04, 0x81, 0xb3, 0x00, 0xb1], &bytes[..5]);
    assert_eq!(182, bytes.len());
}

#[test]
fn test_encode_raw_for_certificate_oid() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("list.bin");
    let single = r#"{
        "sct_version": 0,
        "id": "qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqo=",
        "timestamp": 1746057600000,
        "extensions": "",
        "signature": "BAMABLu7u7s="
    }"#;

    sctkit()
        .args(["encode", "--raw", "--oid", "cert", "--binary-output"])
        .arg(&out)
        .write_stdin(single)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1.3.6.1.4.1.11129.2.4.5 = critical,ASN1:FORMAT:HEX,OCTETSTRING:00350033",
        ));

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&[0x00, 0x35, 0x00, 0x33], &bytes[..4]);
    assert_eq!(0x37, bytes.len());
}

#[test]
fn test_encode_wrapped_matches_raw() {
    let dir = TempDir::new().unwrap();
    let wrapped = fs::read(encode_fixture(&dir, false)).unwrap();
    let raw = fs::read(encode_fixture(&dir, true)).unwrap();

    assert_eq!(&[0x04, 0x81, 0xb3], &wrapped[..3]);
    assert_eq!(raw.as_slice(), &wrapped[3..]);
}

#[test]
fn test_decode_round_trips_fixture() {
    let dir = TempDir::new().unwrap();
    let out = encode_fixture(&dir, false);

    let assert = sctkit()
        .args(["decode"])
        .arg(&out)
        .assert()
        .success();

    let decoded: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let expected: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture_path("sct_list.json")).unwrap())
            .unwrap();
    assert_eq!(expected, decoded);
}

#[test]
fn test_decode_raw_text() {
    let dir = TempDir::new().unwrap();
    let out = encode_fixture(&dir, true);

    sctkit()
        .args(["decode", "--raw", "-o", "text"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Version   : v1 (0x0)"))
        .stdout(predicate::str::contains("Log ID    : 8F:3B:1F:EF"))
        .stdout(predicate::str::contains(
            "Timestamp : May 14 23:47:46.681 2025 GMT",
        ))
        .stdout(predicate::str::contains("Signature : ecdsa-with-SHA256"))
        .stdout(predicate::str::contains("Extensions: CC:CC:CC:CC"));
}

#[test]
fn test_decode_yaml() {
    sctkit()
        .args(["decode", "--raw", "-o", "yaml"])
        .write_stdin(vec![0x00, 0x00])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_decode_empty_list() {
    sctkit()
        .args(["decode", "-o", "text"])
        .write_stdin(vec![0x04, 0x02, 0x00, 0x00])
        .assert()
        .success()
        .stdout(predicate::str::contains("No SCTs found"));

    sctkit()
        .args(["decode"])
        .write_stdin(vec![0x04, 0x02, 0x00, 0x00])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_decode_truncated_input_fails() {
    // record declares 0x76 bytes, 2 present
    sctkit()
        .args(["decode", "--raw"])
        .write_stdin(vec![0x00, 0x04, 0x00, 0x76, 0x00, 0x8f])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "Error: malformed SCT list: SCT record is truncated (2 bytes available)",
        ));
}

#[test]
fn test_decode_missing_file_fails() {
    sctkit()
        .args(["decode", "does-not-exist.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input file 'does-not-exist.bin' does not exist",
        ));
}

#[test]
fn test_encode_missing_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sct_output.bin");

    sctkit()
        .args(["encode", "does-not-exist.json", "--binary-output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!out.exists());
}

#[test]
fn test_encode_invalid_record_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sct_output.bin");
    let short_id = r#"[{
        "sct_version": 0,
        "id": "qqqq",
        "timestamp": 1746057600000,
        "extensions": "",
        "signature": ""
    }]"#;

    sctkit()
        .args(["encode", "--binary-output"])
        .arg(&out)
        .write_stdin(short_id)
        .assert()
        .failure()
        .stderr(predicate::str::contains("log ID must be 32 bytes, got 3"));

    assert!(!out.exists());
}
