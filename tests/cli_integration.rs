use std::process::Command;

fn bin() -> String {
    env!("CARGO_BIN_EXE_gamegenie").to_string()
}

fn stdout_of(args: &[&str]) -> (bool, String, String) {
    let out = Command::new(bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (
        out.status.success(),
        String::from_utf8(out.stdout).unwrap(),
        String::from_utf8(out.stderr).unwrap(),
    )
}

#[test]
fn cli_decode_prints_patch() {
    let (ok, stdout, stderr) = stdout_of(&["decode", "zexpygla"]);
    assert!(ok, "{stderr}");
    assert_eq!(stdout.trim(), "[0x94A7] returns 0x02 if read as 0x03");
    assert!(stderr.is_empty(), "{stderr}");
}

#[test]
fn cli_decode_warns_on_unflagged_code() {
    let (ok, stdout, stderr) = stdout_of(&["decode", "SXIOPO"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "[0x91D9] returns 0xAD");
    assert!(stderr.contains("3rd character"), "{stderr}");

    let (ok, _, stderr) = stdout_of(&["--quiet", "decode", "SXIOPO"]);
    assert!(ok);
    assert!(stderr.is_empty(), "{stderr}");
}

#[test]
fn cli_decode_rejects_bad_code() {
    let (ok, stdout, stderr) = stdout_of(&["decode", "SXIOP"]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("6 or 8"), "{stderr}");
}

#[test]
fn cli_encode_roundtrip() {
    let (ok, code, _) = stdout_of(&["encode", "--address", "94A7", "--data", "2", "--comp", "3"]);
    assert!(ok);
    assert_eq!(code.trim(), "ZEXPYGLA");

    let (ok, decoded, _) = stdout_of(&["decode", code.trim()]);
    assert!(ok);
    assert_eq!(decoded.trim(), "[0x94A7] returns 0x02 if read as 0x03");
}

#[test]
fn cli_encode_alt_variant() {
    let (ok, code, _) = stdout_of(&["encode", "-a", "0x91D9", "-d", "0xAD", "--alt"]);
    assert!(ok);
    assert_eq!(code.trim(), "SXIOPO");
}

#[test]
fn cli_encode_rejects_out_of_range() {
    let (ok, stdout, stderr) = stdout_of(&["encode", "--address", "7FFF", "--data", "00"]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("'address'"), "{stderr}");
}

#[test]
fn cli_json_output() {
    let (ok, stdout, _) = stdout_of(&["--json", "decode", "GOSSIP"]);
    assert!(ok);
    assert!(stdout.contains("\"code\": \"GOSSIP\""), "{stdout}");
    assert!(stdout.contains("\"address\": 53725"), "{stdout}");
    assert!(stdout.contains("\"comp\": null"), "{stdout}");
}

#[test]
fn cli_config_works() {
    let out = Command::new(bin()).arg("config").output().unwrap();
    assert!(out.status.success());
}
