use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HELLO_JSON: &str =
    r#"{"string_item":"hello","number_item":1.5,"integer_item":42,"bool_item":true,"array_item":[1,2,3]}"#;

const HELLO_XML: &str = "<TypeHolderExample><string_item>hello</string_item>\
    <number_item>1.5</number_item><integer_item>42</integer_item><bool_item>true</bool_item>\
    <array_item>1</array_item><array_item>2</array_item><array_item>3</array_item>\
    </TypeHolderExample>";

const HELLO_DESCRIPTION: &str = "string_item: \"hello\"
number_item: 1.5
integer_item: 42
bool_item: true
array_item: [1, 2, 3]
";

fn cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.arg("--config").arg(config_dir.path().join("config.toml"));
    cmd
}

fn hello_args() -> [&'static str; 9] {
    [
        "--string-item",
        "hello",
        "--number-item",
        "1.5",
        "--integer-item",
        "42",
        "--bool-item",
        "--array-item",
        "1,2,3",
    ]
}

fn write_config(dir: &Path, default_format: &str) {
    fs::write(
        dir.join("config.toml"),
        format!("version = 0.1\ndefault_format = \"{}\"\n", default_format),
    )
    .unwrap();
}

#[test]
fn it_output_version() {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();

    let assert = cmd.args(["-V"]).assert();

    assert.success().stdout("petstore-cli 0.1.0\n");
}

#[test]
fn it_encode_to_json() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir).arg("encode").args(hello_args()).assert();

    assert.success().stdout(format!("{}\n", HELLO_JSON));
}

#[test]
fn it_encode_to_xml() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir)
        .args(["encode", "-f", "xml"])
        .args(hello_args())
        .assert();

    assert.success().stdout(format!("{}\n", HELLO_XML));
}

#[test]
fn it_encode_negative_numbers_and_no_array() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir)
        .args([
            "encode",
            "--string-item",
            "neg",
            "--number-item",
            "-0.5",
            "--integer-item",
            "-7",
        ])
        .assert();

    assert.success().stdout(
        "{\"string_item\":\"neg\",\"number_item\":-0.5,\"integer_item\":-7,\"bool_item\":false,\"array_item\":[]}\n",
    );
}

#[test]
fn it_refuse_an_unknown_format() {
    let dir = tempfile::tempdir().unwrap();

    let output = cli(&dir)
        .args(["encode", "-f", "yaml"])
        .args(hello_args())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown format \"yaml\""), "{}", stderr);
}

#[test]
fn it_decode_from_stdin() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir)
        .args(["decode", "-f", "json"])
        .write_stdin(HELLO_JSON)
        .assert();

    assert.success().stdout(HELLO_DESCRIPTION);
}

#[test]
fn it_decode_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.xml");
    fs::write(&input, HELLO_XML).unwrap();

    let assert = cli(&dir)
        .args(["decode", "-f", "xml", "-i"])
        .arg(&input)
        .assert();

    assert.success().stdout(HELLO_DESCRIPTION);
}

#[test]
fn it_use_the_configured_default_format() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "xml");

    let assert = cli(&dir).arg("decode").write_stdin(HELLO_XML).assert();

    assert.success().stdout(HELLO_DESCRIPTION);
}

#[test]
fn it_exit_with_error_if_the_input_file_does_not_exist() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir)
        .args(["decode", "-i"])
        .arg(dir.path().join("missing.json"))
        .assert();

    assert
        .failure()
        .code(1)
        .stdout("")
        .stderr("ERROR: input file does not exist\n");
}

#[test]
fn it_exit_with_error_on_a_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    let payload = r#"{"string_item":"hello","number_item":1.5,"integer_item":"forty-two","bool_item":true,"array_item":[]}"#;

    let output = cli(&dir)
        .args(["decode", "-f", "json"])
        .write_stdin(payload)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: DecodingError"), "{}", stderr);
}

#[test]
fn it_convert_json_to_an_xml_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.json");
    let output = dir.path().join("hello.xml");
    fs::write(&input, HELLO_JSON).unwrap();

    let assert = cli(&dir)
        .args(["convert", "--from", "json", "--to", "xml", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert();

    assert.success().stdout("");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("{}\n", HELLO_XML)
    );
}

#[test]
fn it_convert_xml_from_stdin_to_json() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cli(&dir)
        .args(["convert", "--from", "xml", "--to", "json", "-i", "-"])
        .write_stdin(HELLO_XML)
        .assert();

    assert.success().stdout(format!("{}\n", HELLO_JSON));
}
