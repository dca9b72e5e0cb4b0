use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn molweight(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_molweight"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run molweight")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn store_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn parse_prints_weight_and_composition() {
    let output = molweight(&["parse", "Mg3(PO4)2"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Mg3(PO4)2  262.85"), "{text}");
    assert!(text.contains("Mg  Magnesium"));
    assert!(text.contains("P   Phosphorus"));
}

#[test]
fn parse_fails_when_any_formula_is_invalid() {
    let output = molweight(&["parse", "H2O", "NA"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("H2O  18.015 g/mol"));
    let err = stderr(&output);
    assert!(err.contains("error: NA: Format Error"), "{err}");
    assert!(err.contains("Na"));
}

#[test]
fn parse_suggests_casing_for_lowercase_input() {
    let output = molweight(&["parse", "mgso4"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("did you mean `MgSO4`?"));
}

#[test]
fn parse_json_emits_one_object_per_formula() {
    let output = molweight(&["parse", "--json", "CO2", "(OH"]);
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["formula"], "CO2");
    assert_eq!(lines[0]["composition"]["O"], 2);
    assert!(lines[1]["error"].as_str().unwrap().starts_with("Format Error"));
}

#[test]
fn add_then_list_round_trips_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_arg(&dir.path().join("compounds.jsonl"));

    let output = molweight(&["add", "H2O", "Ca(OH)2", "Xx", "--store", &store]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("ok added Ca(OH)2"));
    assert!(stderr(&output).contains("error: Xx"));

    let output = molweight(&["list", "--json", "--store", &store]);
    let formulas: Vec<String> = stdout(&output)
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["Formula"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(formulas, vec!["H2O", "Ca(OH)2"]);
}

#[test]
fn normalize_recases_symbols() {
    let output = molweight(&["normalize", "ca(oh)2"]);
    assert_eq!(stdout(&output).trim(), "Ca(OH)2");
}

#[test]
fn elements_lists_the_whole_table() {
    let output = molweight(&["elements"]);
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 118);
    assert!(text.lines().next().unwrap().contains("H   Hydrogen"));
}

#[test]
fn menu_reads_choices_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compounds.jsonl");
    let store = store_arg(&path);

    let mut child = Command::new(env!("CARGO_BIN_EXE_molweight"))
        .args(["menu", "--store", &store])
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1\nNaCl\n2\n4\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("ok added NaCl"));
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains(r#""Formula":"NaCl""#));
}
