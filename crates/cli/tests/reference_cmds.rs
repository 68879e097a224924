//! CLI tests for the informational `alien table` and `alien examples`
//! subcommands.

use std::process::Command;

use assert_cmd::cargo;

fn alien_cmd() -> Command {
    Command::new(cargo::cargo_bin!("alien"))
}

#[test]
fn table_json_lists_seven_symbols_and_six_pairs() {
    let output = alien_cmd()
        .args(["table", "--output", "json"])
        .output()
        .expect("run table command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    let symbols = json["symbols"].as_array().unwrap();
    assert_eq!(symbols.len(), 7);
    assert_eq!(symbols[0]["symbol"], "A");
    assert_eq!(symbols[0]["value"], 1);
    assert_eq!(symbols[6]["symbol"], "R");
    assert_eq!(symbols[6]["value"], 1000);

    let pairs = json["subtractive_pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[5]["first"], "C");
    assert_eq!(pairs[5]["second"], "R");
    assert_eq!(pairs[5]["value"], 900);
}

#[test]
fn table_pretty_mentions_every_symbol() {
    let output = alien_cmd()
        .args(["table", "--output", "pretty"])
        .output()
        .expect("run table command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in ["A = 1", "R = 1000", "CR = 900"] {
        assert!(stdout.contains(line), "missing {line:?} in: {stdout}");
    }
}

#[test]
fn examples_json_converts_the_built_in_numerals() {
    let output = alien_cmd()
        .args(["examples", "--output", "json"])
        .output()
        .expect("run examples command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let entries = json.as_array().unwrap();
    assert!(!entries.is_empty());

    let find = |input: &str| {
        entries
            .iter()
            .find(|e| e["input"] == input)
            .unwrap_or_else(|| panic!("missing example {input}"))
    };
    assert_eq!(find("AAA")["value"], 3);
    assert_eq!(find("LBAAA")["value"], 58);
    assert_eq!(find("RCRZCAB")["value"], 1994);
}
