use markright_engine::{
    fixtures::{Outcome, load_cases},
    parse, snapshot,
};

#[test]
fn fixture_paragraphs() {
    assert_fixture("paragraphs");
}

#[test]
fn fixture_inline() {
    assert_fixture("inline");
}

#[test]
fn fixture_blocks() {
    assert_fixture("blocks");
}

#[test]
fn fixture_errors() {
    assert_fixture("errors");
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.mr",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let source = read_fixture(name);
    let cases = load_cases(&source).unwrap();
    assert!(!cases.is_empty(), "{name}.mr has no test cases");

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| match case.run() {
            Outcome::Passed => None,
            Outcome::Failed { expected, actual } => Some(format!(
                "{}:\n--- expected\n{expected}\n--- actual\n{actual}",
                case.name
            )),
            Outcome::Errored(err) => Some(format!("{}: {err}", case.name)),
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

/// Every successfully parsed input satisfies the tree invariants.
#[test]
fn fixture_inputs_satisfy_invariants() {
    for name in ["paragraphs", "inline", "blocks"] {
        for case in load_cases(&read_fixture(name)).unwrap() {
            let doc = parse(&case.input).unwrap();
            snapshot::invariants(&doc);
        }
    }
}

/// Fixture files are markright documents too, and parse like any other.
#[test]
fn fixture_files_parse_cleanly() {
    for name in ["paragraphs", "inline", "blocks", "errors"] {
        let doc = parse(&read_fixture(name)).unwrap();
        snapshot::invariants(&doc);
        assert!(doc.query_all("test input").len() >= 4);
    }
}
