use super::*;
use serde_json::json;

#[test]
fn valid_json_parses_unchanged() {
    let cases = [
        r#"{"a":1,"b":[true,false,null],"c":"x"}"#,
        "[]",
        "{}",
        "  42  ",
        "\"str\"",
        "-1.5e3",
        "true",
    ];
    for s in cases {
        let expected: serde_json::Value = serde_json::from_str(s).unwrap();
        assert_eq!(attempt_parse(s), ParseOutcome::Parsed(expected), "{s}");
    }
}

#[test]
fn valid_json_needs_no_repair_log() {
    let (out, log) = attempt_parse_with_log(r#"{"a":[1,2]}"#, &Options::default());
    assert!(out.is_parsed());
    assert!(log.is_empty());
}

#[test]
fn blank_input_is_incomplete_without_repair() {
    for s in ["", "   ", "\n\t ", "\u{FEFF}"] {
        let (out, log) = attempt_parse_with_log(s, &Options::default());
        assert_eq!(out, ParseOutcome::Incomplete, "{s:?}");
        assert!(log.is_empty());
    }
}

#[test]
fn repaired_prefixes() {
    assert_eq!(
        attempt_parse(r#"{"type":"container","children":[{"type":"text""#),
        ParseOutcome::Parsed(json!({"type":"container","children":[{"type":"text"}]}))
    );
    assert_eq!(
        attempt_parse(r#"{"a": "value with \"quote"#),
        ParseOutcome::Parsed(json!({"a": "value with \"quote"}))
    );
    assert_eq!(attempt_parse(r#"{"a":1,"#), ParseOutcome::Parsed(json!({"a":1})));
    assert_eq!(attempt_parse("["), ParseOutcome::Parsed(json!([])));
    assert_eq!(attempt_parse("{"), ParseOutcome::Parsed(json!({})));
    assert_eq!(attempt_parse("\"abc"), ParseOutcome::Parsed(json!("abc")));
}

#[test]
fn unrepairable_prefixes_are_incomplete() {
    for s in [
        r#"{"a""#,
        r#"{"a":"#,
        r#"{"a":tr"#,
        r#"{"a":-"#,
        r#"{"a":1."#,
        r#"{"a":"\u00"#,
        r#"{"a":"abc\"#,
        "not json",
        "[1}",
    ] {
        assert_eq!(attempt_parse(s), ParseOutcome::Incomplete, "{s}");
    }
}

#[test]
fn strict_closers_do_not_change_parseable_results() {
    let strict = Options {
        strict_closers: true,
        ..Default::default()
    };
    for s in [r#"{"a":[1,{"b":"#, r#"[{"x":"]}"#, "[1}", "{]"] {
        assert_eq!(attempt_parse(s), attempt_parse_with(s, &strict), "{s}");
    }
}

#[test]
fn idempotent() {
    for s in [r#"{"a":[1,"#, "", "garbage", r#"{"k":"v"}"#] {
        assert_eq!(attempt_parse(s), attempt_parse(s));
    }
}

#[test]
fn every_prefix_is_parsed_object_or_incomplete() {
    let doc = dashboard();
    let text = serde_json::to_string(&doc).unwrap();
    let mut parsed = 0usize;
    for (idx, _) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
        let prefix = &text[..idx];
        match attempt_parse(prefix) {
            ParseOutcome::Parsed(v) => {
                parsed += 1;
                let obj = v.as_object().expect("root stays an object");
                if let Some(t) = obj.get("type").and_then(|t| t.as_str()) {
                    assert!("container".starts_with(t), "{t}");
                }
            }
            ParseOutcome::Incomplete => {}
        }
    }
    assert!(parsed > 10);
    assert_eq!(attempt_parse(&text), ParseOutcome::Parsed(doc));
}

#[test]
fn pretty_printed_prefixes_parse_too() {
    let doc = dashboard();
    let text = serde_json::to_string_pretty(&doc).unwrap();
    let cut = text.find("\"metric\"").unwrap() + "\"metric\"".len();
    let v = attempt_parse(&text[..cut]).into_value().unwrap();
    let children = v["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1], doc["children"][1]);
    assert_eq!(attempt_parse(&text).into_value(), Some(doc));
}
