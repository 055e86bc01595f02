use crate::cli::parse_args_from;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_argv_uses_defaults() {
    let (opts, mode) = parse_args_from(Vec::new());
    assert!(opts.strip_trailing_comma);
    assert!(!opts.strict_closers);
    assert_eq!(mode.input, None);
    assert_eq!(mode.output, None);
    assert_eq!(mode.chunk_size, 16);
    assert!(!mode.final_only);
}

#[test]
fn program_name_is_not_taken_as_input() {
    let (_, mode) = parse_args_from(args(&["partialjson"]));
    assert_eq!(mode.input, None);

    let (opts, mode) = parse_args_from(args(&["partialjson", "--outline", "--strict-closers", "doc.json"]));
    assert_eq!(mode.input.as_deref(), Some("doc.json"));
    assert!(mode.outline && mode.final_only);
    assert!(opts.strict_closers);
    assert!(!mode.log);
}
