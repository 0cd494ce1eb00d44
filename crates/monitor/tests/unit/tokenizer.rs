//! Tokenizer tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rvmon_sdb::tokenizer::{SavePtr, Strtok, WHITESPACE, split_command, strtok, strtok_r};

fn reentrant_tokens(input: &str, delims: &str) -> Vec<String> {
    let mut buf = input.to_owned();
    let mut save = SavePtr::default();
    let mut tokens = Vec::new();
    let mut next = strtok_r(Some(buf.as_mut_str()), delims, &mut save);
    while let Some(tok) = next {
        tokens.push(tok.to_owned());
        next = strtok_r(None, delims, &mut save);
    }
    tokens
}

fn instance_tokens(input: &str, delims: &str) -> Vec<String> {
    let mut buf = input.to_owned();
    let mut tok = Strtok::new();
    let mut tokens = Vec::new();
    let mut next = tok.next(Some(buf.as_mut_str()), delims);
    while let Some(t) = next {
        tokens.push(t.to_owned());
        next = tok.next(None, delims);
    }
    tokens
}

fn global_tokens(input: &str, delims: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut next = strtok(Some(input.to_owned()), delims);
    while let Some(t) = next {
        tokens.push(t);
        next = strtok(None, delims);
    }
    tokens
}

#[test]
fn all_delimiters_yield_nothing() {
    for input in ["", " ", "   \t ", ",,, ,"] {
        assert!(reentrant_tokens(input, ", \t").is_empty(), "{input:?}");
        assert!(instance_tokens(input, ", \t").is_empty(), "{input:?}");
        assert!(global_tokens(input, ", \t").is_empty(), "{input:?}");
    }
}

#[test]
fn delimiter_runs_collapse() {
    let expected = vec!["a", "b", "c", "d"];
    assert_eq!(reentrant_tokens("  a,b,,c,d  ", ", "), expected);
    assert_eq!(instance_tokens("  a,b,,c,d  ", ", "), expected);
    assert_eq!(global_tokens("  a,b,,c,d  ", ", "), expected);
}

#[test]
fn terminating_delimiter_becomes_nul() {
    let mut buf = String::from("ab  cd");
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(Some(buf.as_mut_str()), " ", &mut save), Some("ab"));
    assert!(!save.is_finished());
    drop(save);
    assert_eq!(buf, "ab\0 cd");
}

#[test]
fn multibyte_delimiter_is_fully_overwritten() {
    let mut buf = String::from("a\u{b7}b");
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(Some(buf.as_mut_str()), "\u{b7}", &mut save), Some("a"));
    assert_eq!(strtok_r(None, "\u{b7}", &mut save), Some("b"));
    assert_eq!(buf.as_bytes(), b"a\0\0b");
}

#[test]
fn exhausted_cursor_stays_exhausted() {
    let mut buf = String::from("only");
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(Some(buf.as_mut_str()), " ", &mut save), Some("only"));
    assert!(save.is_finished());
    assert_eq!(strtok_r(None, " ", &mut save), None);
    assert_eq!(strtok_r(None, " ", &mut save), None);
}

#[test]
fn default_cursor_without_buffer_yields_nothing() {
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(None, " ", &mut save), None);
    assert!(save.is_finished());
}

#[test]
fn fresh_buffer_restarts_instance_tokenizer() {
    let mut first = String::from("a b");
    let mut second = String::from("c d");
    let mut tok = Strtok::new();
    assert_eq!(tok.next(Some(first.as_mut_str()), " "), Some("a"));
    assert_eq!(tok.next(Some(second.as_mut_str()), " "), Some("c"));
    assert_eq!(tok.next(None, " "), Some("d"));
    assert_eq!(tok.next(None, " "), None);
}

#[test]
fn global_slot_is_shared_between_callers() {
    assert_eq!(strtok(Some("a b".to_owned()), " ").as_deref(), Some("a"));
    // A second stream replaces the first one entirely.
    assert_eq!(strtok(Some("x y".to_owned()), " ").as_deref(), Some("x"));
    assert_eq!(strtok(None, " ").as_deref(), Some("y"));
    assert_eq!(strtok(None, " "), None);
}

#[test]
fn delimiters_may_change_between_calls() {
    let mut buf = String::from("key=a b");
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(Some(buf.as_mut_str()), "=", &mut save), Some("key"));
    assert_eq!(strtok_r(None, " ", &mut save), Some("a"));
    assert_eq!(strtok_r(None, " ", &mut save), Some("b"));
}

#[test]
fn blank_line_has_no_command() {
    for line in ["", "   ", "\t \t"] {
        let mut buf = line.to_owned();
        assert!(split_command(&mut buf).is_none(), "{line:?}");
    }
}

#[test]
fn lone_command_has_no_remainder() {
    for line in ["c", "  c", "c "] {
        let mut buf = line.to_owned();
        let parsed = split_command(&mut buf).unwrap();
        assert_eq!(parsed.command, "c");
        assert!(parsed.remainder.is_none(), "{line:?}");
    }
}

#[test]
fn remainder_keeps_extra_whitespace() {
    let mut buf = String::from("x   4 0x80000000");
    let parsed = split_command(&mut buf).unwrap();
    assert_eq!(parsed.command, "x");
    assert_eq!(parsed.remainder.as_deref(), Some("  4 0x80000000"));
}

#[test]
fn remainder_can_be_tokenized_further() {
    let mut buf = String::from("x 4\t0x10");
    let parsed = split_command(&mut buf).unwrap();
    let mut save = SavePtr::default();
    assert_eq!(strtok_r(parsed.remainder, WHITESPACE, &mut save), Some("4"));
    assert_eq!(strtok_r(None, WHITESPACE, &mut save), Some("0x10"));
    assert_eq!(strtok_r(None, WHITESPACE, &mut save), None);
}

proptest! {
    #[test]
    fn all_forms_agree_with_split(input in "[ab, \t]{0,40}") {
        let expected: Vec<String> = input
            .split([',', ' ', '\t'])
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(&reentrant_tokens(&input, ", \t"), &expected);
        prop_assert_eq!(&instance_tokens(&input, ", \t"), &expected);
        prop_assert_eq!(&global_tokens(&input, ", \t"), &expected);
    }

    #[test]
    fn tokens_never_contain_delimiters(input in "\\PC{0,30}") {
        for token in reentrant_tokens(&input, " ,") {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains([' ', ',']));
        }
    }
}
