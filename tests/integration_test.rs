//! Integration tests for advpl-indent
//!
//! These tests drive the public API the way an indentation engine would

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::sync::Arc;

use advpl_indent::{
    classify_document, Catalog, Config, IndentEffect, LineClassifier, RegionState, RegionTracker,
    RegionError,
};

fn classifier() -> LineClassifier {
    LineClassifier::new(Arc::new(Catalog::builtin().unwrap()))
}

fn effect(inc: bool, dec: bool, reset: bool) -> IndentEffect {
    IndentEffect {
        increment: inc,
        decrement: dec,
        reset,
    }
}

#[test]
fn test_function_line() {
    let mut c = classifier();
    let rule = c.classify("function doStuff").unwrap();
    assert_eq!(rule.id(), "function");
    assert_eq!(rule.effect(), effect(true, false, true));
}

#[test]
fn test_endif_line() {
    let mut c = classifier();
    let rule = c.classify("endif").unwrap();
    assert_eq!(rule.id(), "endif");
    assert_eq!(rule.effect(), effect(false, true, false));
}

#[test]
fn test_whitespace_line() {
    let mut c = classifier();
    assert!(c.classify("   ").is_none());
}

#[test]
fn test_block_comment_sequence() {
    let mut c = classifier();

    let rule = c.classify("/* start").unwrap();
    assert_eq!(rule.id(), "start comment block (start line)");
    assert!(c.is_suppressed());

    assert!(c.classify("anything at all").is_none());

    let rule = c.classify("*/").unwrap();
    assert_eq!(rule.id(), "end comment block (start line)");
    assert_eq!(c.region(), RegionState::Idle);
}

#[test]
fn test_else_line() {
    let mut c = classifier();
    let rule = c.classify("else").unwrap();
    assert_eq!(rule.id(), "else");
    assert_eq!(rule.effect(), effect(true, true, false));
}

#[test]
fn test_beginsql_block() {
    let mut c = classifier();
    let rule = c.classify("beginsql mySql").unwrap();
    assert_eq!(rule.id(), "beginsql (alias)?");
    assert!(rule.increment());

    assert!(c.classify("  SELECT * FROM %table:SA1%").is_none());

    let rule = c.classify("endsql").unwrap();
    assert_eq!(rule.id(), "endsql");
    assert!(rule.decrement());
}

#[test]
fn test_block_keywords_across_a_class() {
    let source = "\
CLASS Reader
   DATA cFile
ENDCLASS

METHOD Load() CLASS Reader
   Local nI
   For nI := 1 To 10
      Begin Sequence
         ProcessItem(nI)
      Recover Sequence
         ConOut('fail')
      End Sequence
   Next
   Do Case
   Case nI == 1
   Otherwise
   EndCase
   While .T.
   EndDo
Return Self
";
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let lines = classify_document(&catalog, source);
    let ids: Vec<Option<&str>> = lines
        .iter()
        .map(|l| l.matched.as_ref().map(|m| m.id.as_str()))
        .collect();

    assert_eq!(
        ids,
        vec![
            Some("class"),
            None,
            Some("end try"),
            None,
            Some("method"),
            None,
            Some("for"),
            Some("begin sequence"),
            None,
            Some("recover"),
            None,
            Some("end transaction"),
            Some("next"),
            Some("do case"),
            Some("case/otherwise"),
            Some("case/otherwise"),
            Some("end case"),
            Some("while"),
            Some("end try"),
            None,
        ]
    );
}

#[test]
fn test_web_service_blocks() {
    let mut c = classifier();
    let pairs = [
        ("WSRESTFUL Customers", "wsrestful"),
        ("END WSRESTFUL", "end transaction"),
        ("endwsrestful", "end try"),
        ("END WSSERVICE", "end transaction"),
        ("WSSERVICE Orders", "wsservice"),
        ("WSSTRUCT tItem", "wsstruct"),
        ("WSCLIENT WSOrders", "wsclient"),
        ("ENDWSCLIENT", "end try"),
    ];
    for (line, expected) in pairs {
        let id = c.classify(line).map(|r| r.id().to_string());
        assert_eq!(id.as_deref(), Some(expected), "line: {line}");
    }
}

#[test]
fn test_fused_closers_still_decrement() {
    let mut c = classifier();
    for line in ["endtransaction", "EndFunction", "EndMethod", "ENDCLASS", "EndDo"] {
        let rule = c.classify(line).unwrap();
        assert_eq!(rule.id(), "end try", "line: {line}");
        assert_eq!(rule.effect(), effect(false, true, false));
    }
    assert_eq!(c.classify("EndIf").unwrap().id(), "endif");
}

#[test]
fn test_custom_rules_from_config() {
    let config = Config::from_toml_str(
        r#"
[[rules]]
id = "begin content"
pattern = '^\s*begincontent\s+var\s+\w+'
increment = true
ignore_region_end_id = "end content"

[[rules]]
id = "end content"
pattern = '^\s*endcontent'
decrement = true
"#,
    )
    .unwrap();
    assert_eq!(config.validate(), None);

    let mut c = LineClassifier::new(Arc::new(config.build_catalog().unwrap()));
    assert_eq!(c.classify("BeginContent var cHtml").unwrap().id(), "begin content");
    // Template text is inert, even when it looks like code.
    assert!(c.classify("If this is html").is_none());
    assert!(c.classify("<p>end</p>").is_none());
    let rule = c.classify("EndContent").unwrap();
    assert_eq!(rule.id(), "end content");
    assert!(rule.decrement());
    assert_eq!(c.classify("If lOk").unwrap().id(), "if");
}

#[test]
fn test_region_misuse_is_reported() {
    let mut tracker = RegionTracker::new();
    tracker.enter(6).unwrap();
    assert_eq!(
        tracker.enter(42),
        Err(RegionError::AlreadyInRegion {
            active: 6,
            requested: 42,
        })
    );
}

#[test]
fn test_last_match_follows_successful_lines() {
    let mut c = classifier();
    c.classify("Try");
    c.classify("   nX := 1 / 0");
    let (rule, line) = c.last_match().unwrap();
    assert_eq!(rule.id(), "try");
    assert_eq!(line, "Try");

    c.classify("Catch oErr");
    assert_eq!(c.last_match().unwrap().0.id(), "catch");
}
