/// Built-in indentation rules for AdvPL/TLPP sources
///
/// The table order is the precedence order: the first rule whose pattern
/// matches a line wins. Several patterns are deliberately loose (a bare `end`
/// matches many of the `end X` closers), so moving an entry changes which
/// rule fires. Treat reordering as a behavior change.
///
/// Patterns are compiled case-insensitively when the catalog is built.
use super::types::RuleDef;

/// One row of the built-in table
struct Builtin {
    id: &'static str,
    pattern: &'static str,
    increment: bool,
    decrement: bool,
    reset: bool,
    ignore_until: Option<&'static str>,
}

const fn rule(id: &'static str, pattern: &'static str, inc: bool, dec: bool) -> Builtin {
    Builtin {
        id,
        pattern,
        increment: inc,
        decrement: dec,
        reset: false,
        ignore_until: None,
    }
}

/// Opens a block
const fn opening(id: &'static str, pattern: &'static str) -> Builtin {
    rule(id, pattern, true, false)
}

/// Closes the current block and opens a sibling (else, case, catch)
const fn continuing(id: &'static str, pattern: &'static str) -> Builtin {
    rule(id, pattern, true, true)
}

/// Closes a block
const fn closing(id: &'static str, pattern: &'static str) -> Builtin {
    rule(id, pattern, false, true)
}

/// Recognized but carries no indent effect
const fn neutral(id: &'static str, pattern: &'static str) -> Builtin {
    rule(id, pattern, false, false)
}

/// Top-level definition that restarts indent bookkeeping
const fn toplevel(id: &'static str, pattern: &'static str) -> Builtin {
    Builtin {
        reset: true,
        ..opening(id, pattern)
    }
}

/// Opens a suppression region closed by `end_id`
const fn region(id: &'static str, pattern: &'static str, end_id: &'static str) -> Builtin {
    Builtin {
        ignore_until: Some(end_id),
        ..neutral(id, pattern)
    }
}

const BUILTIN_RULES: &[Builtin] = &[
    // ===== DEFINITIONS =====
    toplevel("function", r"^\s*(\w+\s+)?function\s+\w+"),
    toplevel("method", r"^\s*method\s+\w+\s*.*\s+class\s+\w+"),
    // ===== COMMENTS AND PREPROCESSOR =====
    neutral("comment line (start line)", r"^//"),
    opening("#ifdef/#ifndef", r"^\s*#\s*(ifdef|ifndef)"),
    continuing("#else", r"^\s*#\s*else"),
    // Authored with both flags; kept as is.
    continuing("#endif", r"^\s*#\s*endif"),
    region(
        "start comment block (start line)",
        r"^/\*",
        "end comment block (start line)",
    ),
    neutral("end comment block (start line)", r"^\*/"),
    // ===== EMBEDDED QUERIES AND TRANSACTIONS =====
    opening("begin report query", r"^\s*begin\s+report\s+query"),
    closing("end report query", r"^\s*end\s+report\s+query"),
    opening("begin transaction", r"^\s*begin\s+transaction"),
    // Any `end <word>` lands here first.
    closing("end transaction", r"^\s*end\s+(transaction)?"),
    opening("beginsql (alias)?", r"^\s*beginsql\s+\w+"),
    closing("endsql", r"^\s*endsql"),
    // ===== DO CASE =====
    opening("do case", r"^\s*do\s+case"),
    continuing("case/otherwise", r"^\s*(case|otherwise)"),
    closing("end case", r"^\s*end\s*case"),
    // ===== TRY/CATCH =====
    opening("try", r"^\s*try"),
    continuing("catch", r"^\s*catch"),
    // Loose: any `end<word>` closes here, except `endif`, which is left
    // for its own rule further down.
    closing("end try", r"^\s*end(\s*try)?($|[^i]|i($|[^f]))"),
    // ===== CLASSES AND WEB SERVICE CLIENTS =====
    opening("class", r"^\s*class\s+\w+"),
    closing("end class", r"^\s*end(\s*class)?($|[^i]|i($|[^f]))"),
    opening("wsclient", r"^\s*wsclient\s+\w+"),
    closing("end wsclient", r"^\s*endwsclient"),
    // ===== LOOPS AND CONDITIONALS =====
    opening("for", r"^\s*for\s+\w+"),
    closing("next", r"^\s*next"),
    opening("if", r"^\s*if"),
    continuing("else", r"^\s*(else|elseif)"),
    closing("endif", r"^\s*end\s*(if)?"),
    opening("structure", r"^\s*structure"),
    closing("end structure", r"^\s*end\s*structure"),
    opening("while", r"^\s*(do)?\s*while"),
    closing("end do", r"^\s*(end)?\s*do"),
    // ===== WEB SERVICES =====
    opening("wsrestful", r"^\s*wsrestful"),
    closing("end wsrestful", r"^\s*end\s*wsrestful"),
    opening("wsservice", r"^\s*wsservice"),
    closing("end wsservice", r"^\s*end\s*wsservice"),
    opening("wsstruct", r"^\s*wsstruct"),
    closing("end wsstruct", r"^\s*end\s*wsstruct"),
    // ===== BEGIN SEQUENCE =====
    opening("begin sequence", r"^\s*begin\s*sequence"),
    continuing("recover", r"^\s*recover\s*sequence"),
    closing("end sequence", r"^\s*end\s*(sequence)?"),
    // ===== INDENTED COMMENT BLOCKS =====
    region("begin comment block", r"^\s+/\*", "end comment block"),
    neutral("end comment block", r"^\s+\*/"),
];

/// Number of built-in rules
#[must_use]
pub fn builtin_count() -> usize {
    BUILTIN_RULES.len()
}

/// Built-in rule definitions in precedence order
#[must_use]
pub fn builtin_rules() -> Vec<RuleDef> {
    BUILTIN_RULES
        .iter()
        .map(|b| RuleDef {
            id: b.id.to_string(),
            pattern: b.pattern.to_string(),
            increment: b.increment,
            decrement: b.decrement,
            reset: b.reset,
            ignore_region_end_id: b.ignore_until.map(str::to_string),
        })
        .collect()
}
