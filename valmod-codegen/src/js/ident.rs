//! Identifier rules for JavaScript.

/// Words that cannot be used as binding names in module code.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Not reserved, but shadowing them breaks the emitted module.
    "arguments",
    "eval",
    "module",
    "Object",
    "undefined",
    "NaN",
    "Infinity",
];

/// Bindings the CommonJS module wrapper puts in scope.
const COMMON_JS_BINDINGS: &[&str] = &["exports", "require", "__filename", "__dirname"];

/// Returns true if the name is reserved in module code or would shadow a
/// global the emitted module relies on.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns true if a top-level `const` with this name collides with a
/// parameter of the CommonJS wrapper function.
pub fn is_common_js_binding(name: &str) -> bool {
    COMMON_JS_BINDINGS.contains(&name)
}

/// Returns true if `name` is an IdentifierName, usable after `.` and as a
/// bare object literal key.
///
/// Uses the Unicode XID properties, which are a subset of the ones
/// JavaScript accepts. Escapes are never produced, so anything else is
/// quoted.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '$' || c == '_' || unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(|c| {
        c == '$' || c == '\u{200C}' || c == '\u{200D}' || unicode_ident::is_xid_continue(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_names() {
        assert!(is_identifier_name("foo"));
        assert!(is_identifier_name("_private"));
        assert!(is_identifier_name("$el"));
        assert!(is_identifier_name("value_12"));
        assert!(is_identifier_name("größe"));
        assert!(is_identifier_name("class"));

        assert!(!is_identifier_name(""));
        assert!(!is_identifier_name("1st"));
        assert!(!is_identifier_name("a b"));
        assert!(!is_identifier_name("a-b"));
        assert!(!is_identifier_name("0"));
    }

    #[test]
    fn test_numeric_letters_are_not_identifiers() {
        // Alphanumeric in Rust, but not ID_Start / ID_Continue.
        assert!(!is_identifier_name("m²"));
        assert!(!is_identifier_name("½"));
        assert!(!is_identifier_name("①"));
        assert!(!is_identifier_name("x²"));

        assert!(is_identifier_name("x\u{200C}y"));
        assert!(is_identifier_name("ε_0"));
    }

    #[test]
    fn test_common_js_bindings() {
        assert!(is_common_js_binding("exports"));
        assert!(is_common_js_binding("require"));
        assert!(is_common_js_binding("__filename"));
        assert!(is_common_js_binding("__dirname"));
        assert!(!is_common_js_binding("module_exports"));
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("default"));
        assert!(is_reserved_word("module"));
        assert!(!is_reserved_word("value"));
        assert!(!is_reserved_word("data"));
    }
}
