//! Tree building for script sources.
//!
//! Sources are parsed with the TSX grammar first, so type annotations and
//! JSX are always understood regardless of the file's declared language
//! (file extensions are unreliable while a file is being edited). When that
//! parse contains syntax errors, the document's own grammar is offered as a
//! second opinion and whichever tree has fewer error nodes wins. This keeps
//! `<T>value` casts in `.ts` files parseable.
//!
//! tree-sitter recovers from local syntax errors, so a half-typed statement
//! only produces `ERROR` nodes around it. A parse that yields no tree at all
//! is reported as `None` and the caller produces zero diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use force_semicolon::parsing::build_tree;
//! use force_semicolon::Lang;
//!
//! let tree = build_tree("const a = 1", Lang::JavaScript).unwrap();
//! assert_eq!(tree.root_node().kind(), "program");
//! ```

use tree_sitter::{Language, Node, Parser, Tree};

use crate::lang::Lang;

/// Grammar used for the first parse of every script source
pub fn primary_language() -> Language {
    tree_sitter_typescript::LANGUAGE_TSX.into()
}

/// Parse source text into a syntax tree, tolerating syntax errors.
///
/// Returns `None` when no tree could be produced at all.
pub fn build_tree(source: &str, lang: Lang) -> Option<Tree> {
    let primary = parse_with(source, &primary_language())?;
    if !primary.root_node().has_error() || lang == Lang::Tsx {
        return Some(primary);
    }

    let fallback_lang = if lang.is_markup() {
        Lang::JavaScript
    } else {
        lang
    };
    let Some(fallback) = parse_with(source, &fallback_lang.tree_sitter_language()) else {
        return Some(primary);
    };

    let primary_errors = count_error_nodes(&primary.root_node());
    let fallback_errors = count_error_nodes(&fallback.root_node());
    tracing::debug!(
        "tsx parse had {} error nodes, {} parse had {}",
        primary_errors,
        fallback_lang.name(),
        fallback_errors
    );

    if fallback_errors < primary_errors {
        Some(fallback)
    } else {
        Some(primary)
    }
}

fn parse_with(source: &str, language: &Language) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(language) {
        tracing::warn!("failed to load grammar: {:?}", e);
        return None;
    }

    let tree = parser.parse(source, None);
    if tree.is_none() {
        tracing::warn!("parser produced no tree ({} bytes)", source.len());
    }
    tree
}

/// Count `ERROR` and zero-width `MISSING` nodes below `node` (iterative)
pub fn count_error_nodes(node: &Node) -> usize {
    let mut count = 0;
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            let current = cursor.node();
            if current.is_error() || current.is_missing() {
                count += 1;
            }
            if current.has_error() && cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typescript() {
        let tree = build_tree("export function hello(): string { return 'world'; }", Lang::TypeScript)
            .unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_jsx_in_plain_javascript() {
        let tree = build_tree("const el = <div className=\"a\">hi</div>;", Lang::JavaScript).unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_types_in_plain_javascript() {
        let tree = build_tree("let n: number = 1;", Lang::JavaScript).unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_invalid_syntax_still_yields_tree() {
        let tree = build_tree("function { invalid syntax", Lang::TypeScript).unwrap();
        assert!(tree.root_node().has_error());
        assert!(count_error_nodes(&tree.root_node()) > 0);
    }
}
