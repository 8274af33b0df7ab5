//! Source extraction: turn a document into plain script text, or skip it.
//!
//! Script documents pass through unchanged. HTML documents are reduced to
//! the contents of their `<script>` regions, concatenated in document order
//! below a synthetic marker line. Positions inside that buffer do not map
//! back onto the HTML document, so callers must never apply fixes to markup
//! files using them.

use tree_sitter::{Node, Parser};

use crate::config::LintConfig;
use crate::document::SourceDocument;
use crate::lang::Lang;

/// First line of every buffer built from markup
pub const SCRIPT_MARKER: &str = "// force-semicolon: extracted <script> regions";

/// Plain script text ready for the tree builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSource {
    pub text: String,
    /// Language the text should be parsed as
    pub lang: Lang,
    /// True when the text is a synthetic buffer rather than the document itself
    pub synthetic: bool,
}

/// Why a document produced no lintable text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Markup document while `extractHtmlScripts` is off
    ExtractionDisabled,
    /// Markup document that failed to parse
    MarkupParseFailure,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExtractionDisabled => "script extraction disabled",
            SkipReason::MarkupParseFailure => "markup could not be parsed",
        }
    }
}

/// Result of source extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Source(ExtractedSource),
    Skip(SkipReason),
}

/// Extract lintable source from a document
pub fn extract_source(doc: &SourceDocument, config: &LintConfig) -> Extraction {
    if !doc.lang().is_markup() {
        return Extraction::Source(ExtractedSource {
            text: doc.text().to_string(),
            lang: doc.lang(),
            synthetic: false,
        });
    }

    if !config.extract_html_scripts {
        return Extraction::Skip(SkipReason::ExtractionDisabled);
    }

    match extract_html_scripts(doc.text()) {
        Some(text) => Extraction::Source(ExtractedSource {
            text,
            lang: Lang::JavaScript,
            synthetic: true,
        }),
        None => Extraction::Skip(SkipReason::MarkupParseFailure),
    }
}

/// Concatenate the contents of every script region of an HTML document
pub fn extract_html_scripts(html: &str) -> Option<String> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&Lang::Html.tree_sitter_language()) {
        tracing::warn!("failed to load html grammar: {:?}", e);
        return None;
    }
    let tree = parser.parse(html, None)?;

    let mut regions = Vec::new();
    collect_scripts(&tree.root_node(), html, &mut regions);

    let mut buffer = String::from(SCRIPT_MARKER);
    buffer.push('\n');
    for region in regions {
        buffer.push_str(region);
        if !region.ends_with('\n') {
            buffer.push('\n');
        }
    }
    Some(buffer)
}

fn collect_scripts<'s>(node: &Node, html: &'s str, out: &mut Vec<&'s str>) {
    if node.kind() == "script_element" {
        if is_javascript_script(node, html) {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "raw_text" {
                    if let Some(text) = html.get(child.start_byte()..child.end_byte()) {
                        out.push(text);
                    }
                }
            }
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_scripts(&child, html, out);
    }
}

/// Scripts without a `type`, or with a JavaScript/module type, are linted
fn is_javascript_script(script: &Node, html: &str) -> bool {
    let mut cursor = script.walk();
    let Some(start_tag) = script
        .children(&mut cursor)
        .find(|child| child.kind() == "start_tag")
    else {
        return true;
    };

    let mut cursor = start_tag.walk();
    for attribute in start_tag.children(&mut cursor) {
        if attribute.kind() != "attribute" {
            continue;
        }
        let text = html
            .get(attribute.start_byte()..attribute.end_byte())
            .unwrap_or("");
        let Some((name, value)) = text.split_once('=') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("type") {
            continue;
        }
        let value = value
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_ascii_lowercase();
        return matches!(
            value.as_str(),
            "module" | "text/javascript" | "application/javascript" | "text/babel"
        );
    }
    true
}
