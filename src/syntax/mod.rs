//! Syntax highlighting for the editor pane
//!
//! Parsing and capture extraction are delegated to tree-sitter; the SQL
//! grammar is bundled behind the `treesitter` feature. Without the feature
//! the editor renders unstyled text.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

/// A parser plus the highlight query for one language
pub struct Syntax {
    parser: Parser,
    tree: Option<Tree>,
    highlights_query: Option<Query>,
    query_cursor: QueryCursor,
}

impl Syntax {
    /// Build the bundled SQL syntax, if the grammar is compiled in
    pub fn sql() -> Option<Self> {
        let (language, highlights) = bundled_sql()?;
        Self::new(&language, highlights).ok()
    }

    fn new(language: &Language, highlights_source: Option<&str>) -> Result<Self, String> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|e| e.to_string())?;

        let highlights_query = match highlights_source {
            Some(source) => Some(Query::new(language, source).map_err(|e| e.to_string())?),
            None => None,
        };

        Ok(Self {
            parser,
            tree: None,
            highlights_query,
            query_cursor: QueryCursor::new(),
        })
    }

    /// Re-parse the full text
    ///
    /// Exercise queries are small, so a full parse per edit is cheap enough
    /// that incremental edits are not worth the bookkeeping.
    pub fn refresh(&mut self, text: &str) {
        self.tree = self.parser.parse(text.as_bytes(), None);
    }

    /// Capture spans over the current tree as (byte range, capture name)
    pub fn highlights(&mut self, text: &str) -> Vec<(std::ops::Range<usize>, String)> {
        let mut result = Vec::new();
        if let Syntax {
            tree: Some(tree),
            highlights_query: Some(query),
            query_cursor,
            ..
        } = self
        {
            let root_node = tree.root_node();
            let bytes = text.as_bytes();
            query_cursor.set_byte_range(0..bytes.len());

            let mut matches = query_cursor.matches(query, root_node, bytes);
            while let Some(m) = matches.next() {
                for capture in m.captures {
                    let range = capture.node.byte_range();
                    let capture_name = query.capture_names()[capture.index as usize].to_string();
                    result.push((range, capture_name));
                }
            }
        }
        result
    }
}

/// The bundled SQL grammar and its highlight query
#[cfg(feature = "treesitter")]
fn bundled_sql() -> Option<(Language, Option<&'static str>)> {
    Some((
        tree_sitter_sequel::LANGUAGE.into(),
        Some(tree_sitter_sequel::HIGHLIGHTS_QUERY),
    ))
}

#[cfg(not(feature = "treesitter"))]
fn bundled_sql() -> Option<(Language, Option<&'static str>)> {
    None
}
