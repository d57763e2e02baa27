//! Draws a tree as text, one line per level, laid out from
//! [`level_order_padded`][crate::Node::level_order_padded].
//!
//! Every value is centered in a cell as wide as the widest value plus two. The bottom level
//! has its cells side by side with one cell of space between them; each level up doubles the
//! spacing so that a node sits centered above its two children. Missing nodes are drawn as `*`.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{avl, render, SearchTree};
//!
//! let tree = avl::Tree::new().insert(2).insert(1).insert(3).insert(4);
//!
//! assert_eq!(
//!     render::render(tree.root()),
//!     "          2\n    1           3\n *     *     *     4"
//! );
//! ```

use std::fmt::Display;

use crate::node::Node;

/// Placeholder drawn where a subtree ends before the bottom level.
const MISSING: &str = "*";

/// Renders `root` as lines of centered cells, with trailing whitespace trimmed from every
/// line. An empty tree renders as an empty string.
pub fn render<T: Display>(root: &Node<T>) -> String {
    let height = root.height();
    let tokens: Vec<String> = root
        .level_order_padded()
        .into_iter()
        .map(|value| value.map_or_else(|| MISSING.to_string(), ToString::to_string))
        .collect();

    let cell = tokens.iter().map(String::len).max().unwrap_or(0) + 2;
    let mut tokens = tokens.iter();

    let mut lines = Vec::with_capacity(height);
    for level in 0..height {
        let first = ((1 << (height - level - 1)) - 1) * cell;
        let between = ((1 << (height - level)) - 1) * cell;

        let mut line = " ".repeat(first);
        for i in 0..1usize << level {
            if i != 0 {
                line.push_str(&" ".repeat(between));
            }
            let token = tokens.next().map_or(MISSING, String::as_str);
            line.push_str(&format!("{token:^cell$}"));
        }

        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
