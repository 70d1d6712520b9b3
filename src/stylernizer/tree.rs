//! # Namespace Tree
//!
//! Groups flat registry keys by their dotted module path for display:
//!
//! ```text
//! Plots Tree            Plot Keys
//! └── pkg
//!     ├── sub
//!     │   └── plot_x.........pkg.sub:plot_x
//!     └── top
//!         └── plot_y.........pkg.top:plot_y
//! ```
//!
//! Each plot leaf carries a filler length chosen so that the qualified keys
//! line up in one column no matter how deep the leaf sits. The tree is purely
//! presentational; building it never touches the registry.

use crate::model::{function_of, module_of};
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

/// Character used to pad function names up to the key column.
pub const FILLER: char = '.';

/// Horizontal space each nesting level takes when rendered.
pub const INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeLabel {
    Root { width: usize },
    Module(String),
    Plot {
        function: String,
        filler: usize,
        qualified: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTreeNode {
    pub label: NodeLabel,
    pub children: Vec<NamespaceTreeNode>,
}

impl NamespaceTreeNode {
    fn new(label: NodeLabel) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// All qualified keys below this node, depth first.
    pub fn qualified_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let NodeLabel::Plot { qualified, .. } = &self.label {
            out.push(qualified);
        }
        for child in &self.children {
            child.collect_names(out);
        }
    }
}

/// The column width every leaf is padded against.
pub fn alignment_width<S: AsRef<str>>(names: &[S]) -> usize {
    names
        .iter()
        .map(|n| {
            let n = n.as_ref();
            let segments = module_of(n).matches('.').count() + 1;
            INDENT * segments + 2 + function_of(n).width()
        })
        .max()
        .unwrap_or(0)
}

pub fn build_tree<S: AsRef<str>>(names: &[S]) -> NamespaceTreeNode {
    let width = alignment_width(names);
    let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    let mut root = NamespaceTreeNode::new(NodeLabel::Root { width });
    walk_modules(&names, &mut root, width, "", 0);
    root
}

fn leading_segment(name: &str) -> &str {
    let end = name.find(['.', ':']).unwrap_or(name.len());
    &name[..end]
}

fn walk_modules(names: &[&str], node: &mut NamespaceTreeNode, width: usize, parent: &str, level: usize) {
    let modules: BTreeSet<&str> = names.iter().map(|n| leading_segment(n)).collect();

    for module in modules {
        let mut sub_tree = NamespaceTreeNode::new(NodeLabel::Module(module.to_string()));
        let mut nested = Vec::new();

        for name in names.iter().filter(|n| leading_segment(n) == module) {
            let rest = &name[module.len()..];
            if let Some(function) = rest.strip_prefix(':') {
                let filler = width as isize - function.width() as isize - (INDENT as isize) * (level as isize - 1);
                let qualified = if parent.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", parent, name)
                };
                sub_tree.children.push(NamespaceTreeNode::new(NodeLabel::Plot {
                    function: function.to_string(),
                    filler: filler.max(0) as usize,
                    qualified,
                }));
            } else if let Some(sub) = rest.strip_prefix('.') {
                nested.push(sub);
            }
        }

        if !nested.is_empty() {
            let path = if parent.is_empty() {
                module.to_string()
            } else {
                format!("{}.{}", parent, module)
            };
            walk_modules(&nested, &mut sub_tree, width, &path, level + 1);
        }
        node.children.push(sub_tree);
    }
}
