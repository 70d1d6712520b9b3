//! # Rendering
//!
//! Terminal output for the CLI: the namespace tree with box guides and the
//! command messages. Layout is computed on plain text; styling is applied per
//! label so guides and alignment are unaffected by escape codes.

use super::styles::TREE_THEME;
use colored::Colorize;
use console::Style;
use std::fmt::Write as _;
use stylernizer::api::{CmdMessage, MessageLevel, PlotOutcome};
use stylernizer::tree::{NamespaceTreeNode, NodeLabel, FILLER};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

fn paint(style: &Style, text: &str, styled: bool) -> String {
    if styled {
        style.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

fn label_text(label: &NodeLabel, styled: bool) -> String {
    match label {
        NodeLabel::Root { width } => format!(
            "{}{}{}",
            paint(&TREE_THEME.header, "Plots Tree", styled),
            " ".repeat(width + 3),
            paint(&TREE_THEME.header, "Plot Keys", styled)
        ),
        NodeLabel::Module(name) => paint(&TREE_THEME.module, name, styled),
        NodeLabel::Plot {
            function,
            filler,
            qualified,
        } => format!(
            "{}{}{}",
            paint(&TREE_THEME.function, function, styled),
            paint(&TREE_THEME.filler, &FILLER.to_string().repeat(*filler), styled),
            paint(&TREE_THEME.key, qualified, styled)
        ),
    }
}

fn render_children(node: &NamespaceTreeNode, prefix: &str, styled: bool, out: &mut String) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let (branch, extension) = if last {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, PIPE)
        };
        let _ = writeln!(out, "{}{}{}", prefix, branch, label_text(&child.label, styled));
        render_children(child, &format!("{}{}", prefix, extension), styled, out);
    }
}

pub fn render_tree(tree: &NamespaceTreeNode, styled: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", label_text(&tree.label, styled));
    render_children(tree, "", styled, &mut out);
    out
}

/// Prints the tree unless it has nothing to show.
pub fn print_tree(tree: Option<&NamespaceTreeNode>) {
    if let Some(tree) = tree.filter(|t| !t.children.is_empty()) {
        print!("{}", render_tree(tree, true));
    }
}

pub fn render_messages(messages: &[CmdMessage], styled: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if styled {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages, true);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn print_outcomes(outcomes: &[PlotOutcome]) {
    for outcome in outcomes {
        if let Some(path) = &outcome.saved_to {
            println!("  {} {}", outcome.name, path.display().to_string().dimmed());
        }
    }
}
