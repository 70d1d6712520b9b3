use crate::tree::NamespaceTreeNode;
use std::path::PathBuf;

pub mod cache;
pub mod list;
pub mod plot;
pub mod register;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What happened to one plot during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotOutcome {
    pub name: String,
    pub saved_to: Option<PathBuf>,
    pub shown: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub plotted: Vec<PlotOutcome>,
    pub imported_modules: Vec<String>,
    pub tree: Option<NamespaceTreeNode>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_plotted(mut self, plotted: Vec<PlotOutcome>) -> Self {
        self.plotted = plotted;
        self
    }

    pub fn with_imported_modules(mut self, modules: Vec<String>) -> Self {
        self.imported_modules = modules;
        self
    }

    pub fn with_tree(mut self, tree: NamespaceTreeNode) -> Self {
        self.tree = Some(tree);
        self
    }
}
