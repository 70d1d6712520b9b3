//! # Stylernizer Architecture
//!
//! Stylernizer makes chart-producing functions addressable by name. Plot
//! functions are registered under hierarchical keys (`pkg.module:function`),
//! optionally expanded into one entry per value of a parameter sweep, and later
//! selected by key prefix to be rendered, saved and shown one after another.
//!
//! It is a library that happens to have a CLI client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints trees and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning registry, render state and cache      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - register / list / plot / cache load and dump             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry Layer (registry.rs, registrar.rs, catalog.rs)     │
//! │  - Keyed producers, sweep expansion, module loading         │
//! │  Cache Layer (store/)                                       │
//! │  - CacheStore trait: FileCache, InMemoryCache               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Render State
//!
//! Plot functions draw against a [`render::RenderState`]: the figure size and
//! the style sheets currently applied. Registration attaches a style set and an
//! orientation to each function; both are applied to the state right before the
//! function runs. The state is never reset between plots, so whatever one plot
//! leaves behind is what the next one starts from.
//!
//! ## Modules
//!
//! Rust has no runtime import. Code that contributes plots exposes a loader
//! function, and a [`catalog::ModuleCatalog`] maps dotted module identifiers to
//! those loaders. The built-in [`gallery`] is one such catalog.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic behind each operation
//! - [`registry`] / [`registrar`]: Keyed producers and how they are made
//! - [`catalog`]: Module identifiers and their loaders
//! - [`render`]: Render state, orientation and the `Artifact` trait
//! - [`tree`]: Namespace tree for listing keys
//! - [`store`]: Cache persistence
//! - [`figure`] / [`viewer`]: Built-in SVG artifact and external viewer
//! - [`config`]: Environment settings
//! - [`telemetry`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod figure;
pub mod gallery;
pub mod model;
pub mod registrar;
pub mod registry;
pub mod render;
pub mod store;
pub mod telemetry;
pub mod tree;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;
