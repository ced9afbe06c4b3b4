//! multitab crate root: re-exports and module wiring.
//!
//! Nested tab management for egui/eframe plot figures: tab groups of
//! arbitrary depth, plotted lazily the first time a tab is shown, with
//! optional focus linking across sibling groups and `&`-marked keyboard
//! accelerators in tab labels.
//!
//! The implementation splits into cohesive modules:
//! - `label`: tab labels and accelerator markers
//! - `path`: selectors and canonical focus coordinates
//! - `node`: tab groups, child slots and lazy panels
//! - `tree`: the generic tab tree engine
//! - `figure`: the plot surface drawn with egui_plot
//! - `config`: runtime configuration and persisted user settings
//! - `export`: CSV/JSON export of figure data
//! - `ui`: the embeddable egui tab widget
//! - `app`: standalone native window

mod error;
mod label;
mod node;
mod path;
mod tree;

pub mod app;
pub mod config;
pub mod export;
pub mod figure;
pub mod ui;

// Public re-exports for a compact external API
pub use app::{run_multitab, MultiTabApp};
pub use config::{MultiTabConfig, TabPosition, UserSettings};
pub use error::{Result, TabError};
pub use export::{ExportError, ExportFormat, Filenames, SaveReport};
pub use figure::{Figure, FigureSeries, SeriesKind, SeriesLook, TabbedFigures};
pub use label::TabLabel;
pub use node::{BuildResult, Child, ChildSlot, Panel, PanelId, TabNode};
pub use path::{FocusPath, Selector};
pub use tree::{FallbackBuilder, TabTree};
pub use ui::TabsUi;
