//! UI building blocks shared across rendering and state modules.

/// Icon grid and cell layout.
pub mod grid;
/// Search prompt rendering and load status.
pub mod prompt;
/// Category selector.
pub mod tabs;

pub use grid::{GridContext, render_grid};
pub use prompt::{InputContext, ProgressState, render_input};
pub use tabs::{CategoryTabs, render_category_tabs};
