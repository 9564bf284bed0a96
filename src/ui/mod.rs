//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based UI, transforming view models into
//! ANSI-styled output through composable rendering components. It provides theme
//! support, a compact layout for narrow panes, and fuzzy match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Canvas buffer and text utilities (highlighting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use hirepoint::{initialize, Config};
//! use hirepoint::ui::renderer::render_frame;
//!
//! let state = initialize(&Config::default());
//! let viewmodel = state.compute_viewmodel(24, 100);
//! let frame = render_frame(&viewmodel, &state.theme, 24, 100);
//! assert!(frame.contains("Point"));
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, EmptyState, FeedView, FooterInfo, HeroView, JobCard, NavbarView, PageView,
    ResultsView, ToastView, UIViewModel,
};
