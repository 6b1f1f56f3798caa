//! # TUI Components
//!
//! Both components are stateless and props-based: they are built each frame
//! from borrowed data and rendered once.
//!
//! - `ViewPanel`: the projected view (menu, exercise, or completion screen)
//! - `StatusBar`: bottom line with the source file and overall progress
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── view_panel.rs   (Projected view, styled via Theme)
//! └── status_bar.rs   (Bottom status line)
//! ```

pub mod status_bar;
pub mod view_panel;

pub use status_bar::StatusBar;
pub use view_panel::ViewPanel;
