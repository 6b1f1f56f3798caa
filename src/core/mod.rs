//! # Core Application Logic
//!
//! This module contains clifit's workout logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (workouts)   │
//!                    │  • NavState (position)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Workouts, blocks, exercises
//! - [`loader`]: YAML document → `Catalog`
//! - [`state`]: `NavState` and its transitions
//! - [`action`]: The `Action` enum and `update()`
//! - [`input`]: Key tokens → actions
//! - [`view`]: State → tagged lines of text
//! - [`config`]: Settings resolution
//!
//! `loader` and `config` read files; everything else is pure.

pub mod action;
pub mod config;
pub mod input;
pub mod loader;
pub mod model;
pub mod state;
pub mod view;
