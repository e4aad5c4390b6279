//! Core abstractions for diagram routing
//!
//! This module defines the traits every archetype plugin implements
//! ([`Detector`], [`LayoutBuilder`], [`Diagram`]) and the shared data they
//! exchange: the upstream input contract, the positioned model, and the
//! scene it serializes to.

mod builder;
mod database;
mod detector;
mod diagram;
mod error;
mod input;
pub mod logging;
mod model;
mod palette;
mod scene;
mod signals;
mod text;
mod types;

pub use builder::*;
pub use database::*;
pub use detector::*;
pub use diagram::*;
pub use error::*;
pub use input::*;
pub use logging::*;
pub use model::*;
pub use palette::*;
pub use scene::*;
pub use signals::*;
pub use text::*;
pub use types::*;
