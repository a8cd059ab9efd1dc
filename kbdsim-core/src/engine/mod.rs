//! Keyboard input engine
//!
//! This module provides the state machine that consumes key activations
//! against an active layout and emits committed-text actions, plus the
//! layer resolver it is built on.

mod engine;
mod output;
mod resolver;
mod state;

pub use engine::InputEngine;
pub use output::Action;
pub use resolver::{output_for, resolve_layer};
pub use state::{EngineState, ModifierState};
