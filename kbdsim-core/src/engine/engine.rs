//! The keyboard input engine
//!
//! Consumes key activations against the active layout, maintains modifier
//! and deadkey state and emits committed-text actions. The engine raises no
//! errors: with no active layout, or on missing outputs, every operation is
//! a no-op.

use std::sync::Arc;

use super::output::Action;
use super::resolver::{output_for, resolve_layer};
use super::state::{EngineState, ModifierState};
use crate::types::{FunctionKey, KeyDefinition, KeyKind, Layer, Layout, ModifierKey};

/// How a key was activated. Virtual clicks toggle and latch modifiers;
/// physical holds follow the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    Click,
    Hold,
}

/// The input state machine driving one active layout.
pub struct InputEngine {
    /// Immutable snapshot of the active layout; replaced wholesale
    layout: Option<Arc<Layout>>,
    state: EngineState,
}

impl Default for InputEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InputEngine {
    pub fn new() -> Self {
        Self {
            layout: None,
            state: EngineState::new(),
        }
    }

    pub fn with_layout(layout: Arc<Layout>) -> Self {
        let mut engine = Self::new();
        engine.set_layout(layout);
        engine
    }

    /// Swaps the active layout and resets the state. Deadkey tables and
    /// layer sets are layout-specific; stale state must never leak across
    /// layouts.
    pub fn set_layout(&mut self, layout: Arc<Layout>) {
        self.layout = Some(layout);
        self.state.reset();
    }

    pub fn clear_layout(&mut self) {
        self.layout = None;
        self.state.reset();
    }

    pub fn layout(&self) -> Option<&Arc<Layout>> {
        self.layout.as_ref()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn modifiers(&self) -> ModifierState {
        self.state.modifiers()
    }

    /// Layer the current modifier state selects
    pub fn active_layer(&self) -> Layer {
        resolve_layer(&self.state.modifiers)
    }

    /// Deadkey awaiting its combining partner, for key highlighting
    pub fn pending_deadkey(&self) -> Option<&str> {
        self.state.pending_deadkey()
    }

    pub fn pressed_key(&self) -> Option<&str> {
        self.state.pressed_key()
    }

    /// Resets the engine state and asks the consumer to clear its text
    pub fn clear(&mut self) -> Action {
        self.state.reset();
        Action::ClearAll
    }

    /// Resets modifier flags, latches, pending deadkey and pressed key
    pub fn clear_state(&mut self) {
        self.state.reset();
    }

    /// Virtual click on a key of the rendered layout
    pub fn click(&mut self, key: &KeyDefinition) -> Action {
        if self.layout.is_none() {
            return Action::None;
        }
        self.activate(key, Activation::Click)
    }

    /// Physical key-down, resolved against the active layout's key-id set.
    /// Unknown codes are ignored.
    pub fn key_down(&mut self, code: &str) -> Action {
        let Some(key) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.key(code))
            .cloned()
        else {
            return Action::None;
        };
        self.state.pressed_key = Some(key.id.clone());
        self.activate(&key, Activation::Hold)
    }

    /// Physical key-up. Releases held modifiers; caps-lock is ignored on
    /// release.
    pub fn key_up(&mut self, code: &str) {
        if self.state.pressed_key.as_deref() == Some(code) {
            self.state.pressed_key = None;
        }
        let Some(kind) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.key(code))
            .map(|key| key.kind)
        else {
            return;
        };
        if let KeyKind::Modifier(modifier) = kind {
            match modifier {
                ModifierKey::Caps | ModifierKey::Symbols => {}
                ModifierKey::Shift | ModifierKey::Alt | ModifierKey::Cmd | ModifierKey::Ctrl => {
                    self.state.release_modifier(modifier);
                }
            }
        }
    }

    fn activate(&mut self, key: &KeyDefinition, source: Activation) -> Action {
        match key.kind {
            KeyKind::Modifier(modifier) => {
                self.apply_modifier(modifier, source);
                Action::None
            }
            KeyKind::Function(FunctionKey::Backspace) => self.press_backspace(),
            KeyKind::Function(FunctionKey::Tab) => self.commit_control('\t'),
            KeyKind::Enter => self.commit_control('\n'),
            KeyKind::Normal | KeyKind::Space => self.press_printable(key),
        }
    }

    /// Modifier activations never clear other latches.
    fn apply_modifier(&mut self, modifier: ModifierKey, source: Activation) {
        let mods = &mut self.state.modifiers;
        match modifier {
            // toggles unconditionally on every activation, never latched
            ModifierKey::Caps => mods.caps = !mods.caps,
            ModifierKey::Symbols => {
                mods.symbols = !mods.symbols;
                if !mods.symbols {
                    mods.symbols2 = false;
                }
            }
            // while symbols mode is active, shift switches the symbols page
            ModifierKey::Shift if mods.symbols => mods.symbols2 = !mods.symbols2,
            ModifierKey::Shift | ModifierKey::Alt | ModifierKey::Cmd | ModifierKey::Ctrl => {
                match source {
                    Activation::Hold => self.state.hold_modifier(modifier),
                    Activation::Click => self.state.toggle_modifier(modifier),
                }
            }
        }
    }

    /// A pending deadkey is cancelled silently; otherwise one unit of
    /// deletion is requested.
    fn press_backspace(&mut self) -> Action {
        let action = if self.state.pending_deadkey.take().is_some() {
            Action::None
        } else {
            Action::DeleteBackward
        };
        self.state.clear_latches();
        action
    }

    /// Enter and tab flush a pending deadkey verbatim ahead of the control
    /// character.
    fn commit_control(&mut self, ch: char) -> Action {
        let mut text = self.state.pending_deadkey.take().unwrap_or_default();
        text.push(ch);
        self.state.clear_latches();
        Action::Commit(text)
    }

    fn press_printable(&mut self, key: &KeyDefinition) -> Action {
        let layer = resolve_layer(&self.state.modifiers);
        let output = output_for(key, layer).to_string();
        if output.is_empty() {
            return Action::None;
        }
        let Some(layout) = self.layout.as_deref() else {
            return Action::None;
        };

        if let Some(pending) = self.state.pending_deadkey.take() {
            // compose when the table knows the pair, never lose the trigger
            let text = match layout.deadkeys.compose(&pending, &output) {
                Some(composed) => composed.to_string(),
                None => format!("{pending}{output}"),
            };
            self.state.clear_latches();
            Action::Commit(text)
        } else if layout.deadkeys.is_trigger(&output) {
            self.state.pending_deadkey = Some(output);
            self.state.clear_latches();
            Action::None
        } else {
            self.state.clear_latches();
            Action::Commit(output)
        }
    }
}
