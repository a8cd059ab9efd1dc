//! Engine state: modifiers, click-latches, pending deadkey

use crate::types::ModifierKey;

/// State of the modifier keys.
///
/// `caps` is a sticky toggle; the four desktop modifiers may be held or
/// click-latched. The two symbols flags exist for mobile layouts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub caps: bool,
    pub alt: bool,
    pub cmd: bool,
    pub ctrl: bool,
    pub symbols: bool,
    pub symbols2: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any desktop modifier is active
    pub fn any(&self) -> bool {
        self.shift || self.caps || self.alt || self.cmd || self.ctrl
    }
}

/// Which of the four latchable modifiers are currently click-latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LatchSet {
    shift: bool,
    alt: bool,
    cmd: bool,
    ctrl: bool,
}

/// Complete mutable state of the input engine for one active layout.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub(crate) modifiers: ModifierState,
    latched: LatchSet,
    pub(crate) pending_deadkey: Option<String>,
    pub(crate) pressed_key: Option<String>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every flag, latch, pending deadkey and pressed-key indicator.
    /// Runs whenever the active layout is replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn pending_deadkey(&self) -> Option<&str> {
        self.pending_deadkey.as_deref()
    }

    pub fn pressed_key(&self) -> Option<&str> {
        self.pressed_key.as_deref()
    }

    pub fn is_latched(&self, modifier: ModifierKey) -> bool {
        match modifier {
            ModifierKey::Shift => self.latched.shift,
            ModifierKey::Alt => self.latched.alt,
            ModifierKey::Cmd => self.latched.cmd,
            ModifierKey::Ctrl => self.latched.ctrl,
            ModifierKey::Caps | ModifierKey::Symbols => false,
        }
    }

    /// Physical key-down: the flag follows the key
    pub(crate) fn hold_modifier(&mut self, modifier: ModifierKey) {
        if let Some(flag) = self.flag_mut(modifier) {
            *flag = true;
        }
    }

    /// Physical key-up: flag off, latch off
    pub(crate) fn release_modifier(&mut self, modifier: ModifierKey) {
        if let Some(flag) = self.flag_mut(modifier) {
            *flag = false;
        }
        self.set_latch(modifier, false);
    }

    /// Virtual click: toggle, and latch when the toggle switched the flag on
    pub(crate) fn toggle_modifier(&mut self, modifier: ModifierKey) {
        if let Some(flag) = self.flag_mut(modifier) {
            *flag = !*flag;
            let now_on = *flag;
            self.set_latch(modifier, now_on);
        }
    }

    /// Consumes every latch, switching the latched flags off. Runs after a
    /// committed character or special action.
    pub(crate) fn clear_latches(&mut self) {
        if self.latched.shift {
            self.modifiers.shift = false;
        }
        if self.latched.alt {
            self.modifiers.alt = false;
        }
        if self.latched.cmd {
            self.modifiers.cmd = false;
        }
        if self.latched.ctrl {
            self.modifiers.ctrl = false;
        }
        self.latched = LatchSet::default();
    }

    fn flag_mut(&mut self, modifier: ModifierKey) -> Option<&mut bool> {
        match modifier {
            ModifierKey::Shift => Some(&mut self.modifiers.shift),
            ModifierKey::Alt => Some(&mut self.modifiers.alt),
            ModifierKey::Cmd => Some(&mut self.modifiers.cmd),
            ModifierKey::Ctrl => Some(&mut self.modifiers.ctrl),
            // caps and symbols toggle through their own paths, never latch
            ModifierKey::Caps | ModifierKey::Symbols => None,
        }
    }

    fn set_latch(&mut self, modifier: ModifierKey, value: bool) {
        match modifier {
            ModifierKey::Shift => self.latched.shift = value,
            ModifierKey::Alt => self.latched.alt = value,
            ModifierKey::Cmd => self.latched.cmd = value,
            ModifierKey::Ctrl => self.latched.ctrl = value,
            ModifierKey::Caps | ModifierKey::Symbols => {}
        }
    }
}
