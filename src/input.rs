//! Keyboard input handling
//!
//! Key events only flip flags; the simulation reads a single [`Steer`]
//! per frame.

/// Horizontal intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    Right,
    /// Both keys held: right first, left if the paddle can't go right
    Both,
    #[default]
    None,
}

impl Steer {
    pub fn wants_right(&self) -> bool {
        matches!(self, Steer::Right | Steer::Both)
    }

    pub fn wants_left(&self) -> bool {
        matches!(self, Steer::Left | Steer::Both)
    }
}

/// Logical keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. "Left"/"Right" are the legacy
    /// names some browsers still report.
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "Right" | "ArrowRight" => Some(Key::Right),
            "Left" | "ArrowLeft" => Some(Key::Left),
            _ => None,
        }
    }
}

/// Held state of the two steering keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Handle key down. Returns false for keys the game ignores.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle key up. Returns false for keys the game ignores.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match Key::from_dom(key) {
            Some(Key::Right) => self.right = held,
            Some(Key::Left) => self.left = held,
            None => return false,
        }
        true
    }

    /// Resolve held keys for this frame
    pub fn steer(&self) -> Steer {
        match (self.left, self.right) {
            (true, true) => Steer::Both,
            (false, true) => Steer::Right,
            (true, false) => Steer::Left,
            (false, false) => Steer::None,
        }
    }
}
