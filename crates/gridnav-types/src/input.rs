//! Platform-agnostic input event types.
//!
//! Every remote-control or keyboard backend maps its native input to these
//! enums. The navigator only ever sees a [`Direction`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// A platform-agnostic input event delivered to a grid view.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A remote-control button pressed.
    ButtonPress(Button),
    /// A remote-control button released.
    ButtonRelease(Button),
    /// User requested quit (window close, power key, etc.).
    Quit,
}

/// Remote-control buttons that map across all platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Back,
    Menu,
}

/// A cardinal navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a D-pad button to its direction. Other buttons have none.
    pub fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::Up => Some(Self::Up),
            Button::Down => Some(Self::Down),
            Button::Left => Some(Self::Left),
            Button::Right => Some(Self::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether travel happens along the y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.pad(name)
    }
}

impl FromStr for Direction {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(NavError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Direction mapping --

    #[test]
    fn dpad_buttons_map_to_directions() {
        assert_eq!(Direction::from_button(Button::Up), Some(Direction::Up));
        assert_eq!(Direction::from_button(Button::Down), Some(Direction::Down));
        assert_eq!(Direction::from_button(Button::Left), Some(Direction::Left));
        assert_eq!(
            Direction::from_button(Button::Right),
            Some(Direction::Right)
        );
    }

    #[test]
    fn other_buttons_have_no_direction() {
        for btn in [Button::Confirm, Button::Cancel, Button::Back, Button::Menu] {
            assert_eq!(Direction::from_button(btn), None);
        }
    }

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn vertical_axis() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    // -- Parsing --

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" Down ".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("l".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
    }

    #[test]
    fn parse_unknown_direction_fails() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert!(matches!(err, NavError::InvalidDirection(ref s) if s == "north"));
    }

    #[test]
    fn display_parses_back() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }

    // -- Events --

    #[test]
    fn button_release_differs_from_press() {
        let press = InputEvent::ButtonPress(Button::Confirm);
        let release = InputEvent::ButtonRelease(Button::Confirm);
        assert_ne!(press, release);
    }

    #[test]
    fn direction_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Left);
    }
}
