//! Cell geometry.
//!
//! A [`Cell`] is an axis-aligned rectangle describing one selectable tile.
//! All cells of a set share one coordinate space; y grows downwards.

use serde::{Deserialize, Serialize};

/// One selectable tile of a grid-like layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "w")]
    pub width: f64,
    #[serde(alias = "h")]
    pub height: f64,
}

impl Cell {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check that every field is finite, both extents are positive, and the
    /// computed far edges lie strictly beyond the near ones.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} is not finite ({value})"));
            }
        }
        if self.width <= 0.0 {
            return Err(format!("width must be positive (got {})", self.width));
        }
        if self.height <= 0.0 {
            return Err(format!("height must be positive (got {})", self.height));
        }
        if !self.right().is_finite() || !self.bottom().is_finite() {
            return Err("edge coordinates overflow".to_string());
        }
        if self.right() <= self.left() || self.bottom() <= self.top() {
            return Err("extent lost to precision".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let c = Cell::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(c.left(), 10.0);
        assert_eq!(c.right(), 110.0);
        assert_eq!(c.top(), 20.0);
        assert_eq!(c.bottom(), 70.0);
    }

    #[test]
    fn valid_cell() {
        assert!(Cell::new(-5.0, 0.0, 1.0, 0.5).validate().is_ok());
    }

    #[test]
    fn nan_rejected() {
        let err = Cell::new(f64::NAN, 0.0, 10.0, 10.0).validate().unwrap_err();
        assert!(err.starts_with("x is not finite"));
    }

    #[test]
    fn infinite_height_rejected() {
        let err = Cell::new(0.0, 0.0, 10.0, f64::INFINITY)
            .validate()
            .unwrap_err();
        assert!(err.starts_with("height is not finite"));
    }

    #[test]
    fn zero_width_rejected() {
        let err = Cell::new(0.0, 0.0, 0.0, 10.0).validate().unwrap_err();
        assert!(err.starts_with("width must be positive"));
    }

    #[test]
    fn negative_height_rejected() {
        let err = Cell::new(0.0, 0.0, 10.0, -1.0).validate().unwrap_err();
        assert!(err.starts_with("height must be positive"));
    }

    #[test]
    fn overflowing_edge_rejected() {
        let err = Cell::new(f64::MAX, 0.0, f64::MAX, 1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, "edge coordinates overflow");
    }

    #[test]
    fn extent_below_precision_rejected() {
        let err = Cell::new(1e17, 0.0, 1.0, 50.0).validate().unwrap_err();
        assert_eq!(err, "extent lost to precision");
        let err = Cell::new(0.0, -1e17, 50.0, 1.0).validate().unwrap_err();
        assert_eq!(err, "extent lost to precision");
    }

    #[test]
    fn deserialize_short_extent_names() {
        let c: Cell = serde_json::from_str(r#"{"x":1,"y":2,"w":3,"h":4}"#).unwrap();
        assert_eq!(c, Cell::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn deserialize_long_extent_names() {
        let c: Cell = toml::from_str("x = 0\ny = 0\nwidth = 100\nheight = 50").unwrap();
        assert_eq!(c, Cell::new(0.0, 0.0, 100.0, 50.0));
    }
}
