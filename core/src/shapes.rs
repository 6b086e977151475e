//! # Polymorphism over Conditionals
//!
//! Each shape carries only the fields it needs and computes its own area.
//! Adding a shape means adding a type, not editing a `match` on a type string.

use std::f64::consts::PI;

use tidy_common::error::{LessonError, Result};

pub trait Shape {
    fn area(&self) -> f64;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        require_positive(radius, "Radius must be positive")?;
        Ok(Self { radius })
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        require_positive(side, "Side must be positive")?;
        Ok(Self { side })
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Result<Self> {
        if !(base > 0.0 && height > 0.0) {
            return Err(LessonError::invalid_argument(
                "Base and height must be positive",
            ));
        }
        Ok(Self { base, height })
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

// NaN fails `> 0.0` as well, so it is rejected here too.
fn require_positive(value: f64, message: &str) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(LessonError::invalid_argument(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(2.0).unwrap();
        assert!((circle.area() - 4.0 * PI).abs() < 1e-12);
        assert_eq!(circle.name(), "circle");
    }

    #[test]
    fn test_square_area() {
        assert_eq!(Square::new(10.0).unwrap().area(), 100.0);
    }

    #[test]
    fn test_triangle_area() {
        assert_eq!(Triangle::new(4.0, 6.0).unwrap().area(), 12.0);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert_eq!(
            Circle::new(0.0).unwrap_err().to_string(),
            "Radius must be positive"
        );
        assert_eq!(
            Square::new(-1.0).unwrap_err().to_string(),
            "Side must be positive"
        );
        assert!(Triangle::new(4.0, 0.0).is_err());
        assert!(Circle::new(f64::NAN).is_err());
    }

    #[test]
    fn test_total_area_dispatches_per_shape() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Square::new(2.0).unwrap()),
            Box::new(Triangle::new(4.0, 6.0).unwrap()),
        ];
        assert_eq!(total_area(&shapes), 16.0);
    }
}
