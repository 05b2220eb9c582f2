use std::f64::consts::PI;
use std::fmt;

use crate::oop;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    RightTriangle { base: f64, height: f64 },
}

pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Rectangle { width, height } => width * height,
        Shape::Circle { radius } => PI * radius * radius,
        Shape::RightTriangle { base, height } => 0.5 * base * height,
    }
}

pub fn perimeter(shape: &Shape) -> f64 {
    match shape {
        Shape::Rectangle { width, height } => 2.0 * (width + height),
        Shape::Circle { radius } => 2.0 * PI * radius,
        // Base and height are taken as the legs of a right angle.
        Shape::RightTriangle { base, height } => {
            base + height + (base * base + height * height).sqrt()
        }
    }
}

pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(area).sum()
}

pub fn kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Rectangle { .. } => "rectangle",
        Shape::Circle { .. } => "circle",
        Shape::RightTriangle { .. } => "triangle",
    }
}

/// Lets the tagged form be used anywhere a `dyn oop::shape::Shape` is expected.
impl oop::shape::Shape for Shape {
    fn area(&self) -> f64 {
        area(self)
    }

    fn perimeter(&self) -> f64 {
        perimeter(self)
    }
}

impl From<oop::shape::Rectangle> for Shape {
    fn from(r: oop::shape::Rectangle) -> Self {
        Shape::Rectangle { width: r.width, height: r.height }
    }
}

impl From<oop::shape::Circle> for Shape {
    fn from(c: oop::shape::Circle) -> Self {
        Shape::Circle { radius: c.radius }
    }
}

impl From<oop::shape::RightTriangle> for Shape {
    fn from(t: oop::shape::RightTriangle) -> Self {
        Shape::RightTriangle { base: t.base, height: t.height }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?}: area={:.6} perimeter={:.6}",
            self,
            area(self),
            perimeter(self)
        )
    }
}

pub fn demo() -> Vec<Shape> {
    vec![
        Shape::Rectangle { width: 10.0, height: 5.0 },
        Shape::Circle { radius: 10.0 },
        Shape::RightTriangle { base: 10.0, height: 5.0 },
    ]
}
