use std::f64::consts::PI;

/// Anything with a flat area and a perimeter.
pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// A triangle whose base and height are the two legs of a right angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle {
    pub base: f64,
    pub height: f64,
}

impl RightTriangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    pub fn hypotenuse(&self) -> f64 {
        (self.base * self.base + self.height * self.height).sqrt()
    }
}

impl Shape for RightTriangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn perimeter(&self) -> f64 {
        self.base + self.height + self.hypotenuse()
    }
}

/// Sum of the areas of every shape in `shapes`.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

pub fn demo() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Rectangle::new(10.0, 5.0)),
        Box::new(Circle::new(10.0)),
        Box::new(RightTriangle::new(10.0, 5.0)),
    ]
}
