use wasm_bindgen::prelude::*;

use crate::fp::shape::{self, Shape};
use crate::oop::shape::{Circle, Rectangle, RightTriangle, Shape as _};
use crate::utils;

#[wasm_bindgen]
pub fn factorial(n: i64) -> i64 {
    utils::factorial(n)
}

#[wasm_bindgen]
pub fn repeat(s: &str, count: i64) -> String {
    utils::repeat(s, count)
}

#[wasm_bindgen]
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    Rectangle::new(width, height).area()
}

#[wasm_bindgen]
pub fn rectangle_perimeter(width: f64, height: f64) -> f64 {
    Rectangle::new(width, height).perimeter()
}

#[wasm_bindgen]
pub fn circle_area(radius: f64) -> f64 {
    Circle::new(radius).area()
}

#[wasm_bindgen]
pub fn circle_perimeter(radius: f64) -> f64 {
    Circle::new(radius).perimeter()
}

#[wasm_bindgen]
pub fn triangle_area(base: f64, height: f64) -> f64 {
    RightTriangle::new(base, height).area()
}

#[wasm_bindgen]
pub fn triangle_perimeter(base: f64, height: f64) -> f64 {
    RightTriangle::new(base, height).perimeter()
}

/// Area of a shape given as `kind:dims`, e.g. `circle:10`.
#[wasm_bindgen]
pub fn shape_area(spec: &str) -> Result<f64, JsValue> {
    spec.parse::<Shape>()
        .map(|s| shape::area(&s))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
