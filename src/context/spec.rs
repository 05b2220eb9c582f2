//! Parsing of `kind:dim[,dim]` shape descriptions, e.g. `rectangle:10,5`.

use std::str::FromStr;

use crate::context::errors::SpecError;
use crate::fp::shape::Shape;

const RECTANGLE: &[&str] = &["rectangle", "rect"];
const CIRCLE: &[&str] = &["circle"];
const TRIANGLE: &[&str] = &["triangle", "tri", "right-triangle"];

pub fn parse_shape(spec: &str) -> Result<Shape, SpecError> {
    let spec = spec.trim();
    let (kind, dims) = spec.split_once(':').unwrap_or((spec, ""));
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(SpecError::MissingKind);
    }

    let dims = parse_dimensions(dims)?;
    if RECTANGLE.contains(&kind.as_str()) {
        let [width, height] = expect_dimensions::<2>("rectangle", &dims)?;
        Ok(Shape::Rectangle { width, height })
    } else if CIRCLE.contains(&kind.as_str()) {
        let [radius] = expect_dimensions::<1>("circle", &dims)?;
        Ok(Shape::Circle { radius })
    } else if TRIANGLE.contains(&kind.as_str()) {
        let [base, height] = expect_dimensions::<2>("triangle", &dims)?;
        Ok(Shape::RightTriangle { base, height })
    } else {
        Err(SpecError::UnknownKind(kind))
    }
}

fn parse_dimensions(dims: &str) -> Result<Vec<f64>, SpecError> {
    if dims.trim().is_empty() {
        return Ok(Vec::new());
    }
    dims.split(',')
        .map(str::trim)
        .map(|value| {
            value.parse::<f64>().map_err(|source| SpecError::InvalidNumber {
                value: value.to_string(),
                source,
            })
        })
        .collect()
}

fn expect_dimensions<const N: usize>(
    kind: &'static str,
    dims: &[f64],
) -> Result<[f64; N], SpecError> {
    <[f64; N]>::try_from(dims).map_err(|_| SpecError::WrongArity {
        kind,
        expected: N,
        found: dims.len(),
    })
}

impl FromStr for Shape {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shape(s)
    }
}
