//! Formula engine
//!
//! Area and perimeter for each shape. Both values are computed together and
//! either both succeed or the computation fails as a whole.

use crate::{Field, Measurements, PiMode, Shape, TutorError, TutorResult};
use serde::Serialize;

/// Area and perimeter of one shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation {
    pub area: f64,
    pub perimeter: f64,
}

/// Compute area and perimeter for a shape
pub fn compute(shape: Shape, measurements: &Measurements, pi: PiMode) -> TutorResult<Computation> {
    let area = area(shape, measurements, pi)?;
    let perimeter = perimeter(shape, measurements, pi)?;
    tracing::debug!(%shape, area, perimeter, "computed");
    Ok(Computation { area, perimeter })
}

pub fn area(shape: Shape, m: &Measurements, pi: PiMode) -> TutorResult<f64> {
    let value = match shape {
        Shape::Square => {
            let side = m.require(Field::Side)?;
            side * side
        }
        Shape::Rectangle => m.require(Field::Length)? * m.require(Field::Width)?,
        Shape::Triangle => 0.5 * m.require(Field::Base)? * m.require(Field::Height)?,
        Shape::Circle => {
            let radius = m.require(Field::Radius)?;
            pi.value() * radius * radius
        }
    };
    finite(value, shape, "area")
}

/// Perimeter, or circumference for a circle.
///
/// A triangle's perimeter comes from its three sides, independently of the
/// base and height used for its area.
pub fn perimeter(shape: Shape, m: &Measurements, pi: PiMode) -> TutorResult<f64> {
    let value = match shape {
        Shape::Square => 4.0 * m.require(Field::Side)?,
        Shape::Rectangle => 2.0 * (m.require(Field::Length)? + m.require(Field::Width)?),
        Shape::Triangle => {
            m.require(Field::Side1)? + m.require(Field::Side2)? + m.require(Field::Side3)?
        }
        Shape::Circle => 2.0 * pi.value() * m.require(Field::Radius)?,
    };
    finite(value, shape, "perimeter")
}

fn finite(value: f64, shape: Shape, quantity: &str) -> TutorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TutorError::Computation(format!(
            "{} {} is too large to represent",
            shape, quantity
        )))
    }
}
