use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::{CoreError, CoreResult};

/// Area of a `width` x `height` rectangle. Inputs are not validated.
pub fn area(width: f64, height: f64) -> f64 {
    width * height
}

/// Perimeter of a `width` x `height` quadrilateral.
pub fn perimeter(width: f64, height: f64) -> f64 {
    2.0 * (width + height)
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Rectangle with checked, non-negative dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn try_new(width: f64, height: f64) -> CoreResult<Self> {
        ensure_dimension("width", width)?;
        ensure_dimension("height", height)?;
        Ok(Self { width, height })
    }

    pub fn area(&self) -> f64 {
        area(self.width, self.height)
    }

    pub fn perimeter(&self) -> f64 {
        perimeter(self.width, self.height)
    }
}

/// Circle with a checked, non-negative radius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn try_new(radius: f64) -> CoreResult<Self> {
        ensure_dimension("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn area(&self) -> f64 {
        circle_area(self.radius)
    }
}

fn ensure_dimension(name: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value < 0.0 {
        tracing::debug!(dimension = name, value, "rejected dimension");
        return Err(CoreError::ValidationError(format!(
            "{} must be a finite, non-negative number (got {})",
            name, value
        )));
    }
    Ok(())
}
