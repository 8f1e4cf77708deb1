//! Random shape construction with an injectable, seedable source.

use super::color::Color;
use super::error::BoardError;
use super::point::Point;
use super::shape::{Shape, ShapeType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bounds for randomly sized shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeLimits {
    /// Circles get a radius in `1..=max_circle_radius`
    pub max_circle_radius: i32,
    /// Diamond sides are `(rand(0..max_diamond_half) + 5) * 2`
    pub max_diamond_half: i32,
    /// Arrow shafts are `1..=max_arrow_shaft` thick
    pub max_arrow_shaft: i32,
    /// Arrows get `rand(0..max_arrow_extra_length)` on top of 4x the shaft
    pub max_arrow_extra_length: i32,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            max_circle_radius: 100,
            max_diamond_half: 100,
            max_arrow_shaft: 75,
            max_arrow_extra_length: 75,
        }
    }
}

/// Builds shapes with random colors and sizes.
///
/// Tests and scripted sessions pass a seed so every run produces the same
/// shapes; interactive use seeds from the OS.
pub struct ShapeFactory {
    rng: StdRng,
    limits: ShapeLimits,
}

impl ShapeFactory {
    pub fn seeded(seed: u64, limits: ShapeLimits) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            limits,
        }
    }

    pub fn from_entropy(limits: ShapeLimits) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            limits,
        }
    }

    /// Draws a color with every channel (alpha included) uniformly random.
    pub fn random_color(&mut self) -> Color {
        Color::new(self.rng.r#gen(), self.rng.r#gen(), self.rng.r#gen(), self.rng.r#gen())
    }

    /// Creates a randomly sized shape of the given type anchored at `at`.
    pub fn create(&mut self, shape_type: ShapeType, at: Point) -> Result<Shape, BoardError> {
        let color = self.random_color();
        let limits = self.limits;
        match shape_type {
            ShapeType::Circle => {
                let radius = self.rng.gen_range(1..=limits.max_circle_radius.max(1));
                Shape::circle(at, radius, color)
            }
            ShapeType::Diamond => {
                let half = limits.max_diamond_half.max(1);
                let height = (self.rng.gen_range(0..half) + 5) * 2;
                let width = (self.rng.gen_range(0..half) + 5) * 2;
                Shape::diamond(at, height, width, color)
            }
            ShapeType::Arrow => {
                let shaft = self.rng.gen_range(1..=limits.max_arrow_shaft.max(1));
                let extra = self.rng.gen_range(0..limits.max_arrow_extra_length.max(1));
                Shape::arrow(at, shaft * 4 + extra, shaft, color)
            }
        }
    }
}
