use std::f64::consts::PI;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{Encloses, Shape};
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::io::export::export_polygon;
use crate::io::ext_repr::ExtYard;
use crate::supply::YardSupplier;

/// Settings of the synthetic yard generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SyntheticConfig {
    /// Seed for the PRNG, identical seeds generate identical yards
    pub seed: u64,
    pub center: (f64, f64),
    /// Maximum distance of a region vertex from the center, vertices lie within `[0.7, 1.0]` of it
    pub radius: f64,
    pub n_vertices: usize,
    /// Number of obstacles to generate, fewer are returned if not enough fit inside the region
    pub n_obstacles: usize,
    /// Range of the side lengths of the (axis-aligned, rectangular) obstacles
    pub obstacle_size: (f64, f64),
    /// Maximum number of attempts at generating a simple region and at placing an obstacle fully inside it
    pub max_tries: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            center: (25.0, 25.0),
            radius: 25.0,
            n_vertices: 8,
            n_obstacles: 5,
            obstacle_size: (1.0, 4.0),
            max_tries: 1000,
        }
    }
}

/// Generates irregular yards with rectangular obstacles from an explicitly seeded PRNG.
pub struct SyntheticYardSupplier {
    pub config: SyntheticConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    rng: SmallRng,
}

impl SyntheticYardSupplier {
    pub fn new(config: SyntheticConfig) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(config.seed),
        }
    }

    /// Irregular star-shaped polygon: vertices at sorted random angles around the center.
    /// The coordinates are jittered independently, which can fold the polygon onto itself.
    /// Such draws are discarded and redrawn, up to `max_tries` times.
    pub fn generate_region(&mut self) -> Result<SPolygon> {
        let SyntheticConfig {
            radius,
            n_vertices,
            max_tries,
            ..
        } = self.config;
        ensure!(
            n_vertices >= 3,
            "region needs at least 3 vertices: {n_vertices}"
        );
        ensure!(
            radius.is_finite() && radius > 0.0,
            "invalid region radius: {radius}"
        );

        let mut tries = 0;
        loop {
            tries += 1;
            match SPolygon::new(self.sample_star_points()) {
                Ok(region) => {
                    debug!("[SUPPLY] generated a valid region after {tries} tries");
                    return Ok(region);
                }
                Err(e) if tries < max_tries => {
                    debug!("[SUPPLY] discarding generated region: {e}");
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("no valid region generated after {tries} tries")
                    });
                }
            }
        }
    }

    fn sample_star_points(&mut self) -> Vec<Point> {
        let SyntheticConfig {
            center: (cx, cy),
            radius,
            n_vertices,
            ..
        } = self.config;

        let angles = (0..n_vertices)
            .map(|_| self.rng.random_range(0.0..2.0 * PI))
            .sorted_by_key(|a| OrderedFloat(*a))
            .collect_vec();

        angles
            .into_iter()
            .map(|angle| {
                let (sin, cos) = angle.sin_cos();
                Point(
                    cx + cos * radius * self.rng.random_range(0.7..=1.0),
                    cy + sin * radius * self.rng.random_range(0.7..=1.0),
                )
            })
            .collect_vec()
    }

    /// Axis-aligned rectangles with random sizes and positions, kept only if they lie entirely inside `region`.
    pub fn generate_obstacles(&mut self, region: &SPolygon) -> Result<Vec<SPolygon>> {
        let SyntheticConfig {
            n_obstacles,
            obstacle_size: (min_size, max_size),
            max_tries,
            ..
        } = self.config;
        ensure!(
            min_size > 0.0 && min_size <= max_size,
            "invalid obstacle size range: [{min_size}, {max_size}]"
        );

        let bbox = region.bbox();
        let mut obstacles = vec![];
        let mut tries = 0;
        while obstacles.len() < n_obstacles && tries < max_tries {
            tries += 1;
            let w = self.rng.random_range(min_size..=max_size);
            let h = self.rng.random_range(min_size..=max_size);
            if bbox.x_max - w <= bbox.x_min || bbox.y_max - h <= bbox.y_min {
                //obstacle larger than the region
                continue;
            }
            let x = self.rng.random_range(bbox.x_min..bbox.x_max - w);
            let y = self.rng.random_range(bbox.y_min..bbox.y_max - h);
            let obstacle = SPolygon::from(Rect::try_new(x, y, x + w, y + h)?);
            if region.encloses(&obstacle) {
                obstacles.push(obstacle);
            }
        }

        if obstacles.len() < n_obstacles {
            warn!(
                "[SUPPLY] only {}/{} obstacles fit inside the region after {} tries",
                obstacles.len(),
                n_obstacles,
                tries
            );
        }
        Ok(obstacles)
    }
}

impl YardSupplier for SyntheticYardSupplier {
    fn extract(&mut self) -> Result<ExtYard> {
        let region = self.generate_region()?;
        let obstacles = self.generate_obstacles(&region)?;
        info!(
            "[SUPPLY] generated synthetic yard (seed: {}) with area {:.3} and {} obstacles",
            self.config.seed,
            region.area(),
            obstacles.len()
        );

        Ok(ExtYard {
            region: export_polygon(&region),
            obstacles: obstacles.iter().map(export_polygon).collect(),
        })
    }
}
