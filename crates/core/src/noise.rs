//! Noise module - seeded fractal value noise for terrain seeding
//!
//! Produces a `height x width` grid of values in roughly `[-1, 1]` that tiles
//! seamlessly: octave `o` uses a lattice of `round(frequency * lacunarity^o)`
//! cells that wraps at the map edge.
//!
//! Lattice values come from a tiny LCG seeded per lattice point, so the same
//! seed always produces the same terrain.

use crate::types::{
    DEFAULT_SEED, NOISE_FREQUENCY, NOISE_LACUNARITY, NOISE_OCTAVES, NOISE_PERSISTENCE,
};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[-1, 1]`
    pub fn next_signed(&mut self) -> f64 {
        // High bits of an LCG are the well-mixed ones.
        let bits = self.next_u32() >> 8;
        (bits as f64 / ((1u32 << 24) - 1) as f64) * 2.0 - 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    pub frequency: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    pub seed: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: NOISE_FREQUENCY,
            octaves: NOISE_OCTAVES,
            persistence: NOISE_PERSISTENCE,
            lacunarity: NOISE_LACUNARITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl NoiseParams {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// Row-major noise map (`map[y][x]`)
pub fn noise_map(width: u16, height: u16, params: &NoiseParams) -> Vec<Vec<f32>> {
    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let u = x as f64 / width.max(1) as f64;
            let v = y as f64 / height.max(1) as f64;
            row.push(fractal(u, v, params) as f32);
        }
        rows.push(row);
    }
    rows
}

/// Sum of octaves at unit-square coordinate `(u, v)`, normalised by total amplitude
fn fractal(u: f64, v: f64, params: &NoiseParams) -> f64 {
    let mut sum = 0.0;
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = params.frequency;

    for octave in 0..params.octaves.max(1) {
        let period = (frequency.round() as i64).max(1);
        sum += amplitude * value_noise(u * period as f64, v * period as f64, period, octave, params.seed);
        total += amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    if total > 0.0 {
        sum / total
    } else {
        0.0
    }
}

fn value_noise(x: f64, y: f64, period: i64, octave: u32, seed: u32) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let tx = smoothstep(x - x0);
    let ty = smoothstep(y - y0);
    let (ix, iy) = (x0 as i64, y0 as i64);

    let corner = |dx: i64, dy: i64| {
        lattice(
            (ix + dx).rem_euclid(period),
            (iy + dy).rem_euclid(period),
            octave,
            seed,
        )
    };

    let top = lerp(corner(0, 0), corner(1, 0), tx);
    let bottom = lerp(corner(0, 1), corner(1, 1), tx);
    lerp(top, bottom, ty)
}

fn lattice(ix: i64, iy: i64, octave: u32, seed: u32) -> f64 {
    let mut h = seed ^ octave.wrapping_mul(0x9E37_79B9);
    h = h.wrapping_mul(0x85EB_CA6B) ^ (ix as u32);
    h = h.wrapping_mul(0xC2B2_AE35) ^ (iy as u32);
    h ^= h >> 16;
    let mut rng = SimpleRng::new(h);
    rng.next_u32();
    rng.next_signed()
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
