use std::f64::consts::PI;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

pub const SEED: u64 = 42;

pub const TEMPERATURE_BASE: f64 = 21.5;
pub const TEMPERATURE_NOISE_STD_DEV: f64 = 0.8;
pub const TEMPERATURE_MIN: f64 = 16.0;
pub const TEMPERATURE_MAX: f64 = 28.0;

pub const ILLUMINANCE_PEAK: f64 = 1000.0;
pub const ILLUMINANCE_RAMP_PER_HOUR: f64 = 250.0;
pub const ILLUMINANCE_NOISE_STD_DEV: f64 = 50.0;

pub const OCCUPANCY_BUSINESS_HOURS: f64 = 0.95;
pub const OCCUPANCY_WEEKDAY_OFF_HOURS: f64 = 0.05;
pub const OCCUPANCY_WEEKEND: f64 = 0.02;

/// Source of the random draws consumed by the signal functions.
pub trait NoiseSource {
    /// Sample from a normal distribution with mean 0.
    fn gaussian(&mut self, std_dev: f64) -> f64;
    /// Sample uniformly from [0, 1).
    fn uniform(&mut self) -> f64;
}

/// Gaussian and uniform draws come from two independently seeded generators.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    normal: StdRng,
    uniform: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> SeededNoise {
        SeededNoise {
            normal: StdRng::seed_from_u64(seed),
            uniform: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn gaussian(&mut self, std_dev: f64) -> f64 {
        let z: f64 = self.normal.sample(StandardNormal);
        z * std_dev
    }

    fn uniform(&mut self) -> f64 {
        self.uniform.random::<f64>()
    }
}

fn is_weekend(timestamp: &NaiveDateTime) -> bool {
    timestamp.weekday().num_days_from_monday() >= 5
}

fn decimal_hour(timestamp: &NaiveDateTime) -> f64 {
    f64::from(timestamp.hour()) + f64::from(timestamp.minute()) / 60.0
}

/// Temperature before noise and weekend offset.
pub fn temperature_base(timestamp: &NaiveDateTime) -> f64 {
    let hour = timestamp.hour();
    match hour {
        9..=18 => TEMPERATURE_BASE + 3.5 * (f64::from(hour - 9) * PI / 9.0).sin(),
        19..=23 | 0..=6 => TEMPERATURE_BASE - 2.0,
        _ => TEMPERATURE_BASE + 1.0,
    }
}

/// Indoor temperature in °C, always within [16, 28]. Draws one gaussian sample.
pub fn temperature(timestamp: &NaiveDateTime, noise: &mut impl NoiseSource) -> f64 {
    let mut celsius = temperature_base(timestamp) + noise.gaussian(TEMPERATURE_NOISE_STD_DEV);
    if is_weekend(timestamp) {
        celsius -= 0.5;
    }
    celsius.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX)
}

/// Daytime illuminance before noise, or `None` outside 8h-18h.
pub fn daylight_base(timestamp: &NaiveDateTime) -> Option<f64> {
    let hour = decimal_hour(timestamp);
    if hour > 8.0 && hour < 18.0 {
        let x = (hour - 8.0) * PI / 10.0;
        Some(ILLUMINANCE_PEAK * x.sin())
    } else {
        None
    }
}

/// Illuminance in lux, never negative. Draws one gaussian sample in daytime only.
pub fn illuminance(timestamp: &NaiveDateTime, noise: &mut impl NoiseSource) -> f64 {
    if let Some(base) = daylight_base(timestamp) {
        return (base + noise.gaussian(ILLUMINANCE_NOISE_STD_DEV)).max(0.0);
    }

    let hour = decimal_hour(timestamp);
    if hour >= 20.0 || hour <= 6.0 {
        0.0
    } else if hour <= 8.0 {
        (hour - 6.0) * ILLUMINANCE_RAMP_PER_HOUR
    } else {
        (20.0 - hour) * ILLUMINANCE_RAMP_PER_HOUR
    }
}

/// Probability that the office is occupied at `timestamp`.
pub fn occupancy_probability(timestamp: &NaiveDateTime) -> f64 {
    if is_weekend(timestamp) {
        OCCUPANCY_WEEKEND
    } else if (9..18).contains(&timestamp.hour()) {
        OCCUPANCY_BUSINESS_HOURS
    } else {
        OCCUPANCY_WEEKDAY_OFF_HOURS
    }
}

/// 1 if occupied, 0 otherwise. Draws one uniform sample.
pub fn occupancy(timestamp: &NaiveDateTime, noise: &mut impl NoiseSource) -> u8 {
    let probability = occupancy_probability(timestamp);
    u8::from(noise.uniform() < probability)
}
