use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prize_catalog::{Prize, PrizeCatalog};
use crate::wheel_config::{LandingStrategy, WheelConfig};

/// Where the fixed pointer sits in the wheel's local frame (0° = +x, clockwise).
pub const POINTER_ANGLE: f64 = 270.0;

/// Fraction of a segment kept clear of its borders when aiming a weighted landing.
const LANDING_MARGIN: f64 = 0.1;

/// Maps any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Index of the segment under the pointer for a wheel turned by `rotation` degrees.
///
/// Segments are equal arcs laid out in catalog order from local angle 0.
///
/// # Panics
/// Panics if `segments` is zero.
pub fn resolve_index(rotation: f64, segments: usize) -> usize {
    assert!(segments > 0, "cannot resolve a wheel without segments");
    let adjusted = normalize_degrees(POINTER_ANGLE + normalize_degrees(rotation));
    let segment = 360.0 / segments as f64;
    ((adjusted / segment).floor() as usize) % segments
}

/// `1 - (1 - t)^exponent`, with `t` clamped to `[0, 1]`.
pub fn ease_out(progress: f64, exponent: i32) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(exponent)
}

/// One spin's animation parameters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_time_ms: f64,
    pub duration_ms: f64,
}

impl Trajectory {
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Un-normalized rotation at `now_ms`.
    pub fn rotation_at(&self, now_ms: f64, exponent: i32) -> f64 {
        let eased = ease_out(self.progress(now_ms), exponent);
        self.start_rotation + (self.target_rotation - self.start_rotation) * eased
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelState {
    pub rotation_degrees: f64,
    pub spinning: bool,
    pub resolved_prize: Option<Prize>,
}

/// What a single animation tick produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinTick {
    /// No spin in flight.
    Idle,
    /// Still animating; schedule another frame.
    Rotating { rotation: f64 },
    /// The spin finished on this tick.
    Resolved { rotation: f64, index: usize, prize: Prize },
}

type ResolutionListener = Box<dyn FnMut(&Prize)>;

/// Owns the wheel state and moves it between Idle and Spinning.
pub struct SpinEngine {
    catalog: PrizeCatalog,
    pending_catalog: Option<PrizeCatalog>,
    config: WheelConfig,
    state: WheelState,
    trajectory: Option<Trajectory>,
    listeners: Vec<ResolutionListener>,
}

impl SpinEngine {
    pub fn new(catalog: PrizeCatalog, config: WheelConfig) -> Self {
        Self {
            catalog,
            pending_catalog: None,
            config,
            state: WheelState::default(),
            trajectory: None,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    /// Registers a callback fired once per completed spin.
    pub fn subscribe(&mut self, listener: impl FnMut(&Prize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Swaps the catalog. A spin in flight keeps the catalog it started with;
    /// the new one takes effect once it resolves.
    pub fn set_catalog(&mut self, catalog: PrizeCatalog) {
        if self.state.spinning {
            self.pending_catalog = Some(catalog);
        } else {
            self.catalog = catalog;
        }
    }

    /// Starts a spin. Returns `false` and changes nothing if one is already running.
    pub fn trigger<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.state.spinning {
            return false;
        }

        let (min_spins, max_spins) = self.config.spin_range();
        let spins = rng.gen_range(min_spins..=max_spins);
        let start = normalize_degrees(self.state.rotation_degrees);
        let offset = self.landing_offset(start, rng);

        self.trajectory = Some(Trajectory {
            start_rotation: start,
            target_rotation: start + f64::from(spins) * 360.0 + offset,
            start_time_ms: now_ms,
            duration_ms: self.config.spin_duration_ms,
        });
        self.state.rotation_degrees = start;
        self.state.spinning = true;
        self.state.resolved_prize = None;

        log::debug!("Spin started: {} turns + {:.1}°", spins, offset);
        true
    }

    /// Advances the animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> SpinTick {
        let trajectory = match (self.state.spinning, self.trajectory) {
            (true, Some(trajectory)) => trajectory,
            _ => return SpinTick::Idle,
        };

        let rotation = normalize_degrees(trajectory.rotation_at(now_ms, self.config.easing_exponent));
        self.state.rotation_degrees = rotation;

        if trajectory.progress(now_ms) < 1.0 {
            return SpinTick::Rotating { rotation };
        }

        self.finish(rotation)
    }

    fn finish(&mut self, rotation: f64) -> SpinTick {
        let index = resolve_index(rotation, self.catalog.len());
        let prize = self.catalog.prizes()[index].clone();

        self.trajectory = None;
        self.state.spinning = false;
        self.state.resolved_prize = Some(prize.clone());

        if let Some(catalog) = self.pending_catalog.take() {
            self.catalog = catalog;
        }

        log::info!("Wheel stopped at {:.1}° on {}", rotation, prize.name);
        for listener in self.listeners.iter_mut() {
            listener(&prize);
        }

        SpinTick::Resolved { rotation, index, prize }
    }

    /// Offset added after the full turns, so that the final rotation is
    /// `normalize(start + offset)`.
    fn landing_offset<R: Rng + ?Sized>(&self, start: f64, rng: &mut R) -> f64 {
        match self.config.landing {
            LandingStrategy::Uniform => rng.gen_range(0.0..360.0),
            LandingStrategy::Weighted => {
                let index = self.catalog.choose_weighted(rng);
                let within = rng.gen_range(LANDING_MARGIN..(1.0 - LANDING_MARGIN));
                let local_angle = (index as f64 + within) * self.catalog.segment_degrees();
                normalize_degrees(local_angle - POINTER_ANGLE - start)
            }
        }
    }
}
