//! Randomised styles for the decorative particles (hearts and strawberries).
//!
//! Generation is pure so it can run against a seeded RNG in tests; the web
//! front-end turns each style into inline CSS on a fresh DOM node.

use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;

pub type CssProperties<const N: usize> = [(&'static str, String); N];

#[derive(Clone, Debug, PartialEq)]
pub struct HeartStyle {
    pub left_vw: f32,
    pub font_size_px: f32,
    pub green: f32,
    pub blue: f32,
    pub float_sec: f32,
    pub rotation_deg: f32,
}

impl HeartStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen::<f32>() * 100.0,
            font_size_px: HEART_SIZE_MIN_PX + rng.gen::<f32>() * HEART_SIZE_SPAN_PX,
            green: HEART_TINT_MIN + rng.gen::<f32>() * HEART_TINT_SPAN,
            blue: HEART_TINT_MIN + rng.gen::<f32>() * HEART_TINT_SPAN,
            float_sec: HEART_FLOAT_MIN_SEC + rng.gen::<f32>() * HEART_FLOAT_SPAN_SEC,
            rotation_deg: rng.gen::<f32>() * 360.0,
        }
    }

    pub fn css(&self) -> CssProperties<7> {
        [
            ("position", "absolute".to_string()),
            ("left", format!("{}vw", self.left_vw)),
            ("top", "100%".to_string()),
            ("font-size", format!("{}px", self.font_size_px)),
            (
                "color",
                format!("rgba(255, {}, {}, 0.8)", self.green, self.blue),
            ),
            ("animation", format!("float {}s linear", self.float_sec)),
            ("transform", format!("rotate({}deg)", self.rotation_deg)),
        ]
    }
}

/// Hearts released on one spawn tick.
pub fn heart_burst<R: Rng + ?Sized>(rng: &mut R) -> SmallVec<[HeartStyle; HEART_BURST_MAX]> {
    let count = rng.gen_range(HEART_BURST_MIN..=HEART_BURST_MAX);
    (0..count).map(|_| HeartStyle::random(&mut *rng)).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrawberryStyle {
    pub left_px: f32,
    pub size_px: f32,
    pub fall_sec: f32,
    pub delay_sec: f32,
    pub hue_deg: f32,
    pub glow_alpha: f32,
    pub rotation_deg: f32,
}

impl StrawberryStyle {
    /// Random strawberry somewhere across a viewport `viewport_width` px wide.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport_width: f32) -> Self {
        Self {
            left_px: rng.gen::<f32>() * viewport_width.max(0.0),
            size_px: STRAWBERRY_SIZE_MIN_PX + rng.gen::<f32>() * STRAWBERRY_SIZE_SPAN_PX,
            fall_sec: STRAWBERRY_FALL_MIN_SEC + rng.gen::<f32>() * STRAWBERRY_FALL_SPAN_SEC,
            delay_sec: rng.gen::<f32>() * STRAWBERRY_DELAY_MAX_SEC,
            hue_deg: rng.gen::<f32>() * STRAWBERRY_HUE_MAX_DEG,
            glow_alpha: STRAWBERRY_GLOW_MIN_ALPHA + rng.gen::<f32>() * STRAWBERRY_GLOW_SPAN_ALPHA,
            rotation_deg: rng.gen::<f32>() * 360.0,
        }
    }

    pub fn css(&self) -> CssProperties<7> {
        [
            ("left", format!("{}px", self.left_px)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("animation-duration", format!("{}s", self.fall_sec)),
            ("animation-delay", format!("{}s", self.delay_sec)),
            (
                "filter",
                format!(
                    "hue-rotate({}deg) drop-shadow(0 0 3px rgba(255, 51, 102, {}))",
                    self.hue_deg, self.glow_alpha
                ),
            ),
            ("transform", format!("rotate({}deg)", self.rotation_deg)),
        ]
    }
}

/// Live strawberry count, capped at `max`.
#[derive(Clone, Debug)]
pub struct RainPopulation {
    max: usize,
    live: usize,
}

impl Default for RainPopulation {
    fn default() -> Self {
        Self::new(STRAWBERRY_MAX)
    }
}

impl RainPopulation {
    pub fn new(max: usize) -> Self {
        Self { max, live: 0 }
    }

    pub fn live(&self) -> usize {
        self.live
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Reserve a slot for a new strawberry; `false` when the sky is full.
    pub fn try_spawn(&mut self) -> bool {
        if self.live >= self.max {
            return false;
        }
        self.live += 1;
        true
    }

    pub fn despawn(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    /// Initial spawn offsets in ms, one per slot.
    pub fn stagger_ms(&self) -> impl Iterator<Item = u32> {
        (0..self.max as u32).map(|i| i * STRAWBERRY_STAGGER_MS)
    }
}
