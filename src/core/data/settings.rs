//! View parameters edited by the control panel and the per-frame snapshot taken from them.

use crate::core::data::surface_size::SurfaceSize;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

pub const DEFAULT_SCALE: f64 = -2.5;
pub const DEFAULT_ITERATIONS: u32 = 50;
pub const DEFAULT_TOLERANCE: f64 = -2.0;

/// Sampling stride of the first frame after a restart.
pub const COARSEST_DETAIL: u32 = 20;

/// Ranges the control panel offers. Updates posted through the render context are
/// clamped into them.
pub struct SettingsRanges;

impl SettingsRanges {
    pub const SCALE: RangeInclusive<f64> = -4.0..=-2.0;
    pub const DETAIL: RangeInclusive<f64> = 1.0..=20.0;
    pub const ITERATIONS: RangeInclusive<u32> = 1..=100;
    pub const TOLERANCE: RangeInclusive<f64> = -3.0..=1.0;
}

fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }

    value.clamp(*range.start(), *range.end())
}

/// Floors a possibly fractional stride to a whole number of pixels, never below one.
#[must_use]
pub fn normalize_detail(detail: f64) -> NonZeroU32 {
    if detail.is_nan() || detail < 1.0 {
        return NonZeroU32::MIN;
    }

    NonZeroU32::new(detail.floor().min(f64::from(u32::MAX)) as u32).unwrap_or(NonZeroU32::MIN)
}

/// Shared, user-editable view settings.
///
/// `scale` and `tolerance` are base-10 exponents. `center_x`/`center_y` are the pixel
/// that maps to the plane origin. `detail` mirrors the stride of the frame in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub detail: f64,
    pub iterations: u32,
    pub tolerance: f64,
}

impl Settings {
    #[must_use]
    pub fn for_surface(size: SurfaceSize) -> Self {
        let (center_x, center_y) = size.center();

        Self {
            scale: DEFAULT_SCALE,
            center_x,
            center_y,
            detail: f64::from(COARSEST_DETAIL),
            iterations: DEFAULT_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            scale: clamp_to(self.scale, &SettingsRanges::SCALE),
            detail: clamp_to(self.detail, &SettingsRanges::DETAIL),
            iterations: self.iterations.clamp(
                *SettingsRanges::ITERATIONS.start(),
                *SettingsRanges::ITERATIONS.end(),
            ),
            tolerance: clamp_to(self.tolerance, &SettingsRanges::TOLERANCE),
            ..self
        }
    }

    /// Snapshot for one frame, using the settings' own `detail`.
    #[must_use]
    pub fn snapshot(&self) -> FrameSettings {
        self.snapshot_with_detail(normalize_detail(self.detail))
    }

    /// Snapshot for one frame with the stride overridden.
    #[must_use]
    pub fn snapshot_with_detail(&self, detail: NonZeroU32) -> FrameSettings {
        FrameSettings {
            scale: self.scale,
            center_x: self.center_x,
            center_y: self.center_y,
            detail,
            iterations: NonZeroU32::new(self.iterations).unwrap_or(NonZeroU32::MIN),
            tolerance: self.tolerance,
        }
    }
}

/// Immutable, normalized settings for a single frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSettings {
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub detail: NonZeroU32,
    pub iterations: NonZeroU32,
    pub tolerance: f64,
}
