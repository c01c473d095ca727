//! Compass heading acquisition.
//!
//! [`HeadingSource`] walks the consent/fallback state machine and keeps the
//! most recent normalized heading. Raw platform events arrive as
//! [`OrientationSample`]s; when no live sensor is usable, the heading is
//! driven by dragging the compass instead ([`DragRotation`]).

use crate::error::SensorError;
use crate::subscription::{SubscriptionToken, Subscribers};

/// Compass direction in degrees, 0 = north, clockwise, always in [0, 360).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HeadingReading {
    degrees: f64,
}

impl HeadingReading {
    pub fn new(degrees: f64) -> Self {
        Self {
            degrees: wrap_degrees(degrees),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Whole degrees for the readout, `360` folded back to `0`.
    pub fn rounded(&self) -> u16 {
        (self.degrees.round() as u16) % 360
    }

    pub fn rotated_by(&self, delta_deg: f64) -> Self {
        Self::new(self.degrees + delta_deg)
    }
}

#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// One raw orientation event as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct OrientationSample {
    /// Vendor compass heading (WebKit), when present.
    pub compass_heading: Option<f64>,
    /// Whether `alpha` is relative to magnetic north.
    pub absolute: bool,
    pub alpha: Option<f64>,
}

/// Screen orientation relative to the device's natural orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScreenRotation {
    #[default]
    Portrait,
    Landscape,
    LandscapeFlipped,
    PortraitFlipped,
}

impl ScreenRotation {
    /// Maps the platform's angle (0, 90, -90, 180). Anything else is portrait.
    pub fn from_angle(angle: i32) -> Self {
        match angle {
            90 => Self::Landscape,
            -90 | 270 => Self::LandscapeFlipped,
            180 | -180 => Self::PortraitFlipped,
            _ => Self::Portrait,
        }
    }

    pub fn offset_deg(self) -> f64 {
        match self {
            Self::Portrait => 0.0,
            Self::Landscape => 90.0,
            Self::LandscapeFlipped => -90.0,
            Self::PortraitFlipped => 180.0,
        }
    }
}

/// Turn a raw sample into a heading.
///
/// Priority: vendor compass heading, then absolute alpha, then relative alpha.
/// Returns `None` when the sample carries no usable angle.
pub fn normalize_heading(sample: &OrientationSample, rotation: ScreenRotation) -> Option<HeadingReading> {
    let raw = match (sample.compass_heading, sample.absolute, sample.alpha) {
        (Some(compass), _, _) => 360.0 - compass,
        // absolute and relative alpha are both taken as-is; whichever event
        // stream fired last wins
        (None, _, Some(alpha)) => alpha,
        (None, _, None) => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(HeadingReading::new(raw + rotation.offset_deg()))
}

/// What the platform offers for orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationSupport {
    Absent,
    /// Events exist but need an explicit user-triggered permission request.
    NeedsPermission,
    Available,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum HeadingState {
    #[default]
    Unrequested,
    PermissionPending,
    Live,
    Simulated(SensorError),
}

#[derive(Debug, Default)]
pub struct HeadingSource {
    state: HeadingState,
    current: HeadingReading,
    listeners: Subscribers<HeadingReading>,
}

impl HeadingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HeadingState {
        &self.state
    }

    pub fn current(&self) -> HeadingReading {
        self.current
    }

    /// Live or Simulated: a heading is available for marking.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, HeadingState::Live | HeadingState::Simulated(_))
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.state, HeadingState::Simulated(_))
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&HeadingReading) + 'static) -> SubscriptionToken {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.listeners.unsubscribe(token)
    }

    /// First step of the protocol. Ignored unless still unrequested.
    pub fn begin(&mut self, support: OrientationSupport) -> &HeadingState {
        if self.state == HeadingState::Unrequested {
            match support {
                OrientationSupport::Absent => self.fall_back(SensorError::CapabilityAbsent),
                OrientationSupport::NeedsPermission => {
                    log::info!("[hunter] orientation needs permission");
                    self.state = HeadingState::PermissionPending;
                }
                OrientationSupport::Available => self.go_live(),
            }
        }
        &self.state
    }

    /// Outcome of the user-triggered permission request.
    pub fn permission_resolved(&mut self, granted: bool) -> &HeadingState {
        if self.state == HeadingState::PermissionPending {
            if granted {
                self.go_live();
            } else {
                self.fall_back(SensorError::PermissionDenied);
            }
        }
        &self.state
    }

    /// The permission request itself failed, or the sensor broke while live.
    pub fn fail(&mut self, error: SensorError) -> &HeadingState {
        if !self.is_simulated() {
            self.fall_back(error);
        }
        &self.state
    }

    /// Feed a platform event. Only accepted while live.
    pub fn on_sample(&mut self, sample: &OrientationSample, rotation: ScreenRotation) -> Option<HeadingReading> {
        if self.state != HeadingState::Live {
            return None;
        }
        let reading = normalize_heading(sample, rotation)?;
        self.publish(reading);
        Some(reading)
    }

    /// Manual rotation. Only accepted while simulated.
    pub fn rotate_by(&mut self, delta_deg: f64) -> Option<HeadingReading> {
        if !self.is_simulated() || !delta_deg.is_finite() {
            return None;
        }
        let reading = self.current.rotated_by(delta_deg);
        self.publish(reading);
        Some(reading)
    }

    fn go_live(&mut self) {
        log::info!("[hunter] orientation live");
        self.state = HeadingState::Live;
    }

    fn fall_back(&mut self, error: SensorError) {
        log::warn!("[hunter] compass simulated: {error}");
        self.state = HeadingState::Simulated(error);
    }

    fn publish(&mut self, reading: HeadingReading) {
        self.current = reading;
        self.listeners.emit(&reading);
    }
}

/// Drag-to-rotate state for the simulated compass.
///
/// Tracks the pointer's angle around the compass centre; each move yields the
/// change since the previous move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotation {
    center: (f64, f64),
    last_angle_deg: f64,
}

impl DragRotation {
    pub fn begin(center: (f64, f64), pointer: (f64, f64)) -> Self {
        Self {
            center,
            last_angle_deg: pointer_angle_deg(center, pointer),
        }
    }

    /// Degrees turned since the last call.
    pub fn update(&mut self, pointer: (f64, f64)) -> f64 {
        let angle = pointer_angle_deg(self.center, pointer);
        let delta = angle - self.last_angle_deg;
        self.last_angle_deg = angle;
        delta
    }
}

/// Screen-space angle of `pointer` around `center` (y grows downward, so
/// positive angles turn clockwise on screen).
#[inline]
pub fn pointer_angle_deg(center: (f64, f64), pointer: (f64, f64)) -> f64 {
    (pointer.1 - center.1).atan2(pointer.0 - center.0).to_degrees()
}
