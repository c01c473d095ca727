//! Treasure hunter: heading + position + distance -> marked target.

use crate::constants::{EARTH_RADIUS_M, FIX_TIMEOUT_MS};
use crate::distance::DistanceSelector;
use crate::error::SensorError;
use crate::geo::{project_on_sphere, GeoFix};
use crate::heading::{
    HeadingReading, HeadingSource, HeadingState, OrientationSample, OrientationSupport,
    ScreenRotation,
};
use crate::position::{PositionSource, PositionState};
use crate::subscription::SubscriptionToken;

#[derive(Clone, Debug, PartialEq)]
pub struct HunterParams {
    pub earth_radius_m: f64,
    pub high_accuracy: bool,
    pub fix_timeout_ms: u32,
}

impl Default for HunterParams {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            high_accuracy: true,
            fix_timeout_ms: FIX_TIMEOUT_MS,
        }
    }
}

/// Result of a "mark" action. Never changes after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkedTarget {
    pub origin: GeoFix,
    pub heading_deg: f64,
    pub distance_m: f64,
    pub projected: GeoFix,
}

/// What the mark button should currently do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkControl {
    Disabled,
    /// Pressing it asks for orientation permission (needs a user gesture).
    RequestPermission,
    Ready,
}

/// Latest user-facing status.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Starting,
    OrientationPrompt,
    OrientationAvailable,
    OrientationSimulated(SensorError),
    Locating,
    PositionSimulated(SensorError),
    Ready { accuracy_m: f64 },
    Marked,
    AwaitingMark,
}

#[derive(Debug)]
pub struct Hunter {
    pub params: HunterParams,
    heading: HeadingSource,
    position: PositionSource,
    distance: DistanceSelector,
    marked: Option<MarkedTarget>,
    status: StatusMessage,
    // orientation outcome shown above the position status until a fix arrives
    status_note: Option<StatusMessage>,
    permission_in_flight: bool,
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new(HunterParams::default())
    }
}

impl Hunter {
    pub fn new(params: HunterParams) -> Self {
        Self {
            params,
            heading: HeadingSource::new(),
            position: PositionSource::new(),
            distance: DistanceSelector::default(),
            marked: None,
            status: StatusMessage::Starting,
            status_note: None,
            permission_in_flight: false,
        }
    }

    pub fn heading(&self) -> HeadingReading {
        self.heading.current()
    }

    pub fn heading_state(&self) -> &HeadingState {
        self.heading.state()
    }

    pub fn position(&self) -> Option<GeoFix> {
        self.position.latest()
    }

    pub fn position_state(&self) -> &PositionState {
        self.position.state()
    }

    pub fn distance(&self) -> &DistanceSelector {
        &self.distance
    }

    pub fn distance_mut(&mut self) -> &mut DistanceSelector {
        &mut self.distance
    }

    pub fn marked(&self) -> Option<&MarkedTarget> {
        self.marked.as_ref()
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Earlier status still worth showing above [`Hunter::status`].
    pub fn status_note(&self) -> Option<&StatusMessage> {
        self.status_note.as_ref()
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.status_note = None;
        self.status = status;
    }

    pub fn subscribe_heading(&mut self, handler: impl FnMut(&HeadingReading) + 'static) -> SubscriptionToken {
        self.heading.subscribe(handler)
    }

    pub fn subscribe_position(&mut self, handler: impl FnMut(&GeoFix) + 'static) -> SubscriptionToken {
        self.position.subscribe(handler)
    }

    pub fn unsubscribe_heading(&mut self, token: SubscriptionToken) -> bool {
        self.heading.unsubscribe(token)
    }

    pub fn unsubscribe_position(&mut self, token: SubscriptionToken) -> bool {
        self.position.unsubscribe(token)
    }

    // ---------------- Heading protocol ----------------

    pub fn begin_orientation(&mut self, support: OrientationSupport) {
        if *self.heading.state() != HeadingState::Unrequested {
            return;
        }
        self.heading.begin(support);
        let status = match self.heading.state() {
            HeadingState::PermissionPending => StatusMessage::OrientationPrompt,
            HeadingState::Simulated(e) => StatusMessage::OrientationSimulated(e.clone()),
            _ => StatusMessage::OrientationAvailable,
        };
        self.set_status(status);
    }

    /// Claim the user-gesture permission request. False when none is needed
    /// or one is already running.
    pub fn begin_permission_request(&mut self) -> bool {
        if *self.heading.state() != HeadingState::PermissionPending || self.permission_in_flight {
            return false;
        }
        self.permission_in_flight = true;
        true
    }

    pub fn permission_in_flight(&self) -> bool {
        self.permission_in_flight
    }

    pub fn orientation_permission(&mut self, granted: bool) {
        if *self.heading.state() != HeadingState::PermissionPending {
            return;
        }
        self.permission_in_flight = false;
        self.heading.permission_resolved(granted);
        self.set_status(if granted {
            StatusMessage::OrientationAvailable
        } else {
            StatusMessage::OrientationSimulated(SensorError::PermissionDenied)
        });
    }

    pub fn orientation_failed(&mut self, error: SensorError) {
        if self.heading.is_simulated() {
            return;
        }
        self.permission_in_flight = false;
        self.heading.fail(error.clone());
        self.set_status(StatusMessage::OrientationSimulated(error));
    }

    /// Heading is settled (live or simulated), so position can start.
    pub fn orientation_settled(&self) -> bool {
        self.heading.is_ready()
    }

    pub fn on_orientation(&mut self, sample: &OrientationSample, rotation: ScreenRotation) -> Option<HeadingReading> {
        self.heading.on_sample(sample, rotation)
    }

    pub fn rotate_compass(&mut self, delta_deg: f64) -> Option<HeadingReading> {
        self.heading.rotate_by(delta_deg)
    }

    // ---------------- Position protocol ----------------

    /// Start position acquisition. Returns true only on the call that
    /// actually started it; the caller owns any platform watch from then on.
    pub fn begin_position(&mut self, supported: bool) -> bool {
        if self.position.is_started() {
            return false;
        }
        self.position.begin(supported);
        let note = match self.status {
            StatusMessage::OrientationAvailable | StatusMessage::OrientationSimulated(_) => {
                Some(self.status.clone())
            }
            _ => None,
        };
        let status = match self.position.state() {
            PositionState::Simulated(e) => StatusMessage::PositionSimulated(e.clone()),
            _ => StatusMessage::Locating,
        };
        self.set_status(status);
        self.status_note = note;
        true
    }

    pub fn on_fix(&mut self, fix: GeoFix) -> bool {
        let accepted = self.position.on_fix(fix);
        if accepted {
            self.set_status(StatusMessage::Ready {
                accuracy_m: fix.accuracy_m,
            });
        }
        accepted
    }

    pub fn on_position_error(&mut self, error: SensorError) {
        if self.position.is_simulated() {
            return;
        }
        self.position.on_error(error.clone());
        self.set_status(StatusMessage::PositionSimulated(error));
    }

    // ---------------- Marking ----------------

    pub fn can_mark(&self) -> bool {
        self.heading.is_ready() && self.position.is_started() && self.position.latest().is_some()
    }

    pub fn mark_control(&self) -> MarkControl {
        if self.can_mark() {
            MarkControl::Ready
        } else if *self.heading.state() == HeadingState::PermissionPending
            && !self.permission_in_flight
        {
            MarkControl::RequestPermission
        } else {
            MarkControl::Disabled
        }
    }

    /// Project the current position along the current heading by the
    /// selected distance. No-op (returns `None`) until both sources are ready.
    pub fn mark(&mut self) -> Option<MarkedTarget> {
        if !self.can_mark() {
            return None;
        }
        let origin = self.position.latest()?;
        let heading_deg = self.heading.current().degrees();
        let distance_m = self.distance.value_m() as f64;
        let target = MarkedTarget {
            origin,
            heading_deg,
            distance_m,
            projected: project_on_sphere(&origin, heading_deg, distance_m, self.params.earth_radius_m),
        };
        log::info!(
            "[hunter] marked {} -> {} ({:.0}° {}m)",
            origin.format_coords(),
            target.projected.format_coords(),
            heading_deg,
            distance_m
        );
        self.marked = Some(target);
        self.set_status(StatusMessage::Marked);
        Some(target)
    }

    pub fn reset(&mut self) {
        self.marked = None;
        self.set_status(StatusMessage::AwaitingMark);
    }
}
