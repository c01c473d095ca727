//! Position acquisition with a permanent simulated fallback.

use crate::error::SensorError;
use crate::geo::GeoFix;
use crate::subscription::{SubscriptionToken, Subscribers};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PositionState {
    #[default]
    Unrequested,
    Watching,
    Simulated(SensorError),
}

#[derive(Debug, Default)]
pub struct PositionSource {
    state: PositionState,
    latest: Option<GeoFix>,
    listeners: Subscribers<GeoFix>,
}

impl PositionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PositionState {
        &self.state
    }

    /// Most recent fix. Always `Some` once simulated.
    pub fn latest(&self) -> Option<GeoFix> {
        self.latest
    }

    pub fn is_started(&self) -> bool {
        self.state != PositionState::Unrequested
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.state, PositionState::Simulated(_))
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&GeoFix) + 'static) -> SubscriptionToken {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.listeners.unsubscribe(token)
    }

    /// Start watching, or fall back immediately when unsupported.
    pub fn begin(&mut self, supported: bool) -> &PositionState {
        if self.state == PositionState::Unrequested {
            if supported {
                log::info!("[hunter] watching position");
                self.state = PositionState::Watching;
            } else {
                self.fall_back(SensorError::CapabilityAbsent);
            }
        }
        &self.state
    }

    /// A live fix arrived. Ignored unless watching.
    pub fn on_fix(&mut self, fix: GeoFix) -> bool {
        if self.state != PositionState::Watching {
            return false;
        }
        log::debug!(
            "[hunter] fix {:.6},{:.6} ±{:.0}m",
            fix.latitude,
            fix.longitude,
            fix.accuracy_m
        );
        self.publish(fix);
        true
    }

    /// The watch reported an error. Falls back for good; no retry.
    pub fn on_error(&mut self, error: SensorError) -> &PositionState {
        if !self.is_simulated() {
            self.fall_back(error);
        }
        &self.state
    }

    fn fall_back(&mut self, error: SensorError) {
        log::warn!("[hunter] position simulated: {error}");
        self.state = PositionState::Simulated(error);
        self.publish(GeoFix::simulated());
    }

    fn publish(&mut self, fix: GeoFix) {
        self.latest = Some(fix);
        self.listeners.emit(&fix);
    }
}
