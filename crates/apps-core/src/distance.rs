use crate::constants::{
    DEFAULT_DISTANCE_M, DISTANCE_ITEM_HEIGHT_PX, DISTANCE_STEP_M, MAX_DISTANCE_M, MIN_DISTANCE_M,
};

/// Distance picked on the spinner wheel, in whole metres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceSelector {
    value_m: u32,
}

impl Default for DistanceSelector {
    fn default() -> Self {
        Self {
            value_m: DEFAULT_DISTANCE_M,
        }
    }
}

impl DistanceSelector {
    /// Every selectable value, smallest first.
    pub fn options() -> impl Iterator<Item = u32> {
        (MIN_DISTANCE_M..=MAX_DISTANCE_M).step_by(DISTANCE_STEP_M as usize)
    }

    pub fn option_count() -> usize {
        ((MAX_DISTANCE_M - MIN_DISTANCE_M) / DISTANCE_STEP_M + 1) as usize
    }

    pub fn value_m(&self) -> u32 {
        self.value_m
    }

    /// Select `value_m` if it is one of the wheel's options.
    pub fn select(&mut self, value_m: u32) -> bool {
        match Self::index_of(value_m) {
            Some(_) => {
                self.value_m = value_m;
                true
            }
            None => false,
        }
    }

    pub fn index_of(value_m: u32) -> Option<usize> {
        if !(MIN_DISTANCE_M..=MAX_DISTANCE_M).contains(&value_m)
            || (value_m - MIN_DISTANCE_M) % DISTANCE_STEP_M != 0
        {
            return None;
        }
        Some(((value_m - MIN_DISTANCE_M) / DISTANCE_STEP_M) as usize)
    }

    pub fn value_at(index: usize) -> Option<u32> {
        (index < Self::option_count()).then(|| MIN_DISTANCE_M + index as u32 * DISTANCE_STEP_M)
    }

    /// Wheel translation (px) that centres the current value in a container
    /// of `container_height` px.
    pub fn wheel_offset(&self, container_height: f64) -> f64 {
        let index = Self::index_of(self.value_m).unwrap_or(0) as f64;
        centre_offset(container_height) - index * DISTANCE_ITEM_HEIGHT_PX
    }

    /// Snap to the row nearest the centre after a drag ends at `offset`.
    /// Out-of-range drags keep the previous value.
    pub fn snap(&mut self, offset: f64, container_height: f64) -> u32 {
        let index = ((centre_offset(container_height) - offset) / DISTANCE_ITEM_HEIGHT_PX).round();
        if index >= 0.0 {
            if let Some(value) = Self::value_at(index as usize) {
                self.value_m = value;
            }
        }
        self.value_m
    }
}

#[inline]
fn centre_offset(container_height: f64) -> f64 {
    (container_height - DISTANCE_ITEM_HEIGHT_PX) / 2.0
}
