// Host-side tests for the hunter: sensor protocols, marking and reset.

use apps_core::{
    project, DistanceSelector, GeoFix, HeadingState, Hunter, HunterParams, MarkControl,
    OrientationSample, OrientationSupport, PositionState, ScreenRotation, SensorError,
    StatusMessage,
};
use std::cell::RefCell;
use std::rc::Rc;

fn ready_hunter() -> Hunter {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::Available);
    hunter.begin_position(true);
    hunter.on_fix(GeoFix::new(0.0, 0.0, 4.0));
    hunter
}

#[test]
fn mark_is_a_no_op_until_ready() {
    let mut hunter = Hunter::default();
    assert_eq!(hunter.mark_control(), MarkControl::Disabled);
    assert_eq!(hunter.mark(), None);

    hunter.begin_orientation(OrientationSupport::Available);
    assert_eq!(hunter.mark(), None);

    hunter.begin_position(true);
    // watching but no fix yet
    assert_eq!(*hunter.status(), StatusMessage::Locating);
    assert_eq!(hunter.mark(), None);
    assert!(hunter.marked().is_none());

    hunter.on_fix(GeoFix::new(0.0, 0.0, 4.0));
    assert_eq!(hunter.mark_control(), MarkControl::Ready);
    assert_eq!(*hunter.status(), StatusMessage::Ready { accuracy_m: 4.0 });
}

#[test]
fn mark_projects_along_current_heading() {
    let mut hunter = ready_hunter();
    hunter.on_orientation(
        &OrientationSample {
            compass_heading: None,
            absolute: true,
            alpha: Some(90.0),
        },
        ScreenRotation::Portrait,
    );
    hunter.distance_mut().select(250);

    let target = hunter.mark().unwrap();
    assert_eq!(target.heading_deg, 90.0);
    assert_eq!(target.distance_m, 250.0);
    assert_eq!(target.origin, GeoFix::new(0.0, 0.0, 4.0));
    assert_eq!(target.projected, project(&target.origin, 90.0, 250.0));
    assert!(target.projected.longitude > 0.0);
    assert_eq!(hunter.marked(), Some(&target));
    assert_eq!(*hunter.status(), StatusMessage::Marked);
}

#[test]
fn earth_radius_comes_from_params() {
    let params = HunterParams {
        earth_radius_m: 1_000.0,
        ..HunterParams::default()
    };
    let mut hunter = Hunter::new(params);
    hunter.begin_orientation(OrientationSupport::Absent);
    hunter.begin_position(false);
    let target = hunter.mark().unwrap();
    let expected = GeoFix::simulated().latitude + (100.0_f64 / 1_000.0).to_degrees();
    assert!((target.projected.latitude - expected).abs() < 1e-9);
}

#[test]
fn full_simulation_is_markable() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::Absent);
    assert_eq!(
        *hunter.status(),
        StatusMessage::OrientationSimulated(SensorError::CapabilityAbsent)
    );
    hunter.begin_position(false);
    assert_eq!(
        *hunter.status(),
        StatusMessage::PositionSimulated(SensorError::CapabilityAbsent)
    );
    assert_eq!(hunter.position(), Some(GeoFix::simulated()));

    hunter.rotate_compass(45.0);
    let target = hunter.mark().unwrap();
    assert_eq!(target.heading_deg, 45.0);
    assert_eq!(target.origin, GeoFix::simulated());
}

#[test]
fn fixes_after_fallback_are_ignored() {
    let mut hunter = ready_hunter();
    hunter.on_position_error(SensorError::Transient("timeout".into()));
    assert_eq!(
        *hunter.position_state(),
        PositionState::Simulated(SensorError::Transient("timeout".into()))
    );
    assert_eq!(hunter.position(), Some(GeoFix::simulated()));

    assert!(!hunter.on_fix(GeoFix::new(1.0, 1.0, 3.0)));
    assert_eq!(hunter.position(), Some(GeoFix::simulated()));
    // a second error does not replace the first
    hunter.on_position_error(SensorError::PermissionDenied);
    assert!(matches!(
        hunter.position_state(),
        PositionState::Simulated(SensorError::Transient(_))
    ));
}

#[test]
fn permission_is_requested_from_the_mark_button() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::NeedsPermission);
    assert_eq!(*hunter.status(), StatusMessage::OrientationPrompt);
    assert_eq!(hunter.mark_control(), MarkControl::RequestPermission);
    assert!(!hunter.orientation_settled());

    hunter.orientation_permission(false);
    assert_eq!(
        *hunter.heading_state(),
        HeadingState::Simulated(SensorError::PermissionDenied)
    );
    assert!(hunter.orientation_settled());
    // position not started yet
    assert_eq!(hunter.mark_control(), MarkControl::Disabled);
}

#[test]
fn permission_request_failure_falls_back() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::NeedsPermission);
    hunter.orientation_failed(SensorError::Transient("NotAllowedError".into()));
    assert!(hunter.orientation_settled());
    assert!(matches!(
        hunter.status(),
        StatusMessage::OrientationSimulated(SensorError::Transient(_))
    ));
}

#[test]
fn compass_drag_only_applies_when_simulated() {
    let mut live = ready_hunter();
    assert_eq!(live.rotate_compass(30.0), None);
    assert_eq!(live.heading().degrees(), 0.0);

    let mut sim = Hunter::default();
    sim.begin_orientation(OrientationSupport::Absent);
    sim.rotate_compass(350.0);
    sim.rotate_compass(90.0);
    assert_eq!(sim.heading().degrees(), 80.0);
}

#[test]
fn reset_clears_target_and_keeps_sources() {
    let mut hunter = ready_hunter();
    hunter.mark().unwrap();
    hunter.reset();
    assert!(hunter.marked().is_none());
    assert_eq!(*hunter.status(), StatusMessage::AwaitingMark);
    assert_eq!(hunter.mark_control(), MarkControl::Ready);
    assert_eq!(*hunter.distance(), DistanceSelector::default());
}

#[test]
fn subscribers_see_heading_and_position_updates() {
    let mut hunter = Hunter::default();
    let headings = Rc::new(RefCell::new(Vec::new()));
    let fixes = Rc::new(RefCell::new(Vec::new()));
    let h = headings.clone();
    let f = fixes.clone();
    let heading_token = hunter.subscribe_heading(move |r| h.borrow_mut().push(r.rounded()));
    let token = hunter.subscribe_position(move |fix| f.borrow_mut().push(*fix));

    hunter.begin_orientation(OrientationSupport::Absent);
    hunter.rotate_compass(15.0);
    assert!(hunter.unsubscribe_heading(heading_token));
    hunter.rotate_compass(15.0);
    hunter.begin_position(true);
    hunter.on_fix(GeoFix::new(1.0, 2.0, 3.0));
    assert!(hunter.unsubscribe_position(token));
    hunter.on_fix(GeoFix::new(4.0, 5.0, 6.0));

    assert_eq!(*headings.borrow(), vec![15]);
    assert_eq!(*fixes.borrow(), vec![GeoFix::new(1.0, 2.0, 3.0)]);
}

#[test]
fn only_one_permission_request_at_a_time() {
    let mut hunter = Hunter::default();
    assert!(!hunter.begin_permission_request());

    hunter.begin_orientation(OrientationSupport::NeedsPermission);
    assert!(hunter.begin_permission_request());
    assert!(hunter.permission_in_flight());
    // the button does nothing while the first request is pending
    assert_eq!(hunter.mark_control(), MarkControl::Disabled);
    assert!(!hunter.begin_permission_request());

    hunter.orientation_permission(true);
    assert!(!hunter.permission_in_flight());
    assert!(!hunter.begin_permission_request());
    assert_eq!(*hunter.heading_state(), HeadingState::Live);
}

#[test]
fn failed_permission_request_releases_the_claim() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::NeedsPermission);
    hunter.begin_permission_request();
    hunter.orientation_failed(SensorError::Transient("aborted".into()));
    assert!(!hunter.permission_in_flight());
}

#[test]
fn position_starts_exactly_once() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::Available);
    assert!(hunter.begin_position(true));
    assert!(!hunter.begin_position(true));
    assert!(!hunter.begin_position(false));
    assert_eq!(*hunter.position_state(), PositionState::Watching);
}

#[test]
fn orientation_outcome_stays_visible_while_locating() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::Available);
    hunter.begin_position(true);
    assert_eq!(hunter.status_note(), Some(&StatusMessage::OrientationAvailable));
    assert_eq!(*hunter.status(), StatusMessage::Locating);

    hunter.on_fix(GeoFix::new(0.0, 0.0, 4.0));
    assert_eq!(hunter.status_note(), None);
}

#[test]
fn simulated_compass_note_precedes_simulated_position() {
    let mut hunter = Hunter::default();
    hunter.begin_orientation(OrientationSupport::Absent);
    hunter.begin_position(false);
    assert_eq!(
        hunter.status_note(),
        Some(&StatusMessage::OrientationSimulated(SensorError::CapabilityAbsent))
    );
    hunter.mark();
    assert_eq!(hunter.status_note(), None);
}
