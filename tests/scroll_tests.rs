// Host-side tests for the teleprompter scroll animator.

use apps_core::{FrameRequest, PlayState, ScrollAnimator, ScrollSurface, SPEED_TABLE};

struct FakeSurface {
    top: f64,
    max: f64,
}

impl FakeSurface {
    fn new(max: f64) -> Self {
        Self { top: 0.0, max }
    }
}

impl ScrollSurface for FakeSurface {
    fn scroll_top(&self) -> f64 {
        self.top
    }

    fn set_scroll_top(&mut self, px: f64) {
        self.top = px;
    }

    fn max_scroll(&self) -> f64 {
        self.max
    }
}

#[test]
fn starts_stopped_at_default_speed() {
    let anim = ScrollAnimator::default();
    assert_eq!(anim.state(), PlayState::Stopped);
    assert_eq!(anim.speed_level(), 5);
    assert_eq!(anim.pixels_per_second(), 55.0);
    assert_eq!(anim.position_px(), 0.0);
}

#[test]
fn speed_levels_map_through_table_and_clamp() {
    let mut anim = ScrollAnimator::default();
    assert_eq!(anim.set_speed(100), 10);
    assert_eq!(anim.pixels_per_second(), 400.0);
    assert_eq!(anim.set_speed(-100), 1);
    assert_eq!(anim.pixels_per_second(), 5.0);
    assert_eq!(anim.set_speed(2), 3);
    assert_eq!(anim.pixels_per_second(), SPEED_TABLE[2]);
}

#[test]
fn first_tick_only_records_timestamp() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    assert!(anim.start(&surface));
    assert_eq!(anim.tick(1000.0, &mut surface), FrameRequest::Continue);
    assert_eq!(anim.position_px(), 0.0);
    assert_eq!(surface.top, 0.0);
}

#[test]
fn one_second_at_level_five_moves_55px() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    assert_eq!(anim.tick(1000.0, &mut surface), FrameRequest::Continue);
    assert!((anim.position_px() - 55.0).abs() < 1e-9);
    assert_eq!(surface.top, 55.0);
}

#[test]
fn sub_pixel_progress_accumulates() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.set_speed(-4); // 5 px/s
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    // 16 ms frames move 0.08 px each; the display only sees whole pixels
    let mut now = 0.0;
    for _ in 0..10 {
        now += 16.0;
        anim.tick(now, &mut surface);
    }
    assert!((anim.position_px() - 0.8).abs() < 1e-9);
    assert_eq!(surface.top, 0.0);
    for _ in 0..5 {
        now += 16.0;
        anim.tick(now, &mut surface);
    }
    assert_eq!(surface.top, 1.0);
}

#[test]
fn reaching_the_end_clamps_and_stops() {
    let mut surface = FakeSurface::new(100.0);
    let mut anim = ScrollAnimator::default();
    anim.set_speed(5); // 400 px/s
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    assert_eq!(anim.tick(1000.0, &mut surface), FrameRequest::Stop);
    assert_eq!(surface.top, 100.0);
    assert_eq!(anim.position_px(), 100.0);
    assert!(!anim.is_playing());
}

#[test]
fn start_refuses_at_end_of_content() {
    let mut surface = FakeSurface::new(100.0);
    surface.top = 100.0;
    let mut anim = ScrollAnimator::default();
    assert!(!anim.start(&surface));
    assert!(!anim.is_playing());

    let empty = FakeSurface::new(0.0);
    assert!(!anim.start(&empty));
}

#[test]
fn stop_resyncs_from_display() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    anim.tick(500.0, &mut surface);
    surface.top = 300.0;
    anim.stop(&surface);
    assert_eq!(anim.position_px(), 300.0);
    assert_eq!(anim.tick(600.0, &mut surface), FrameRequest::Stop);
    assert_eq!(surface.top, 300.0);
}

#[test]
fn restart_does_not_jump_over_paused_time() {
    let mut surface = FakeSurface::new(10_000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    anim.tick(1000.0, &mut surface);
    anim.stop(&surface);
    assert!(anim.toggle(&surface));
    anim.tick(60_000.0, &mut surface);
    assert_eq!(surface.top, 55.0);
}

#[test]
fn backwards_timestamp_does_not_scroll_back() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(1000.0, &mut surface);
    anim.tick(500.0, &mut surface);
    assert_eq!(anim.position_px(), 0.0);
}

#[test]
fn manual_scroll_clamps_to_content() {
    let mut surface = FakeSurface::new(150.0);
    let mut anim = ScrollAnimator::default();
    anim.manual_scroll(100.0, &mut surface);
    assert_eq!(surface.top, 100.0);
    anim.manual_scroll(100.0, &mut surface);
    assert_eq!(surface.top, 150.0);
    anim.manual_scroll(-500.0, &mut surface);
    assert_eq!(surface.top, 0.0);
    assert_eq!(anim.state(), PlayState::Stopped);
}

#[test]
fn manual_scroll_while_playing_keeps_playing() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    anim.tick(1000.0, &mut surface);
    anim.manual_scroll(100.0, &mut surface);
    assert!(anim.is_playing());
    assert_eq!(surface.top, 155.0);
    anim.tick(2000.0, &mut surface);
    assert_eq!(surface.top, 210.0);
}

#[test]
fn reset_restores_defaults() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.set_speed(3);
    anim.start(&surface);
    anim.tick(0.0, &mut surface);
    anim.tick(1000.0, &mut surface);
    anim.reset();
    assert_eq!(anim.speed_level(), 5);
    assert_eq!(anim.position_px(), 0.0);
    assert!(!anim.is_playing());
}

#[test]
fn repeated_timestamp_does_not_move() {
    let mut surface = FakeSurface::new(1000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(500.0, &mut surface);
    assert_eq!(anim.tick(500.0, &mut surface), FrameRequest::Continue);
    assert_eq!(anim.position_px(), 0.0);
    assert_eq!(surface.top, 0.0);
}

#[test]
fn speed_change_applies_from_next_tick() {
    let mut surface = FakeSurface::new(10_000.0);
    let mut anim = ScrollAnimator::default();
    anim.start(&surface);
    anim.tick(500.0, &mut surface);
    anim.tick(1500.0, &mut surface);
    assert_eq!(anim.position_px(), 55.0);

    anim.set_speed(5);
    assert!(anim.is_playing());
    anim.tick(2500.0, &mut surface);
    assert_eq!(anim.position_px(), 455.0);
    assert_eq!(surface.top, 455.0);
}
