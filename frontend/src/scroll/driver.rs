use super::surface::ScrollSurface;

/// Identifies one scroll animation. Frame callbacks carry the id they were
/// scheduled for so that frames of a cancelled animation do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// Whether the frame loop driving an animation should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// What a navigation request turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Navigation {
    /// Position was set in one step (reduced motion or negligible distance).
    Jumped { target_y: f64 },
    Animating { id: AnimationId, target_y: f64 },
}

impl Navigation {
    pub fn target_y(&self) -> f64 {
        match *self {
            Self::Jumped { target_y } | Self::Animating { target_y, .. } => target_y,
        }
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Position at `progress` along an eased path. Progress is clamped and the
/// end point is returned verbatim so there is no residual drift.
pub fn interpolate(start_y: f64, target_y: f64, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return target_y;
    }
    start_y + (target_y - start_y) * ease_in_out_cubic(progress)
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    id: AnimationId,
    start_y: f64,
    target_y: f64,
    start_time: f64,
    duration_ms: f64,
}

impl ActiveAnimation {
    fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// Owns the single eased scroll animation of the page.
#[derive(Debug)]
pub struct ScrollDriver {
    active: Option<ActiveAnimation>,
    next_id: u64,
    negligible_distance: f64,
}

impl ScrollDriver {
    pub fn new(negligible_distance: f64) -> Self {
        Self {
            active: None,
            next_id: 0,
            negligible_distance,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[cfg(test)]
    pub fn active_id(&self) -> Option<AnimationId> {
        self.active.as_ref().map(|animation| animation.id)
    }

    #[cfg(test)]
    pub fn target_y(&self) -> Option<f64> {
        self.active.as_ref().map(|animation| animation.target_y)
    }

    /// Starts a new animation towards `target_y`, tearing down any previous
    /// one first. The caller must schedule frames for the returned id.
    pub fn animate_to<S: ScrollSurface>(
        &mut self,
        surface: &S,
        target_y: f64,
        duration_ms: f64,
    ) -> Navigation {
        self.cancel(surface);

        let start_y = surface.scroll_y();
        if surface.prefers_reduced_motion()
            || (target_y - start_y).abs() < self.negligible_distance
        {
            surface.scroll_to(target_y);
            return Navigation::Jumped { target_y };
        }

        self.next_id += 1;
        let id = AnimationId(self.next_id);
        surface.set_native_snap(false);
        self.active = Some(ActiveAnimation {
            id,
            start_y,
            target_y,
            start_time: surface.now(),
            duration_ms,
        });
        Navigation::Animating { id, target_y }
    }

    /// Advances animation `id` to timestamp `now`. Frames for anything but
    /// the active animation write nothing and stop their loop.
    pub fn frame<S: ScrollSurface>(&mut self, surface: &S, id: AnimationId, now: f64) -> FrameControl {
        let Some(animation) = self.active.as_ref().filter(|animation| animation.id == id) else {
            return FrameControl::Stop;
        };

        let progress = animation.progress(now);
        let position = interpolate(animation.start_y, animation.target_y, progress);
        surface.scroll_to(position);

        if progress < 1.0 {
            return FrameControl::Continue;
        }
        log::debug!("scroll animation {:?} settled at {}", id, position);
        self.active = None;
        surface.set_native_snap(true);
        FrameControl::Stop
    }

    pub fn cancel<S: ScrollSurface>(&mut self, surface: &S) {
        if self.active.take().is_some() {
            surface.set_native_snap(true);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory viewport with a hand-driven clock.
    pub(crate) struct FakeSurface {
        pub scroll: Cell<f64>,
        pub viewport: f64,
        pub clock: Cell<f64>,
        pub reduced_motion: Cell<bool>,
        pub native_snap: Cell<bool>,
        pub writes: RefCell<Vec<f64>>,
    }

    impl FakeSurface {
        pub fn new(viewport: f64) -> Self {
            Self {
                scroll: Cell::new(0.0),
                viewport,
                clock: Cell::new(0.0),
                reduced_motion: Cell::new(false),
                native_snap: Cell::new(true),
                writes: RefCell::new(Vec::new()),
            }
        }

        pub fn advance(&self, ms: f64) -> f64 {
            self.clock.set(self.clock.get() + ms);
            self.clock.get()
        }
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn scroll_to(&self, y: f64) {
            self.scroll.set(y);
            self.writes.borrow_mut().push(y);
        }

        fn prefers_reduced_motion(&self) -> bool {
            self.reduced_motion.get()
        }

        fn now(&self) -> f64 {
            self.clock.get()
        }

        fn set_native_snap(&self, enabled: bool) {
            self.native_snap.set(enabled);
        }
    }

    fn started(navigation: Navigation) -> AnimationId {
        match navigation {
            Navigation::Animating { id, .. } => id,
            other => panic!("expected an animation, got {:?}", other),
        }
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for (start, target) in [(0.0, 734.0), (1534.0, 0.0), (-3.5, 1e6), (12.25, 12.75)] {
            assert_eq!(interpolate(start, target, 0.0), start);
            assert_eq!(interpolate(start, target, 1.0), target);
            assert_eq!(interpolate(start, target, 1.7), target);
        }
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn animation_runs_to_the_exact_target() {
        let surface = FakeSurface::new(800.0);
        let mut driver = ScrollDriver::new(1.0);
        let id = started(driver.animate_to(&surface, 734.0, 800.0));
        assert!(!surface.native_snap.get());

        surface.advance(400.0);
        assert_eq!(driver.frame(&surface, id, surface.now()), FrameControl::Continue);
        assert!((surface.scroll_y() - 367.0).abs() < 1e-9);

        surface.advance(500.0);
        assert_eq!(driver.frame(&surface, id, surface.now()), FrameControl::Stop);
        assert_eq!(surface.scroll_y(), 734.0);
        assert!(!driver.is_active());
        assert!(surface.native_snap.get());
    }

    #[test]
    fn new_animation_makes_old_frames_noops() {
        let surface = FakeSurface::new(800.0);
        let mut driver = ScrollDriver::new(1.0);
        let first = started(driver.animate_to(&surface, 734.0, 800.0));
        let second = started(driver.animate_to(&surface, 1534.0, 800.0));
        assert_ne!(first, second);

        let writes_before = surface.writes.borrow().len();
        surface.advance(100.0);
        assert_eq!(driver.frame(&surface, first, surface.now()), FrameControl::Stop);
        assert_eq!(surface.writes.borrow().len(), writes_before);
        assert_eq!(driver.active_id(), Some(second));
    }

    #[test]
    fn cancel_clears_state_and_restores_snap() {
        let surface = FakeSurface::new(800.0);
        let mut driver = ScrollDriver::new(1.0);
        let id = started(driver.animate_to(&surface, 734.0, 800.0));
        driver.cancel(&surface);
        assert!(!driver.is_active());
        assert!(surface.native_snap.get());
        assert_eq!(driver.frame(&surface, id, 50.0), FrameControl::Stop);
        assert_eq!(surface.scroll_y(), 0.0);
    }

    #[test]
    fn negligible_distance_jumps() {
        let surface = FakeSurface::new(800.0);
        surface.scroll.set(100.0);
        let mut driver = ScrollDriver::new(1.0);
        assert_eq!(
            driver.animate_to(&surface, 100.4, 800.0),
            Navigation::Jumped { target_y: 100.4 }
        );
        assert_eq!(surface.scroll_y(), 100.4);
        assert!(!driver.is_active());
    }

    #[test]
    fn reduced_motion_sets_position_without_frames() {
        let surface = FakeSurface::new(800.0);
        surface.reduced_motion.set(true);
        let mut driver = ScrollDriver::new(1.0);
        assert_eq!(
            driver.animate_to(&surface, 1534.0, 800.0),
            Navigation::Jumped { target_y: 1534.0 }
        );
        assert_eq!(*surface.writes.borrow(), vec![1534.0]);
        assert!(surface.native_snap.get());
    }
}
