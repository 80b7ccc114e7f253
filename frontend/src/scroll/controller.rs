use crate::config::SnapConfig;

use super::driver::{AnimationId, FrameControl, Navigation, ScrollDriver};
use super::gesture::{GestureAccumulator, KeyCommand, WheelSample};
use super::registry::{SectionCandidate, SectionRegistry};
use super::surface::ScrollSurface;
use super::Direction;

/// How the DOM layer must treat a wheel event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Leave the event alone; native scrolling proceeds.
    PassThrough,
    /// Prevent the native scroll but nothing was committed.
    Consumed,
    /// Prevent the native scroll; a navigation started.
    Navigated(Navigation),
}

impl WheelOutcome {
    pub fn intercepts(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    /// A navigation key outside an opt-out zone; the default action must be
    /// prevented even when there was nowhere to go.
    Handled(Option<Navigation>),
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapState {
    Idle,
    Accumulating,
    Animating,
    Locked,
}

/// Section-to-section navigation. Owns the registry, the accumulator, the
/// driver and the wheel cooldown; the DOM layer only forwards events and
/// frames.
pub struct SnapController<S: ScrollSurface> {
    config: SnapConfig,
    surface: S,
    registry: SectionRegistry,
    gestures: GestureAccumulator,
    driver: ScrollDriver,
    wheel_locked_until: Option<f64>,
}

impl<S: ScrollSurface> SnapController<S> {
    pub fn new(config: SnapConfig, surface: S) -> Self {
        let driver = ScrollDriver::new(config.negligible_distance);
        Self {
            config,
            surface,
            registry: SectionRegistry::default(),
            gestures: GestureAccumulator::default(),
            driver,
            wheel_locked_until: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn refresh_sections<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = SectionCandidate>,
    {
        self.registry = SectionRegistry::from_candidates(candidates);
        log::debug!("snap registry holds {} sections", self.registry.len());
    }

    #[cfg(test)]
    pub fn state(&self) -> SnapState {
        if self.driver.is_active() {
            SnapState::Animating
        } else if self.is_wheel_locked(self.surface.now()) {
            SnapState::Locked
        } else if !self.gestures.is_idle() {
            SnapState::Accumulating
        } else {
            SnapState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.registry.current_index(
            self.surface.scroll_y(),
            self.surface.viewport_height(),
            self.config.reference_fraction,
        )
    }

    fn is_wheel_locked(&self, now: f64) -> bool {
        self.wheel_locked_until.is_some_and(|until| now < until)
    }

    fn target_for(&self, direction: Direction) -> Option<(usize, f64)> {
        self.registry
            .target_for(
                direction,
                self.surface.scroll_y(),
                self.surface.viewport_height(),
                self.config.reference_fraction,
            )
            .map(|(index, section)| (index, section.offset))
    }

    pub fn on_wheel(&mut self, sample: &WheelSample) -> WheelOutcome {
        if sample.is_horizontal() || sample.zoom_modifier || sample.in_opt_out_zone {
            return WheelOutcome::PassThrough;
        }
        if self.driver.is_active() {
            return WheelOutcome::PassThrough;
        }
        let now = self.surface.now();
        if self.is_wheel_locked(now) {
            return WheelOutcome::Consumed;
        }
        if sample.delta_y.abs() < self.config.min_delta {
            return WheelOutcome::PassThrough;
        }

        let direction = sample.direction();
        let Some((target_index, target_offset)) = self.target_for(direction) else {
            self.gestures.reset();
            return WheelOutcome::PassThrough;
        };

        if !self
            .gestures
            .push(direction, sample.delta_y, self.config.wheel_threshold)
        {
            return WheelOutcome::Consumed;
        }
        self.gestures.reset();
        if Some(target_index) == self.current_index() {
            return WheelOutcome::Consumed;
        }

        let navigation = self.start_navigation(target_offset);
        self.wheel_locked_until = Some(now + self.config.lock_window_ms());
        log::debug!(
            "wheel commit {:?} to section {} (y = {})",
            direction,
            target_index,
            navigation.target_y()
        );
        WheelOutcome::Navigated(navigation)
    }

    pub fn on_key(&mut self, key: &str, in_opt_out_zone: bool) -> KeyOutcome {
        if in_opt_out_zone || self.driver.is_active() {
            return KeyOutcome::Ignored;
        }
        let Some(command) = KeyCommand::from_key(key) else {
            return KeyOutcome::Ignored;
        };

        let target_offset = match command {
            KeyCommand::Step(direction) => self.target_for(direction).map(|(_, offset)| offset),
            KeyCommand::First => self.registry.first().map(|section| section.offset),
            KeyCommand::Last => self.registry.last().map(|section| section.offset),
        };
        KeyOutcome::Handled(target_offset.map(|offset| self.start_navigation(offset)))
    }

    /// Scrolls to the section with `id`, e.g. from a navbar link. Refused
    /// while an animation is running, like keyboard navigation.
    pub fn navigate_to(&mut self, id: &str) -> Option<Navigation> {
        if self.driver.is_active() {
            return None;
        }
        let offset = self
            .registry
            .position(id)
            .and_then(|index| self.registry.get(index))
            .map(|section| section.offset)?;
        Some(self.start_navigation(offset))
    }

    fn start_navigation(&mut self, section_offset: f64) -> Navigation {
        let target_y = (section_offset - self.config.navbar_height).max(0.0);
        self.driver
            .animate_to(&self.surface, target_y, self.config.scroll_duration_ms)
    }

    pub fn on_frame(&mut self, id: AnimationId, now: f64) -> FrameControl {
        self.driver.frame(&self.surface, id, now)
    }

    pub fn teardown(&mut self) {
        self.driver.cancel(&self.surface);
        self.gestures.reset();
        self.wheel_locked_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::driver::tests::FakeSurface;

    fn controller(threshold: f64) -> SnapController<FakeSurface> {
        let config = SnapConfig {
            wheel_threshold: threshold,
            ..SnapConfig::default()
        };
        let mut controller = SnapController::new(config, FakeSurface::new(800.0));
        controller.refresh_sections(vec![
            SectionCandidate::new("hero", 0.0),
            SectionCandidate::new("technology", 800.0),
            SectionCandidate::new("gallery", 1600.0),
            SectionCandidate::new("footer-section", 2400.0).skipped(),
        ]);
        controller
    }

    fn four_sections(threshold: f64) -> SnapController<FakeSurface> {
        let mut controller = controller(threshold);
        controller.refresh_sections(vec![
            SectionCandidate::new("hero", 0.0),
            SectionCandidate::new("technology", 800.0),
            SectionCandidate::new("gallery", 1600.0),
            SectionCandidate::new("contact", 2400.0),
            SectionCandidate::new("footer-section", 3200.0).skipped(),
        ]);
        controller
    }

    fn opted_out(delta_y: f64) -> WheelSample {
        WheelSample {
            in_opt_out_zone: true,
            ..WheelSample::vertical(delta_y)
        }
    }

    fn animation_id(outcome: WheelOutcome) -> AnimationId {
        match outcome {
            WheelOutcome::Navigated(Navigation::Animating { id, .. }) => id,
            other => panic!("expected an animated commit, got {:?}", other),
        }
    }

    fn finish(controller: &mut SnapController<FakeSurface>, id: AnimationId) {
        let now = controller.surface().advance(1000.0);
        assert_eq!(controller.on_frame(id, now), FrameControl::Stop);
    }

    #[test]
    fn three_small_deltas_commit_on_the_third() {
        let mut controller = controller(80.0);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(30.0)), WheelOutcome::Consumed);
        assert_eq!(controller.state(), SnapState::Accumulating);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(30.0)), WheelOutcome::Consumed);

        let outcome = controller.on_wheel(&WheelSample::vertical(30.0));
        match outcome {
            WheelOutcome::Navigated(navigation) => assert_eq!(navigation.target_y(), 734.0),
            other => panic!("expected a commit, got {:?}", other),
        }
        assert_eq!(controller.state(), SnapState::Animating);
    }

    #[test]
    fn crossing_the_threshold_commits_exactly_once() {
        let mut controller = controller(80.0);
        let commits = [50.0, 50.0, 50.0, 50.0]
            .iter()
            .map(|delta| controller.on_wheel(&WheelSample::vertical(*delta)))
            .filter(|outcome| matches!(outcome, WheelOutcome::Navigated(_)))
            .count();
        assert_eq!(commits, 1);
    }

    #[test]
    fn opt_out_zone_is_never_intercepted() {
        let mut controller = controller(80.0);
        controller.on_wheel(&WheelSample::vertical(30.0));
        let sample = WheelSample {
            in_opt_out_zone: true,
            ..WheelSample::vertical(60.0)
        };
        assert_eq!(controller.on_wheel(&sample), WheelOutcome::PassThrough);
        assert_eq!(controller.gestures.accumulated(), 30.0);
    }

    #[test]
    fn opt_out_zone_passes_through_while_locked() {
        let mut controller = controller(20.0);
        controller.surface().reduced_motion.set(true);
        let outcome = controller.on_wheel(&WheelSample::vertical(30.0));
        assert_eq!(outcome, WheelOutcome::Navigated(Navigation::Jumped { target_y: 734.0 }));
        assert_eq!(controller.state(), SnapState::Locked);

        let outcome = controller.on_wheel(&opted_out(30.0));
        assert_eq!(outcome, WheelOutcome::PassThrough);
        assert!(!outcome.intercepts());
        // outside the zone the lock still swallows
        assert_eq!(controller.on_wheel(&WheelSample::vertical(30.0)), WheelOutcome::Consumed);
    }

    #[test]
    fn opt_out_zone_passes_through_while_animating() {
        let mut controller = controller(20.0);
        animation_id(controller.on_wheel(&WheelSample::vertical(30.0)));
        assert_eq!(controller.state(), SnapState::Animating);
        assert_eq!(controller.on_wheel(&opted_out(30.0)), WheelOutcome::PassThrough);
        assert!(controller.gestures.is_idle());
    }

    #[test]
    fn wheel_during_animation_leaves_the_accumulator_alone() {
        let mut controller = controller(80.0);
        let id = animation_id(controller.on_wheel(&WheelSample::vertical(100.0)));
        assert!(controller.gestures.is_idle());

        for _ in 0..3 {
            assert_eq!(controller.on_wheel(&WheelSample::vertical(60.0)), WheelOutcome::PassThrough);
        }
        assert_eq!(controller.gestures.accumulated(), 0.0);
        assert_eq!(controller.gestures.last_direction(), Some(Direction::Forward));
        assert!(controller.is_animating());
        finish(&mut controller, id);
    }

    #[test]
    fn same_gesture_navigates_further_once_the_lock_expires() {
        let mut controller = four_sections(80.0);
        controller.surface().scroll.set(734.0);
        let id = animation_id(controller.on_wheel(&WheelSample::vertical(100.0)));

        let now = controller.surface().advance(800.0);
        assert_eq!(controller.on_frame(id, now), FrameControl::Stop);
        assert_eq!(controller.surface().scroll_y(), 1534.0);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(100.0)), WheelOutcome::Consumed);

        controller.surface().advance(300.0);
        assert_eq!(controller.state(), SnapState::Idle);
        let outcome = controller.on_wheel(&WheelSample::vertical(100.0));
        match outcome {
            WheelOutcome::Navigated(navigation) => assert_eq!(navigation.target_y(), 2334.0),
            other => panic!("expected a commit to the contact section, got {:?}", other),
        }
    }

    #[test]
    fn noise_and_zoom_pass_through() {
        let mut controller = controller(20.0);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(3.0)), WheelOutcome::PassThrough);
        let zoom = WheelSample {
            zoom_modifier: true,
            ..WheelSample::vertical(50.0)
        };
        assert_eq!(controller.on_wheel(&zoom), WheelOutcome::PassThrough);
        let sideways = WheelSample {
            delta_x: 60.0,
            ..WheelSample::vertical(50.0)
        };
        assert_eq!(controller.on_wheel(&sideways), WheelOutcome::PassThrough);
        assert_eq!(controller.state(), SnapState::Idle);
    }

    #[test]
    fn boundary_lets_native_scroll_happen() {
        let mut controller = controller(20.0);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(-40.0)), WheelOutcome::PassThrough);
        assert!(controller.surface().writes.borrow().is_empty());

        controller.surface().scroll.set(1534.0);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(40.0)), WheelOutcome::PassThrough);
        assert_eq!(controller.surface().scroll_y(), 1534.0);
    }

    #[test]
    fn commits_are_refused_while_animating_and_locked() {
        let mut controller = controller(80.0);
        controller.surface().scroll.set(734.0);
        let id = animation_id(controller.on_wheel(&WheelSample::vertical(100.0)));
        assert_eq!(controller.surface().writes.borrow().len(), 0);

        assert_eq!(controller.on_wheel(&WheelSample::vertical(100.0)), WheelOutcome::PassThrough);

        // the animation finishes early, the lock still holds
        let now = controller.surface().advance(800.0);
        assert_eq!(controller.on_frame(id, now), FrameControl::Stop);
        assert_eq!(controller.surface().scroll_y(), 1534.0);
        assert_eq!(controller.state(), SnapState::Locked);
        assert_eq!(controller.on_wheel(&WheelSample::vertical(100.0)), WheelOutcome::Consumed);

        controller.surface().advance(300.0);
        assert_eq!(controller.state(), SnapState::Idle);
        let outcome = controller.on_wheel(&WheelSample::vertical(-100.0));
        assert!(matches!(outcome, WheelOutcome::Navigated(n) if n.target_y() == 734.0));
    }

    #[test]
    fn keys_commit_immediately() {
        let mut controller = controller(80.0);
        let outcome = controller.on_key("End", false);
        let navigation = match outcome {
            KeyOutcome::Handled(Some(navigation)) => navigation,
            other => panic!("expected navigation, got {:?}", other),
        };
        assert_eq!(navigation.target_y(), 1534.0);

        assert_eq!(controller.on_key("Home", false), KeyOutcome::Ignored);
        if let Navigation::Animating { id, .. } = navigation {
            finish(&mut controller, id);
        }
        assert!(matches!(controller.on_key("Home", false), KeyOutcome::Handled(Some(_))));
    }

    #[test]
    fn keys_inside_forms_are_ignored() {
        let mut controller = controller(80.0);
        assert_eq!(controller.on_key("ArrowDown", true), KeyOutcome::Ignored);
        assert_eq!(controller.on_key("a", false), KeyOutcome::Ignored);
        assert_eq!(controller.on_key("ArrowUp", false), KeyOutcome::Handled(None));
    }

    #[test]
    fn keys_are_not_subject_to_the_wheel_lock() {
        let mut controller = controller(20.0);
        controller.surface().reduced_motion.set(true);
        let outcome = controller.on_wheel(&WheelSample::vertical(30.0));
        assert_eq!(outcome, WheelOutcome::Navigated(Navigation::Jumped { target_y: 734.0 }));
        assert_eq!(controller.state(), SnapState::Locked);
        assert_eq!(
            controller.on_key("ArrowDown", false),
            KeyOutcome::Handled(Some(Navigation::Jumped { target_y: 1534.0 }))
        );
    }

    #[test]
    fn reduced_motion_jumps_to_exact_target() {
        let mut controller = controller(20.0);
        controller.surface().reduced_motion.set(true);
        controller.on_wheel(&WheelSample::vertical(25.0));
        assert_eq!(*controller.surface().writes.borrow(), vec![734.0]);
        assert!(!controller.is_animating());
    }

    #[test]
    fn navigate_to_uses_navbar_offset() {
        let mut controller = controller(20.0);
        let navigation = controller.navigate_to("gallery").unwrap();
        assert_eq!(navigation.target_y(), 1534.0);
        assert!(controller.navigate_to("technology").is_none());
        controller.teardown();
        assert!(controller.navigate_to("footer-section").is_none());
        assert!(controller.navigate_to("technology").is_some());
    }

    #[test]
    fn teardown_cancels_the_animation() {
        let mut controller = controller(20.0);
        let id = animation_id(controller.on_wheel(&WheelSample::vertical(30.0)));
        controller.teardown();
        assert_eq!(controller.state(), SnapState::Idle);
        let now = controller.surface().advance(100.0);
        assert_eq!(controller.on_frame(id, now), FrameControl::Stop);
        assert!(controller.surface().writes.borrow().is_empty());
        assert!(controller.surface().native_snap.get());
    }
}
