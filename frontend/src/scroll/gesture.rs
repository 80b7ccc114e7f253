use super::Direction;

/// The parts of a wheel event the snap logic looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelSample {
    pub delta_x: f64,
    pub delta_y: f64,
    /// Ctrl or Meta held, i.e. a pinch/zoom gesture.
    pub zoom_modifier: bool,
    /// Event target sits inside a form, a self-scrolling container or a
    /// `data-no-snap` region.
    pub in_opt_out_zone: bool,
}

impl WheelSample {
    #[cfg(test)]
    pub fn vertical(delta_y: f64) -> Self {
        Self {
            delta_y,
            ..Self::default()
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.delta_x.abs() > self.delta_y.abs()
    }

    pub fn direction(&self) -> Direction {
        if self.delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Sums successive wheel deltas until they amount to a deliberate intent.
#[derive(Debug, Clone, Default)]
pub struct GestureAccumulator {
    accumulated: f64,
    last_direction: Option<Direction>,
}

impl GestureAccumulator {
    #[cfg(test)]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    #[cfg(test)]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.accumulated == 0.0
    }

    /// Adds one qualifying delta and reports whether `threshold` has been
    /// reached. A reversal discards whatever was gathered the other way.
    pub fn push(&mut self, direction: Direction, magnitude: f64, threshold: f64) -> bool {
        if self.last_direction.is_some_and(|last| last != direction) {
            self.accumulated = 0.0;
        }
        self.last_direction = Some(direction);
        self.accumulated += magnitude.abs();
        self.accumulated >= threshold
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Navigation keys. Anything else is left to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Step(Direction),
    First,
    Last,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Self::Step(Direction::Forward)),
            "ArrowUp" | "PageUp" => Some(Self::Step(Direction::Backward)),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_dominance() {
        let sample = WheelSample {
            delta_x: 12.0,
            delta_y: -8.0,
            ..WheelSample::default()
        };
        assert!(sample.is_horizontal());
        assert!(!WheelSample::vertical(-8.0).is_horizontal());
    }

    #[test]
    fn below_threshold_never_commits() {
        let mut gestures = GestureAccumulator::default();
        assert!(!gestures.push(Direction::Forward, 30.0, 80.0));
        assert!(!gestures.push(Direction::Forward, 30.0, 80.0));
        assert_eq!(gestures.accumulated(), 60.0);
        assert!(gestures.push(Direction::Forward, 30.0, 80.0));
    }

    #[test]
    fn reversal_resets_before_accumulating() {
        let mut gestures = GestureAccumulator::default();
        gestures.push(Direction::Forward, 70.0, 80.0);
        assert!(!gestures.push(Direction::Backward, 30.0, 80.0));
        assert_eq!(gestures.accumulated(), 30.0);
        assert_eq!(gestures.last_direction(), Some(Direction::Backward));
    }

    #[test]
    fn negative_deltas_count_by_magnitude() {
        let mut gestures = GestureAccumulator::default();
        assert!(gestures.push(Direction::Backward, -25.0, 20.0));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(KeyCommand::from_key("PageDown"), Some(KeyCommand::Step(Direction::Forward)));
        assert_eq!(KeyCommand::from_key("ArrowUp"), Some(KeyCommand::Step(Direction::Backward)));
        assert_eq!(KeyCommand::from_key("End"), Some(KeyCommand::Last));
        assert_eq!(KeyCommand::from_key("Tab"), None);
    }
}
