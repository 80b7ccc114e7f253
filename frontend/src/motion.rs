//! Enter animations as plain data: each variant maps a reveal state to an
//! inline style, and CSS transitions do the tweening.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Self::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    FadeInUp,
    FadeIn,
    ScaleIn,
    SlideInLeft,
    SlideInRight,
    ImageZoom,
    ClipReveal,
}

/// One end of a variant: what is applied and how it is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    opacity: Option<f64>,
    translate: (f64, f64),
    scale: f64,
    clip_right_pct: Option<f64>,
}

impl Frame {
    const REST: Frame = Frame {
        opacity: Some(1.0),
        translate: (0.0, 0.0),
        scale: 1.0,
        clip_right_pct: None,
    };

    fn hidden(opacity: f64, translate: (f64, f64), scale: f64) -> Self {
        Self {
            opacity: Some(opacity),
            translate,
            scale,
            clip_right_pct: None,
        }
    }
}

impl Motion {
    fn hidden_frame(self) -> Frame {
        match self {
            Self::FadeInUp => Frame::hidden(0.0, (0.0, 40.0), 1.0),
            Self::FadeIn => Frame::hidden(0.0, (0.0, 0.0), 1.0),
            Self::ScaleIn => Frame::hidden(0.0, (0.0, 0.0), 0.9),
            Self::SlideInLeft => Frame::hidden(0.0, (-40.0, 0.0), 1.0),
            Self::SlideInRight => Frame::hidden(0.0, (40.0, 0.0), 1.0),
            Self::ImageZoom => Frame::hidden(0.0, (0.0, 0.0), 0.96),
            Self::ClipReveal => Frame {
                opacity: None,
                translate: (0.0, 0.0),
                scale: 1.0,
                clip_right_pct: Some(100.0),
            },
        }
    }

    fn visible_frame(self) -> Frame {
        match self {
            Self::ClipReveal => Frame {
                opacity: None,
                clip_right_pct: Some(0.0),
                ..Frame::REST
            },
            _ => Frame::REST,
        }
    }

    /// Transition duration in milliseconds and curve.
    pub fn timing(self) -> (u32, Easing) {
        match self {
            Self::FadeInUp | Self::FadeIn => (600, Easing::EaseOut),
            Self::ScaleIn => (500, Easing::EaseOut),
            Self::SlideInLeft | Self::SlideInRight => (400, Easing::EaseInOut),
            Self::ImageZoom | Self::ClipReveal => (800, Easing::EaseOut),
        }
    }

    /// Inline style for `state`. `delay_ms` staggers siblings. With reduced
    /// motion the element renders at rest and nothing transitions.
    pub fn style(self, state: RevealState, delay_ms: u32, reduced_motion: bool) -> String {
        if reduced_motion {
            return render(self.visible_frame(), None);
        }
        let frame = match state {
            RevealState::Hidden => self.hidden_frame(),
            RevealState::Visible => self.visible_frame(),
        };
        let (duration, easing) = self.timing();
        let properties = if frame.clip_right_pct.is_some() {
            "clip-path"
        } else {
            "opacity, transform"
        };
        let transition = format!(
            "transition-property: {}; transition-duration: {}ms; transition-timing-function: {}; transition-delay: {}ms;",
            properties,
            duration,
            easing.css(),
            delay_ms
        );
        render(frame, Some(transition))
    }
}

fn render(frame: Frame, transition: Option<String>) -> String {
    let mut style = String::new();
    if let Some(opacity) = frame.opacity {
        style.push_str(&format!("opacity: {};", opacity));
    }
    if let Some(right) = frame.clip_right_pct {
        style.push_str(&format!(" clip-path: inset(0 {}% 0 0);", right));
    } else {
        style.push_str(&format!(
            " transform: translate({}px, {}px) scale({});",
            frame.translate.0, frame.translate.1, frame.scale
        ));
    }
    if let Some(transition) = transition {
        style.push(' ');
        style.push_str(&transition);
    }
    style
}

/// Stagger between consecutive children of a revealed container.
pub const STAGGER_MS: u32 = 150;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_up_starts_low_and_transparent() {
        let style = Motion::FadeInUp.style(RevealState::Hidden, 0, false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate(0px, 40px) scale(1)"));
        assert!(style.contains("transition-duration: 600ms"));
    }

    #[test]
    fn visible_state_is_at_rest() {
        let style = Motion::SlideInLeft.style(RevealState::Visible, 150, false);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("translate(0px, 0px) scale(1)"));
        assert!(style.contains("transition-delay: 150ms"));
    }

    #[test]
    fn clip_reveal_animates_clip_path_only() {
        let hidden = Motion::ClipReveal.style(RevealState::Hidden, 0, false);
        assert!(hidden.contains("inset(0 100% 0 0)"));
        assert!(!hidden.contains("opacity"));
        assert!(hidden.contains("transition-property: clip-path"));
    }

    #[test]
    fn reduced_motion_skips_transitions() {
        let style = Motion::ScaleIn.style(RevealState::Hidden, 300, true);
        assert!(style.contains("opacity: 1;"));
        assert!(!style.contains("transition"));
    }
}
