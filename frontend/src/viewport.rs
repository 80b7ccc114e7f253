//! Scroll-derived readouts for the navbar: overall progress and the
//! section the reader is looking at.

/// Nav entries, in page order. Elements opt in with `data-nav-section`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Live,
    Technology,
    Gallery,
    Contact,
    About,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Live,
        NavSection::Technology,
        NavSection::Gallery,
        NavSection::Contact,
        NavSection::About,
    ];

    pub fn from_attr(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.attr() == value)
    }

    pub fn attr(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Technology => "technology",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
            Self::About => "about",
        }
    }

    /// Element id the nav link scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Live => "hero",
            other => other.attr(),
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Live => "nav.live",
            Self::Technology => "nav.technology",
            Self::Gallery => "nav.gallery",
            Self::Contact => "nav.contact",
            Self::About => "nav.about",
        }
    }
}

/// Fraction of the document scrolled, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max_scroll = (scroll_height - client_height).max(1.0);
    (scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// Width of the progress bar never drops below a sliver so it stays visible.
pub fn progress_bar_scale(progress: f64) -> f64 {
    progress.max(0.03)
}

/// A tagged element's vertical extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSpan {
    pub section: NavSection,
    pub top: f64,
    pub bottom: f64,
}

/// The span containing `center`, otherwise the nearest one. Ties keep the
/// earlier span.
pub fn active_nav_section(center: f64, spans: &[NavSpan]) -> Option<NavSection> {
    let mut best: Option<(NavSection, f64)> = None;
    for span in spans {
        let distance = if center < span.top {
            span.top - center
        } else if center > span.bottom {
            center - span.bottom
        } else {
            return Some(span.section);
        };
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((span.section, distance));
        }
    }
    best.map(|(section, _)| section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 4000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1600.0, 4000.0, 800.0), 0.5);
        assert_eq!(scroll_progress(9000.0, 4000.0, 800.0), 1.0);
        // page shorter than the viewport
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_bar_scale(0.0), 0.03);
    }

    fn spans() -> Vec<NavSpan> {
        vec![
            NavSpan { section: NavSection::Live, top: 0.0, bottom: 800.0 },
            NavSpan { section: NavSection::Technology, top: 800.0, bottom: 2400.0 },
            NavSpan { section: NavSection::Gallery, top: 2600.0, bottom: 3400.0 },
        ]
    }

    #[test]
    fn containing_span_wins() {
        assert_eq!(active_nav_section(400.0, &spans()), Some(NavSection::Live));
        assert_eq!(active_nav_section(1200.0, &spans()), Some(NavSection::Technology));
    }

    #[test]
    fn gaps_pick_the_nearest_span() {
        assert_eq!(active_nav_section(2450.0, &spans()), Some(NavSection::Technology));
        assert_eq!(active_nav_section(2560.0, &spans()), Some(NavSection::Gallery));
        assert_eq!(active_nav_section(100.0, &[]), None);
    }

    #[test]
    fn attributes_and_anchors() {
        assert_eq!(NavSection::from_attr("gallery"), Some(NavSection::Gallery));
        assert_eq!(NavSection::from_attr("footer"), None);
        assert_eq!(NavSection::Live.anchor(), "hero");
        assert_eq!(NavSection::About.anchor(), "about");
    }
}
