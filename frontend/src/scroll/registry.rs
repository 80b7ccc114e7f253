use super::Direction;

/// A navigable region of the page as measured at discovery time.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset: f64,
}

/// Raw discovery result before opt-out filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCandidate {
    pub id: String,
    pub offset: f64,
    pub skip: bool,
}

impl SectionCandidate {
    pub fn new(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
            skip: false,
        }
    }

    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// Ordered list of snap targets. Rebuilt wholesale whenever layout may have
/// shifted; offsets are never patched in place.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = SectionCandidate>,
    {
        let mut sections: Vec<Section> = candidates
            .into_iter()
            .filter(|candidate| !candidate.skip)
            .map(|candidate| Section {
                id: candidate.id,
                offset: candidate.offset,
            })
            .collect();
        sections.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn last(&self) -> Option<&Section> {
        self.sections.last()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Index of the last section whose top sits at or above the reference
    /// line `scroll_y + viewport_height * reference_fraction`. Falls back to
    /// the first section when none has been reached yet.
    pub fn current_index(
        &self,
        scroll_y: f64,
        viewport_height: f64,
        reference_fraction: f64,
    ) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        let reference_y = scroll_y + viewport_height * reference_fraction;
        let reached = self
            .sections
            .iter()
            .take_while(|section| section.offset <= reference_y)
            .count();
        Some(reached.saturating_sub(1))
    }

    /// Neighbour of the current section in `direction`. `None` at either end
    /// of the page; there is no wraparound.
    pub fn target_for(
        &self,
        direction: Direction,
        scroll_y: f64,
        viewport_height: f64,
        reference_fraction: f64,
    ) -> Option<(usize, &Section)> {
        let current = self.current_index(scroll_y, viewport_height, reference_fraction)?;
        let index = match direction {
            Direction::Forward => current.checked_add(1)?,
            Direction::Backward => current.checked_sub(1)?,
        };
        self.sections.get(index).map(|section| (index, section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::from_candidates(vec![
            SectionCandidate::new("gallery", 1600.0),
            SectionCandidate::new("hero", 0.0),
            SectionCandidate::new("footer-section", 2400.0).skipped(),
            SectionCandidate::new("technology", 800.0),
        ])
    }

    #[test]
    fn sorts_by_offset_and_drops_skipped() {
        let registry = registry();
        let ids: Vec<&str> = registry.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "technology", "gallery"]);
    }

    #[test]
    fn current_index_uses_reference_line() {
        let registry = registry();
        // 560 + 0.3 * 800 = 800 reaches "technology" exactly
        assert_eq!(registry.current_index(560.0, 800.0, 0.3), Some(1));
        assert_eq!(registry.current_index(559.0, 800.0, 0.3), Some(0));
        assert_eq!(registry.current_index(5000.0, 800.0, 0.3), Some(2));
    }

    #[test]
    fn current_index_defaults_to_first() {
        let registry = SectionRegistry::from_candidates(vec![SectionCandidate::new("late", 900.0)]);
        assert_eq!(registry.current_index(0.0, 800.0, 0.3), Some(0));
        assert_eq!(SectionRegistry::default().current_index(0.0, 800.0, 0.3), None);
    }

    #[test]
    fn no_wraparound_at_boundaries() {
        let registry = registry();
        assert!(registry.target_for(Direction::Backward, 0.0, 800.0, 0.3).is_none());
        assert!(registry.target_for(Direction::Forward, 1600.0, 800.0, 0.3).is_none());

        let (index, section) = registry.target_for(Direction::Forward, 0.0, 800.0, 0.3).unwrap();
        assert_eq!((index, section.id.as_str()), (1, "technology"));
    }

    #[test]
    fn position_finds_sections_by_id() {
        let registry = registry();
        assert_eq!(registry.position("gallery"), Some(2));
        assert_eq!(registry.position("footer-section"), None);
    }
}
