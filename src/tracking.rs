//! Scroll-derived "active section" tracking for the navigation highlight.
//!
//! The scan runs over viewport-relative top edges, so it stays independent of
//! the DOM and the scroll listener that feeds it (see `portfolio.rs`).

/// The page sections, in document order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Projects,
    Skills,
    Trust,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Trust,
        Section::Contact,
    ];

    /// DOM element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Trust => "trust",
            Section::Contact => "contact",
        }
    }
}

/// A section counts as reached once its top edge is within this many pixels
/// of the viewport top (or above it).
pub const SCROLL_TRIGGER_OFFSET: f64 = 150.0;

/// Pointer position in viewport pixels, last event wins.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// Pick the active section from the current scroll position.
///
/// `top_of` reports a section's top edge in viewport coordinates, or `None`
/// when the element is not mounted. Sections are scanned bottom to top and
/// the first one whose top edge has crossed the trigger offset wins, so of
/// all sections already scrolled past, the lowest takes the highlight.
/// Unmounted sections are skipped, not an error.
pub fn resolve_active<F>(top_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<f64>,
{
    Section::ALL.iter().rev().find_map(|&section| match top_of(section) {
        Some(top) if top <= SCROLL_TRIGGER_OFFSET => Some(section),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops(pairs: &[(Section, f64)]) -> impl Fn(Section) -> Option<f64> + '_ {
        move |section| {
            pairs
                .iter()
                .find(|(s, _)| *s == section)
                .map(|(_, top)| *top)
        }
    }

    #[test]
    fn lowest_section_past_the_offset_wins() {
        // trust has crossed the 150px line, contact has not
        let layout = [
            (Section::Home, -2000.0),
            (Section::Projects, -1200.0),
            (Section::Skills, -400.0),
            (Section::Trust, 100.0),
            (Section::Contact, 900.0),
        ];
        for _ in 0..3 {
            assert_eq!(resolve_active(tops(&layout)), Some(Section::Trust));
        }
    }

    #[test]
    fn top_of_page_resolves_to_home() {
        let layout = [
            (Section::Home, 0.0),
            (Section::Projects, 800.0),
            (Section::Skills, 1600.0),
            (Section::Trust, 2400.0),
            (Section::Contact, 3200.0),
        ];
        assert_eq!(resolve_active(tops(&layout)), Some(Section::Home));
    }

    #[test]
    fn boundary_is_inclusive() {
        let layout = [(Section::Projects, SCROLL_TRIGGER_OFFSET)];
        assert_eq!(resolve_active(tops(&layout)), Some(Section::Projects));
        let layout = [(Section::Projects, SCROLL_TRIGGER_OFFSET + 1.0)];
        assert_eq!(resolve_active(tops(&layout)), None);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        // contact is not in the DOM; trust still wins even though the scan
        // starts below it
        let layout = [(Section::Home, -500.0), (Section::Trust, 50.0)];
        assert_eq!(resolve_active(tops(&layout)), Some(Section::Trust));
    }

    #[test]
    fn nothing_matches_when_no_section_crossed_the_line() {
        let layout = [(Section::Home, 300.0), (Section::Projects, 1100.0)];
        assert_eq!(resolve_active(tops(&layout)), None);
    }
}
