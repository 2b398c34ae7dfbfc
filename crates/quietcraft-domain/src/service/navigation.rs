//! Scroll-driven navigation state
//!
//! Positions are in CSS pixels measured from the top of the document.

use std::time::Duration;

/// Look-ahead applied to the scroll position when picking the active section
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;
/// Fixed header height subtracted from anchor targets
pub const HEADER_OFFSET: f64 = 100.0;
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const NAVBAR_HIDE_AFTER: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 300.0;
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the section the nav bar should highlight. When nested or
/// overlapping sections both contain the position, the later one in document
/// order wins.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let position = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Scroll depth as a whole percentage in 0..=100.
///
/// Pages shorter than the viewport report 0.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> u8 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0;
    }
    ((scroll_y / scrollable) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Navbar appearance tracked across scroll events
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub hidden: bool,
    last_scroll_y: f64,
}

impl NavbarState {
    pub fn update(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAVBAR_SCROLLED_AFTER;
        // hide while scrolling down past the header, show on any upward scroll
        self.hidden = scroll_y > self.last_scroll_y && scroll_y > NAVBAR_HIDE_AFTER;
        self.last_scroll_y = scroll_y;
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER
}

/// Scroll position for an in-page anchor link
pub fn anchor_scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Position reached after `elapsed` of a smooth scroll from `start` to `target`
pub fn smooth_scroll_position(start: f64, target: f64, elapsed: Duration, duration: Duration) -> f64 {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    };
    start + (target - start) * ease_in_out_cubic(progress)
}

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the menu covers it
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }

    pub fn escape(&mut self) {
        self.open = false;
    }

    pub fn link_followed(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("services", 800.0, 600.0),
            Section::new("quote", 1400.0, 900.0),
        ]
    }

    #[test]
    fn test_active_section_uses_offset() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 649.0), Some("home"));
        assert_eq!(active_section(&sections, 650.0), Some("services"));
        assert_eq!(active_section(&sections, 5000.0), None);
    }

    #[test]
    fn test_overlapping_sections_pick_the_later_one() {
        let sections = vec![
            Section::new("about", 0.0, 1000.0),
            Section::new("team", 400.0, 300.0),
        ];
        assert_eq!(active_section(&sections, 300.0), Some("team"));
        assert_eq!(active_section(&sections, 700.0), Some("about"));
    }

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0);
        assert_eq!(scroll_percent(1000.0, 3000.0, 1000.0), 50);
        assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100);
        assert_eq!(scroll_percent(2500.0, 3000.0, 1000.0), 100);
        assert_eq!(scroll_percent(10.0, 800.0, 1000.0), 0);
    }

    #[test]
    fn test_navbar_hides_on_scroll_down() {
        let mut nav = NavbarState::default();
        nav.update(40.0);
        assert!(!nav.scrolled);
        assert!(!nav.hidden);

        nav.update(200.0);
        assert!(nav.scrolled);
        assert!(nav.hidden);

        nav.update(150.0);
        assert!(nav.scrolled);
        assert!(!nav.hidden);
    }

    #[test]
    fn test_scroll_top_button() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
        assert_eq!(anchor_scroll_target(1400.0), 1300.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_scroll_position() {
        let d = SMOOTH_SCROLL_DURATION;
        assert_eq!(smooth_scroll_position(0.0, 1000.0, Duration::ZERO, d), 0.0);
        assert_eq!(smooth_scroll_position(0.0, 1000.0, Duration::from_millis(400), d), 500.0);
        assert_eq!(smooth_scroll_position(0.0, 1000.0, Duration::from_secs(5), d), 1000.0);
        assert_eq!(smooth_scroll_position(200.0, 0.0, Duration::from_millis(10), Duration::ZERO), 0.0);
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.body_scroll_locked());
        menu.escape();
        assert!(!menu.is_open());
        menu.toggle();
        menu.link_followed();
        assert!(!menu.body_scroll_locked());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.click_outside();
        assert!(!menu.is_open());
    }
}
