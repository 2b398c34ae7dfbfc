//! Engagement tracking that turns raw interactions into analytics events

use chrono::{DateTime, Utc};

use crate::model::AnalyticsEvent;

/// Scroll depths reported to analytics
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 90];

/// Destination for analytics events
pub trait EventSink {
    fn record(&mut self, event: AnalyticsEvent);
}

impl EventSink for Vec<AnalyticsEvent> {
    fn record(&mut self, event: AnalyticsEvent) {
        self.push(event);
    }
}

/// Remembers the deepest scroll seen so each milestone fires once
#[derive(Debug, Clone, Default)]
pub struct ScrollDepthTracker {
    max_percent: u8,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_percent(&self) -> u8 {
        self.max_percent
    }

    /// Milestones first reached by this observation, ascending
    pub fn observe(&mut self, percent: u8) -> Vec<u8> {
        if percent <= self.max_percent {
            return Vec::new();
        }
        let previous = self.max_percent;
        self.max_percent = percent;
        SCROLL_MILESTONES
            .into_iter()
            .filter(|&m| m > previous && m <= percent)
            .collect()
    }

    /// Observe `percent` and forward new milestone events to `sink`
    pub fn track(&mut self, percent: u8, at: DateTime<Utc>, sink: &mut dyn EventSink) {
        for milestone in self.observe(percent) {
            sink.record(AnalyticsEvent::scroll_depth(milestone, at));
        }
    }
}

/// Per-visit interaction counter
#[derive(Debug, Clone)]
pub struct SessionTracker {
    page: String,
    started_at: DateTime<Utc>,
    interactions: u64,
}

impl SessionTracker {
    pub fn start(page: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            page: page.into(),
            started_at: at,
            interactions: 0,
        }
    }

    /// Count a click or scroll
    pub fn interaction(&mut self) {
        self.interactions += 1;
    }

    pub fn interactions(&self) -> u64 {
        self.interactions
    }

    /// Duration (whole seconds, rounded) and interaction count events
    pub fn finish(&self, at: DateTime<Utc>) -> [AnalyticsEvent; 2] {
        let millis = (at - self.started_at).num_milliseconds().max(0);
        let seconds = ((millis as f64) / 1000.0).round() as u64;
        [
            AnalyticsEvent::session_duration(&self.page, seconds, at),
            AnalyticsEvent::session_interactions(&self.page, self.interactions, at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_milestones_fire_once() {
        let mut tracker = ScrollDepthTracker::new();
        assert!(tracker.observe(10).is_empty());
        assert_eq!(tracker.observe(30), vec![25]);
        assert!(tracker.observe(40).is_empty());
        assert!(tracker.observe(20).is_empty());
        assert_eq!(tracker.observe(80), vec![50, 75]);
        assert_eq!(tracker.observe(100), vec![90]);
        assert!(tracker.observe(100).is_empty());
        assert_eq!(tracker.max_percent(), 100);
    }

    #[test]
    fn test_track_records_events() {
        let mut tracker = ScrollDepthTracker::new();
        let mut sink: Vec<AnalyticsEvent> = Vec::new();
        tracker.track(55, at(), &mut sink);
        let labels: Vec<_> = sink.iter().filter_map(|e| e.label.as_deref()).collect();
        assert_eq!(labels, vec!["25%", "50%"]);
        assert!(sink.iter().all(|e| e.category == "Engagement" && e.action == "Scroll"));
    }

    #[test]
    fn test_session_summary() {
        let mut session = SessionTracker::start("Homepage", at());
        for _ in 0..7 {
            session.interaction();
        }
        assert_eq!(session.interactions(), 7);
        let [duration, interactions] = session.finish(at() + Duration::milliseconds(90_600));
        assert_eq!(duration.value, Some(91.0));
        assert_eq!(interactions.value, Some(7.0));
        assert_eq!(interactions.label.as_deref(), Some("Homepage"));
    }
}
