use super::super::state::App;
use super::Effect;
use crate::autoscroll::ScrollInterval;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_scrolling(&mut self) {
        let active = self.autoscroll.toggle();
        info!(
            active,
            interval_ms = self.autoscroll.interval().as_millis(),
            has_container = self.host.scroll_container().is_some(),
            "Auto-scroll {}",
            if active { "started" } else { "stopped" }
        );
    }

    pub(super) fn handle_scroll_interval_input_changed(&mut self, raw: String) {
        match ScrollInterval::parse_input(&raw) {
            Some(interval) => {
                let restart = self.autoscroll.set_interval(interval);
                self.toolbar.interval_input_valid = true;
                if restart {
                    info!(
                        interval_ms = interval.as_millis(),
                        "Restarting scroll timer with new interval"
                    );
                }
            }
            None => {
                debug!(input = %raw, "Ignoring invalid scroll interval input");
                self.toolbar.interval_input_valid = false;
            }
        }
        self.toolbar.interval_input = raw;
    }

    pub(super) fn handle_scroll_interval_submitted(&mut self) {
        self.toolbar.interval_input = self.autoscroll.interval().to_string();
        self.toolbar.interval_input_valid = true;
    }

    /// Advance the mounted document by one step. Without a container this is
    /// a no-op.
    pub(super) fn handle_auto_scroll_tick(&mut self, effects: &mut Vec<Effect>) {
        if !self.autoscroll.is_active() {
            return;
        }
        let Some(container) = self.host.scroll_container() else {
            return;
        };
        effects.push(Effect::ScrollBy {
            container: container.clone(),
            dy: self.autoscroll.step_px(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::test_support::{deliver, load, request_open, test_app};
    use super::*;
    use std::time::Duration;

    fn tick(app: &mut App) -> Vec<Effect> {
        app.reduce(Message::AutoScrollTick)
    }

    #[test]
    fn toggle_sequences_keep_zero_or_one_timer() {
        let mut app = test_app();
        for round in 0..9 {
            let _ = app.reduce(Message::ToggleScrolling);
            let expected_active = round % 2 == 0;
            assert_eq!(app.autoscroll.is_active(), expected_active);
            assert_eq!(app.autoscroll.timer_period().is_some(), expected_active);
        }
    }

    #[test]
    fn changing_interval_while_active_restarts_timer() {
        let mut app = test_app();
        let _ = app.reduce(Message::ToggleScrolling);
        assert_eq!(
            app.autoscroll.timer_period(),
            Some(Duration::from_millis(20))
        );

        let _ = app.reduce(Message::ScrollIntervalInputChanged("45".to_string()));
        assert_eq!(
            app.autoscroll.timer_period(),
            Some(Duration::from_millis(45))
        );
        assert!(app.autoscroll.is_active());
    }

    #[test]
    fn changing_interval_while_inactive_starts_nothing() {
        let mut app = test_app();
        let _ = app.reduce(Message::ScrollIntervalInputChanged("45".to_string()));
        assert_eq!(app.autoscroll.interval().as_millis(), 45);
        assert_eq!(app.autoscroll.timer_period(), None);
    }

    #[test]
    fn invalid_interval_keeps_previous_value() {
        let mut app = test_app();
        let _ = app.reduce(Message::ScrollIntervalInputChanged("abc".to_string()));
        assert_eq!(app.autoscroll.interval().as_millis(), 20);
        assert!(!app.toolbar.interval_input_valid);
        assert_eq!(app.toolbar.interval_input, "abc");

        let _ = app.reduce(Message::ScrollIntervalSubmitted);
        assert_eq!(app.toolbar.interval_input, "20");
        assert!(app.toolbar.interval_input_valid);
    }

    #[test]
    fn oversized_interval_clamps_to_maximum() {
        let mut app = test_app();
        let _ = app.reduce(Message::ScrollIntervalInputChanged(
            "99999999999999999999".to_string(),
        ));
        assert_eq!(app.autoscroll.interval().as_millis(), 10_000);
        assert!(app.toolbar.interval_input_valid);
        let _ = app.reduce(Message::ScrollIntervalSubmitted);
        assert_eq!(app.toolbar.interval_input, "10000");
    }

    #[test]
    fn zero_and_negative_intervals_clamp_to_minimum() {
        let mut app = test_app();
        let _ = app.reduce(Message::ScrollIntervalInputChanged("0".to_string()));
        assert_eq!(app.autoscroll.interval().as_millis(), 1);
        let _ = app.reduce(Message::ScrollIntervalInputChanged(" -30 ".to_string()));
        assert_eq!(app.autoscroll.interval().as_millis(), 1);
        let _ = app.reduce(Message::ScrollIntervalSubmitted);
        assert_eq!(app.toolbar.interval_input, "1");
    }

    #[test]
    fn tick_without_container_changes_nothing() {
        let mut app = test_app();
        let _ = app.reduce(Message::ToggleScrolling);
        let viewport_before = app.viewport;

        let effects = tick(&mut app);

        assert!(effects.is_empty());
        assert!(app.autoscroll.is_active());
        assert!(app.host.scroll_container().is_none());
        assert_eq!(app.viewport, viewport_before);
    }

    #[test]
    fn toggle_without_document_is_safe() {
        let mut app = test_app();
        let _ = app.reduce(Message::ToggleScrolling);
        assert!(tick(&mut app).is_empty());
        let _ = app.reduce(Message::ToggleScrolling);
        assert!(tick(&mut app).is_empty());
        assert!(!app.autoscroll.is_active());
    }

    #[test]
    fn ticks_scroll_loaded_document_by_one_pixel() {
        let mut app = test_app();
        load(&mut app, "a.pdf");
        let _ = app.reduce(Message::ScrollIntervalInputChanged("20".to_string()));
        let _ = app.reduce(Message::ToggleScrolling);
        let container_a = app.host.scroll_container().cloned().expect("container");

        for _ in 0..3 {
            let effects = tick(&mut app);
            assert!(matches!(
                effects.as_slice(),
                [Effect::ScrollBy { container, dy }] if *container == container_a && *dy == 1.0
            ));
        }
    }

    #[test]
    fn tick_while_inactive_emits_nothing() {
        let mut app = test_app();
        load(&mut app, "idle.pdf");
        assert!(tick(&mut app).is_empty());
    }

    #[test]
    fn loading_new_document_retargets_active_scrolling() {
        let mut app = test_app();
        load(&mut app, "first.pdf");
        let _ = app.reduce(Message::ToggleScrolling);
        let container_a = app.host.scroll_container().cloned().expect("container a");

        let request_b = request_open(&mut app, "second.pdf");
        assert!(app.autoscroll.is_active());
        let _ = deliver(&mut app, request_b, 2);
        let container_b = app.host.scroll_container().cloned().expect("container b");
        assert_ne!(container_a, container_b);
        assert!(app.autoscroll.is_active());

        for _ in 0..3 {
            match tick(&mut app).as_slice() {
                [Effect::ScrollBy { container, .. }] => {
                    assert_eq!(*container, container_b);
                    assert_ne!(*container, container_a);
                }
                other => panic!("unexpected effects {other:?}"),
            }
        }
    }
}
