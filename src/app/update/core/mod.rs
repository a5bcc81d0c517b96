mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

/// Periodic sources the app listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum Timer {
    SignalPoll,
    AutoScroll(Duration),
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];
        subscriptions.extend(app.active_timers().into_iter().map(|timer| match timer {
            Timer::SignalPoll => {
                time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals)
            }
            Timer::AutoScroll(period) => time::every(period).map(|_| Message::AutoScrollTick),
        }));
        Subscription::batch(subscriptions)
    }

    /// Timers the subscription runs. The scroll timer is present only while
    /// scrolling is active; dropping it cancels it, and a new period is a new
    /// subscription identity.
    pub(in crate::app) fn active_timers(&self) -> Vec<Timer> {
        let mut timers = vec![Timer::SignalPoll];
        if let Some(period) = self.autoscroll.timer_period() {
            timers.push(Timer::AutoScroll(period));
        }
        timers
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
