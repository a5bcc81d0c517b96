use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};
use iced::window;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadDocument {
                request_id,
                document,
            } => {
                let Some(rasterizer) = self.rasterizer.clone() else {
                    warn!(request_id, "Load requested without a PDF backend");
                    return Task::none();
                };
                info!(
                    request_id,
                    path = %document.path().display(),
                    "Dispatching layout task"
                );
                Task::perform(
                    async move {
                        let result = rasterizer
                            .layout(&document)
                            .map(Arc::new)
                            .map_err(|err| format!("{err:#}"));
                        Message::DocumentLoaded { request_id, result }
                    },
                    |message| message,
                )
            }
            Effect::RenderPage {
                document,
                index,
                scale,
                ticket,
            } => {
                let Some(rasterizer) = self.rasterizer.clone() else {
                    warn!(index, "Page render requested without a PDF backend");
                    return Task::none();
                };
                debug!(index, scale, epoch = ticket.epoch(), "Dispatching page render");
                Task::perform(
                    async move {
                        let result = rasterizer
                            .render_page(&document, index, scale, &ticket)
                            .map(|page| page.map(Arc::new))
                            .map_err(|err| format!("{err:#}"));
                        Message::PageRendered {
                            epoch: ticket.epoch(),
                            index,
                            result,
                        }
                    },
                    |message| message,
                )
            }
            Effect::ScrollBy { container, dy } => {
                scrollable::scroll_by(container, AbsoluteOffset { x: 0.0, y: dy })
            }
            Effect::SnapTo {
                container,
                fraction,
            } => scrollable::snap_to(
                container,
                RelativeOffset {
                    x: 0.0,
                    y: fraction.clamp(0.0, 1.0),
                },
            ),
            Effect::QuitSafely => {
                self.autoscroll.deactivate();
                self.host.unmount();
                info!("Exiting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        // Typing into the toolbar inputs must not trigger shortcuts.
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status != event::Status::Captured =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;
    use iced::keyboard::{Key, Modifiers, key};

    #[test]
    fn resize_is_reported_even_when_captured() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Captured,
            window::Id::unique(),
        );
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 800.0 && height == 600.0
        ));
    }

    #[test]
    fn captured_key_presses_are_ignored() {
        let pressed = |status| {
            runtime_event_to_message(
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(key::Named::Space),
                    modified_key: Key::Named(key::Named::Space),
                    physical_key: key::Physical::Code(key::Code::Space),
                    location: keyboard::Location::Standard,
                    modifiers: Modifiers::default(),
                    text: None,
                }),
                status,
                window::Id::unique(),
            )
        };
        assert!(pressed(event::Status::Captured).is_none());
        assert!(matches!(
            pressed(event::Status::Ignored),
            Some(Message::KeyPressed { .. })
        ));
    }
}
