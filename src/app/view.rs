use super::messages::Message;
use super::state::App;
use crate::zoom::ZOOM_CHOICES;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, image, pick_list, row, scrollable,
    text, text_input,
};
use iced::{Element, Length};

impl App {
    pub fn title(&self) -> String {
        match self.host.document() {
            Some(document) => format!("{} - PDF Auto-Scroll", document.display_name()),
            None => "PDF Auto-Scroll".to_string(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![self.toolbar(), self.status_line(), self.viewer()]
            .padding(16)
            .spacing(12)
            .height(Length::Fill)
            .into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let open_row = row![
            text_input("Path to a PDF file", &self.toolbar.open_path_input)
                .on_input(Message::OpenPathInputChanged)
                .on_submit(Message::OpenPathRequested)
                .width(Length::Fill),
            button("Open").on_press(Message::OpenPathRequested),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        let toggle = if self.autoscroll.is_active() {
            button("Stop Scrolling")
                .style(button::danger)
                .on_press(Message::ToggleScrolling)
        } else {
            button("Start Scrolling")
                .style(button::primary)
                .on_press(Message::ToggleScrolling)
        };

        let mut interval = row![
            text("Scroll Speed (ms)"),
            text_input("Scroll Speed (ms)", &self.toolbar.interval_input)
                .on_input(Message::ScrollIntervalInputChanged)
                .on_submit(Message::ScrollIntervalSubmitted)
                .width(Length::Fixed(96.0)),
        ]
        .spacing(8)
        .align_y(Vertical::Center);
        if !self.toolbar.interval_input_valid {
            interval = interval.push(text(format!(
                "not a number, using {} ms",
                self.autoscroll.interval()
            )));
        }

        let controls = row![
            interval,
            toggle,
            horizontal_space(),
            button("Zoom Out").on_press(Message::ZoomOut),
            pick_list(ZOOM_CHOICES, Some(self.zoom.choice()), Message::ZoomSelected),
            button("Zoom In").on_press(Message::ZoomIn),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        column![open_row, controls].spacing(8).into()
    }

    fn status_line(&self) -> Element<'_, Message> {
        let document_label = self
            .host
            .document()
            .map(|document| document.display_name())
            .unwrap_or_else(|| "No document".to_string());

        let mut line = row![text(document_label)].spacing(16);
        if let Some(page_label) = self.page_label() {
            line = line.push(text(page_label));
        }
        line = line.push(text(self.zoom.label()));
        if let Some(status) = &self.toolbar.status {
            line = line.push(text(status.clone()));
        }
        line.align_y(Vertical::Center).into()
    }

    fn viewer(&self) -> Element<'_, Message> {
        let Some(container_id) = self.host.scroll_container() else {
            let placeholder = if self.host.is_loading() {
                "Loading…"
            } else {
                "Open a PDF file to start"
            };
            return container(text(placeholder))
                .center(Length::Fill)
                .into();
        };

        let spacing = self.config.page_spacing as f32;
        let scale = self.host.scale();
        let pages = Column::with_children(self.host.slots().iter().map(|slot| {
            let (width, height) = slot.display_size(scale);
            match &slot.image {
                Some(handle) => image(handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .into(),
                None => container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .style(container::bordered_box)
                    .into(),
            }
        }))
        .spacing(spacing)
        .padding(spacing)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

        scrollable(pages)
            .id(container_id.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                relative_y: viewport.relative_offset().y,
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
