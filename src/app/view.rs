//! Demo window layout

use iced::widget::{button, checkbox, column, container, row, text};
use iced::{Alignment, Element, Fill, Length};
use rounded_progress::ui::theme;

use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let value = text(format!("{:.0}%", self.progress.progress()))
            .size(32)
            .color(theme::TEXT_PRIMARY);

        let bar = container(self.progress.view::<Message>(Length::Fill, 24.0))
            .padding(24)
            .width(Fill)
            .style(theme::card_container);

        let random_btn = button(text("Random").size(14))
            .on_press(Message::Randomize)
            .padding([8, 16])
            .style(theme::pill_button);

        let recreate_btn = button(text("Recreate").size(14))
            .on_press(Message::Recreate)
            .padding([8, 16])
            .style(theme::pill_button);

        let compensation = checkbox(self.config.compensate_when_progress_is_low)
            .label("Compensate low progress")
            .on_toggle(Message::ToggleCompensation)
            .text_size(13)
            .spacing(8);

        let status = text(match self.last_target {
            Some(target) => format!("Target {}  ·  rebuilt {}x", target, self.recreations),
            None => format!("Rebuilt {}x", self.recreations),
        })
        .size(13)
        .color(theme::TEXT_SECONDARY);

        let controls = row![random_btn, recreate_btn, compensation]
            .spacing(12)
            .align_y(Alignment::Center);

        container(column![value, bar, controls, status].spacing(20))
            .padding(32)
            .width(Fill)
            .height(Fill)
            .style(theme::page_container)
            .into()
    }
}
