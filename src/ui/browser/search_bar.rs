// SPDX-License-Identifier: MPL-2.0
//! Search input with an inline clear button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, tooltip, Row, Text};
use iced::{alignment::Vertical, Element, Length};

pub fn view<'a>(i18n: &I18n, raw_query: &'a str) -> Element<'a, Message> {
    let placeholder = i18n.tr("search-placeholder");
    let input = text_input(&placeholder, raw_query)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input);

    if !raw_query.is_empty() {
        let clear = button(Text::new("✕").size(typography::BODY))
            .on_press(Message::ClearSearch)
            .height(sizing::BUTTON_HEIGHT)
            .style(styles::button::ghost);
        row = row.push(styles::tooltip::styled(
            clear,
            [i18n.tr("search-clear-tooltip")],
            tooltip::Position::Bottom,
        ));
    }

    row.into()
}
