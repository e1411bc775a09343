// SPDX-License-Identifier: MPL-2.0
//! Application header with credits tooltip, and the warning notice.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

pub fn view(i18n: &I18n) -> Element<'static, Message> {
    let title = Text::new(i18n.tr("app-title")).size(typography::TITLE_LG);
    let credits = [i18n.tr("credits-built-with"), i18n.tr("credits-built-by")];

    Container::new(styles::tooltip::styled(
        title,
        credits,
        tooltip::Position::Bottom,
    ))
    .width(Length::Fill)
    .into()
}

pub fn notice(i18n: &I18n, key: &str) -> Element<'static, Message> {
    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::BODY_SM))
        .on_press(Message::DismissNotice)
        .style(styles::button::ghost);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::container::notice)
    .into()
}
