// SPDX-License-Identifier: MPL-2.0
//! List placeholders: loading skeleton, pagination footer and empty result.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, SpinnerState};
use iced::widget::image::Handle;
use iced::widget::{button, image, text, Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, alignment::Vertical, ContentFit, Element, Length, Theme};

/// Skeleton card shown while the active dataset has nothing to display yet.
pub fn skeleton(spinner: SpinnerState) -> Element<'static, Message> {
    let bar = |width: f32| {
        Container::new(Space::new().width(width).height(typography::BODY))
            .style(styles::container::skeleton)
    };

    let picture = Container::new(AnimatedSpinner::new(palette::PRIMARY_500, spinner.rotation()).into_element())
        .center(Length::Fill)
        .height(sizing::CARD_IMAGE_HEIGHT)
        .style(styles::container::skeleton);

    let lines = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(bar(180.0))
        .push(bar(260.0))
        .push(bar(120.0));

    Container::new(Column::new().push(picture).push(lines))
        .width(Length::Fill)
        .clip(true)
        .style(styles::container::card)
        .into()
}

/// Footer shown while a further page is being fetched.
pub fn loading_more(i18n: &I18n, spinner: SpinnerState) -> Element<'static, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            AnimatedSpinner::new(palette::PRIMARY_500, spinner.rotation())
                .size(sizing::ICON_MD)
                .into_element(),
        )
        .push(Text::new(i18n.tr("loading-more")).size(typography::BODY_SM));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::SM)
        .into()
}

/// Footer shown once the listing has no further pages.
pub fn end_of_list(i18n: &I18n) -> Element<'static, Message> {
    Container::new(
        Text::new(i18n.tr("end-of-list"))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::SM)
    .into()
}

/// "Doggie not found" card with a clear-search action.
pub fn empty_result(i18n: &I18n, placeholder: Handle) -> Element<'static, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            image(placeholder)
                .content_fit(ContentFit::Contain)
                .height(sizing::EMPTY_IMAGE_HEIGHT),
        )
        .push(Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_MD))
        .push(
            button(Text::new(i18n.tr("empty-state-button")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ClearSearch)
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}
