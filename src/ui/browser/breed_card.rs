// SPDX-License-Identifier: MPL-2.0
//! Card presenting one breed.

use super::Message;
use crate::domain::Breed;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::images::ImageView;
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, SpinnerState};
use fluent_bundle::FluentValue;
use iced::widget::{image, Column, Container, Row, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

pub fn view<'a>(
    i18n: &I18n,
    breed: &'a Breed,
    picture: ImageView,
    spinner: SpinnerState,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match picture {
        ImageView::Ready(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(sizing::CARD_IMAGE_HEIGHT)
            .into(),
        ImageView::Loading => Container::new(
            AnimatedSpinner::new(palette::PRIMARY_500, spinner.rotation())
                .size(sizing::ICON_MD)
                .into_element(),
        )
        .center(Length::Fill)
        .height(sizing::CARD_IMAGE_HEIGHT)
        .style(styles::container::skeleton)
        .into(),
    };

    let mut details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(breed.name.as_str()).size(typography::TITLE_MD));

    if let Some(badge) = badge_text(breed) {
        details = details.push(
            Container::new(Text::new(badge).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge),
        );
    }

    let traits = breed.temperament_traits().fold(
        Row::new().spacing(spacing::XXS),
        |row, temperament| {
            row.push(
                Container::new(Text::new(temperament).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::chip),
            )
        },
    );

    details = details
        .push(traits.wrap())
        .push(Text::new(breed.life_span.as_str()).size(typography::BODY))
        .push(
            Text::new(i18n.tr_with_args(
                "height-metric",
                &[("value", FluentValue::from(breed.height.metric.as_str()))],
            ))
            .size(typography::BODY),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "weight-metric",
                &[("value", FluentValue::from(breed.weight.metric.as_str()))],
            ))
            .size(typography::BODY),
        );

    Container::new(
        Column::new()
            .push(picture)
            .push(Container::new(details).padding(spacing::MD))
            .align_x(Horizontal::Left),
    )
    .width(Length::Fill)
    .clip(true)
    .style(styles::container::card)
    .into()
}

/// Breed group and bred-for joined for the badge, when either is present.
fn badge_text(breed: &Breed) -> Option<String> {
    if !breed.has_badge() {
        return None;
    }
    let parts: Vec<&str> = [breed.breed_group.as_deref(), breed.bred_for.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    Some(parts.join(" · "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breed::fixtures::breed;

    #[test]
    fn badge_joins_group_and_purpose() {
        let mut record = breed("1", "Akita", "61 - 71", "10 - 14 years");
        record.breed_group = Some("Working".into());
        record.bred_for = Some("Hunting bears".into());
        assert_eq!(badge_text(&record).as_deref(), Some("Working · Hunting bears"));
    }

    #[test]
    fn badge_shows_single_part() {
        let mut record = breed("1", "Akita", "61 - 71", "10 - 14 years");
        record.bred_for = Some("Guarding".into());
        assert_eq!(badge_text(&record).as_deref(), Some("Guarding"));
    }

    #[test]
    fn no_badge_without_group_or_purpose() {
        let record = breed("1", "Akita", "61 - 71", "10 - 14 years");
        assert_eq!(badge_text(&record), None);
    }
}
