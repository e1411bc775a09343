// SPDX-License-Identifier: MPL-2.0
//! "Sort by:" bar with one tri-state toggle per field.

use super::Message;
use crate::domain::{SortField, SortMode, SortState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Row, Text};
use iced::{alignment::Vertical, Element};

/// Icon shown next to a field label for its mode.
#[must_use]
pub fn toggle_glyph(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Unsorted => "⇅",
        SortMode::Ascending => "▲",
        SortMode::Descending => "▼",
    }
}

pub fn view(i18n: &I18n, state: &SortState) -> Element<'static, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("sort-by-label")).size(typography::BODY));

    for field in SortField::ALL {
        let mode = state.mode(field);
        let label = format!("{} {}", i18n.tr(field.i18n_key()), toggle_glyph(mode));
        let style = if mode == SortMode::Unsorted {
            styles::button::unselected
        } else {
            styles::button::selected
        };
        row = row.push(
            button(Text::new(label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ToggleSort(field))
                .style(style),
        );
    }

    if !state.is_unsorted() {
        let reset = button(Text::new("↺").size(typography::BODY))
            .on_press(Message::ResetSort)
            .style(styles::button::ghost);
        row = row.push(styles::tooltip::styled(
            reset,
            [i18n.tr("sort-reset-tooltip")],
            tooltip::Position::Bottom,
        ));
    }

    row.wrap().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_has_a_distinct_glyph() {
        let glyphs = [
            toggle_glyph(SortMode::Unsorted),
            toggle_glyph(SortMode::Ascending),
            toggle_glyph(SortMode::Descending),
        ];
        assert_eq!(glyphs, ["⇅", "▲", "▼"]);
    }
}
