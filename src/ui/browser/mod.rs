// SPDX-License-Identifier: MPL-2.0
//! Breed browser screen.
//!
//! Renders the header, search bar, sort bar and the scrollable breed list
//! from a [`BreedBrowser`] snapshot. User interactions are reported as
//! [`Message`]s; the application forwards them to the controller.

mod breed_card;
mod header;
mod search_bar;
mod sort_bar;
mod status;

use crate::application::BreedBrowser;
use crate::domain::SortField;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::images::ImageCache;
use crate::ui::widgets::SpinnerState;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Column, Container, Id, Scrollable};
use iced::{alignment::Horizontal, Element, Length, Task};

pub use sort_bar::toggle_glyph;

/// Scrollable identifier of the breed list.
pub const LIST_ID: &str = "breed-list";

/// Remaining scroll distance (in logical pixels) that counts as the bottom.
pub const NEAR_BOTTOM_PX: f32 = 200.0;

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    ToggleSort(SortField),
    ResetSort,
    /// The list was scrolled; carries the distance left to its bottom.
    Scrolled { distance_to_bottom: f32 },
    DismissNotice,
}

/// Context required to render the browser screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a BreedBrowser,
    pub images: &'a ImageCache,
    pub spinner: SpinnerState,
    /// Fluent key of a warning to display above the list.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut controls = Column::new()
        .spacing(spacing::MD)
        .push(header::view(ctx.i18n));
    if let Some(key) = ctx.notice {
        controls = controls.push(header::notice(ctx.i18n, key));
    }
    controls = controls
        .push(search_bar::view(ctx.i18n, ctx.browser.raw_query()))
        .push(sort_bar::view(ctx.i18n, ctx.browser.sort_state()));

    let list = Scrollable::new(centered(list_content(&ctx)))
        .id(Id::new(LIST_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            distance_to_bottom: distance_to_bottom(&viewport),
        });

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(centered(controls))
        .push(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn list_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let browser = ctx.browser;

    if browser.is_loading() {
        return status::skeleton(ctx.spinner);
    }
    if browser.is_empty_result() {
        return status::empty_result(ctx.i18n, ctx.images.placeholder());
    }

    let mut column = browser
        .sorted_view()
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, breed| {
            column.push(breed_card::view(
                ctx.i18n,
                breed,
                ctx.images.view(breed.reference_image_id.as_deref()),
                ctx.spinner,
            ))
        });

    if browser.is_loading_more() {
        column = column.push(status::loading_more(ctx.i18n, ctx.spinner));
    } else if browser.is_end_of_data() {
        column = column.push(status::end_of_list(ctx.i18n));
    }

    column.padding([0.0, spacing::XS]).into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

/// Distance between the bottom of the visible area and the end of the content.
pub fn distance_to_bottom(viewport: &Viewport) -> f32 {
    let visible_bottom = viewport.absolute_offset().y + viewport.bounds().height;
    (viewport.content_bounds().height - visible_bottom).max(0.0)
}

/// Whether a scroll position reported by [`Message::Scrolled`] should load more.
#[must_use]
pub fn is_near_bottom(distance_to_bottom: f32) -> bool {
    distance_to_bottom <= NEAR_BOTTOM_PX
}

/// Number of breeds that overflow a window of `window_height`.
///
/// Every card is at least as tall as its image, so this never undershoots;
/// the extra card leaves room for a scroll past [`NEAR_BOTTOM_PX`].
#[must_use]
pub fn fill_target(window_height: f32) -> usize {
    (window_height.max(0.0) / sizing::CARD_IMAGE_HEIGHT).ceil() as usize + 1
}

/// Scrolls the breed list back to its top.
pub fn scroll_to_top<T>() -> Task<T> {
    operation::snap_to(Id::new(LIST_ID), RelativeOffset { x: 0.0, y: 0.0 })
}
