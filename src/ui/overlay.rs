// SPDX-License-Identifier: MPL-2.0
//! Modal detail overlay bound to the selected record.
//!
//! Shows the 800x800 derived image plus the record metadata verbatim. Either
//! the backdrop or the close control dismisses it; dismissal only clears the
//! binding, no data changes.

use crate::gallery::PhotoRecord;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, text, Space};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Backdrop click or close control; both paths unbind the record.
    Dismissed,
}

/// Context required to render the overlay.
pub struct ViewContext<'a> {
    pub record: &'a PhotoRecord,
    /// Detail image bytes, once fetched; a placeholder shows until then.
    pub detail: Option<&'a image::Handle>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let record = ctx.record;

    let picture: Element<'_, Message> = match ctx.detail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::OVERLAY_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => container(
            text("Loading image...")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::OVERLAY_IMAGE_HEIGHT))
        .into(),
    };

    let close = button(text("Close").size(typography::BODY))
        .style(styles::button::close)
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::Dismissed);

    let title_row = row![
        text(record.author.as_str()).size(typography::TITLE_MD),
        Space::new().width(Length::Fill).height(Length::Shrink),
        close,
    ]
    .align_y(alignment::Vertical::Center);

    let card = container(
        column![
            title_row,
            picture,
            field("Identifier", record.id.as_str()),
            field("Resolution", record.dimensions()),
            field("Original page", record.url.as_str()),
            field("Download", record.download_url.as_str()),
        ]
        .spacing(spacing::MD),
    )
    .style(styles::container::card)
    .width(Length::Fixed(sizing::OVERLAY_CARD_WIDTH))
    .padding(spacing::LG);

    // Clicks on the card stay on the card; clicks on the backdrop dismiss.
    opaque(
        mouse_area(
            center(opaque(card)).style(styles::container::backdrop),
        )
        .on_press(Message::Dismissed),
    )
}

fn field<'a>(
    label: &'static str,
    value: impl iced::widget::text::IntoFragment<'a>,
) -> Element<'a, Message> {
    column![
        text(label).size(typography::CAPTION).color(palette::GRAY_400),
        text(value).size(typography::BODY),
    ]
    .spacing(spacing::XXS)
    .into()
}
