// SPDX-License-Identifier: MPL-2.0
//! Two-column grid presenter.
//!
//! One tile per record, two per row, in server order. Tiles show their
//! 400x400 thumbnail once its bytes arrive and a palette-colored placeholder
//! until then; the caption strip carries the author and the record id, the
//! header carries the themed copy and the refresh control.

use crate::gallery::PhotoRecord;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::Indicator;
use crate::ui::styles;
use crate::ui::theme::GalleryTheme;
use iced::widget::{button, column, container, image, scrollable, stack, text, Column, Row, Space};
use iced::{alignment, Color, ContentFit, Element, Length};
use std::collections::HashMap;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was clicked; carries the record's position in the collection.
    TilePressed(usize),
    /// The refresh control was clicked.
    RefreshPressed,
}

/// Context required to render the grid.
pub struct ViewContext<'a> {
    pub records: &'a [PhotoRecord],
    pub thumbnails: &'a HashMap<String, image::Handle>,
    pub theme: &'a GalleryTheme,
    pub indicator: Indicator,
    /// Animation tick counter; shifts placeholder colors while loading.
    pub pulse: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.indicator {
        Indicator::Loading => loading_state(ctx.theme),
        _ if ctx.records.is_empty() => empty_state(),
        _ => photo_grid(&ctx),
    };

    column![header(&ctx), body].into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.theme.title)
        .size(typography::TITLE_LG)
        .color(palette::WHITE);
    let subtitle = text(ctx.theme.subtitle(ctx.records.len()))
        .size(typography::BODY)
        .color(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        });

    let refresh_label = match ctx.indicator {
        Indicator::Refreshing => "Refreshing...",
        _ => "Refresh",
    };
    let refresh = button(text(refresh_label).size(typography::BODY))
        .style(styles::button::refresh)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::RefreshPressed);

    let content = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(column![title, subtitle].spacing(spacing::XXS))
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(refresh);

    container(content)
        .style(styles::container::header(ctx.theme.tile_colors(0).0))
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .into()
}

fn photo_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD).padding(spacing::MD);

    for (row_index, pair) in ctx.records.chunks(2).enumerate() {
        let mut tiles = Row::new().spacing(spacing::MD);
        for (offset, record) in pair.iter().enumerate() {
            tiles = tiles.push(tile(ctx, row_index * 2 + offset, record));
        }
        // Keep a lone trailing tile at half width.
        if pair.len() == 1 {
            tiles = tiles.push(Space::new().width(Length::FillPortion(1)).height(Length::Shrink));
        }
        rows = rows.push(tiles);
    }

    scrollable(rows.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, index: usize, record: &'a PhotoRecord) -> Element<'a, Message> {
    let (base, accent) = ctx.theme.tile_colors(index);

    let picture: Element<'a, Message> = match ctx.thumbnails.get(&record.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let color = if ctx.theme.animations_enabled && (index + ctx.pulse) % 2 == 1 {
                accent
            } else {
                base
            };
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .style(styles::container::tile_placeholder(color))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    };

    let caption = container(
        column![
            text(record.author.as_str()).size(typography::CAPTION),
            text(format!("ID: {}", record.id)).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS),
    )
    .style(styles::container::tile_caption)
    .padding(spacing::XS);

    let caption_anchor = container(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XS);

    button(stack![picture, caption_anchor])
        .style(styles::button::tile((base, accent)))
        .padding(0.0)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .on_press(Message::TilePressed(index))
        .into()
}

fn loading_state(theme: &GalleryTheme) -> Element<'_, Message> {
    container(
        text(format!("Loading {}...", theme.title))
            .size(typography::TITLE_MD)
            .color(palette::GRAY_400),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No photographs yet").size(typography::TITLE_MD).color(palette::GRAY_400),
            text("Refresh to fetch the gallery again")
                .size(typography::BODY)
                .color(palette::GRAY_400),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
