use iced::widget::{button, column, container, image, text, Column, Row, Space};
use iced::{font, ContentFit, Element, Font, Length};

use crate::core::models::{arrange_in_rows, CardImage, DisplayCard};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::SearchViewMessage;

const CARD_IMAGE_HEIGHT: f32 = 220.0;
const GRID_SPACING: f32 = 16.0;

pub fn image_placeholder_label(card_image: &CardImage) -> Option<&'static str> {
    match card_image {
        CardImage::Available(_) => None,
        CardImage::Pending => Some(global_constants::PLACEHOLDER_IMAGE_LOADING),
        CardImage::NoImage => Some(global_constants::PLACEHOLDER_NO_IMAGE),
        CardImage::FetchFailed(_) => Some(global_constants::PLACEHOLDER_IMAGE_UNAVAILABLE),
    }
}

fn render_card_image(card_image: &CardImage) -> Element<'_, SearchViewMessage> {
    if let CardImage::Available(handle) = card_image {
        return image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into();
    }

    let label = image_placeholder_label(card_image).unwrap_or_default();

    container(text(label).size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
        .style(app_theme::placeholder_style)
        .into()
}

/// Image, title, artist, then the optional date, medium and link rows.
pub fn render_card(card: &DisplayCard) -> Element<'_, SearchViewMessage> {
    let title = text(&card.title).size(17).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let artist = text(format!(
        "{} {}",
        global_constants::ARTIST_GLYPH,
        card.artist_name
    ))
    .size(14);

    let mut content = column![render_card_image(&card.image), title, artist].spacing(6);

    if let Some(date_text) = &card.date_text {
        content = content.push(
            text(format!("{} {}", global_constants::DATE_GLYPH, date_text)).size(14),
        );
    }

    if let Some(medium_text) = &card.medium_text {
        content = content.push(text(medium_text).size(12).style(|_theme: &iced::Theme| {
            iced::widget::text::Style {
                color: Some(app_theme::muted_text_color()),
            }
        }));
    }

    if let Some(museum_link) = &card.museum_link {
        content = content.push(
            button(text(global_constants::MUSEUM_LINK_LABEL).size(14))
                .padding(0)
                .style(app_theme::link_button_style)
                .on_press(SearchViewMessage::OpenMuseumLink(museum_link.clone())),
        );
    }

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(app_theme::divider_style);

    container(content.push(separator))
        .padding(12)
        .width(Length::FillPortion(1))
        .style(app_theme::card_style)
        .into()
}

pub fn render_grid(cards: &[DisplayCard]) -> Element<'_, SearchViewMessage> {
    let columns = global_constants::GRID_COLUMNS;

    let rows = arrange_in_rows(cards, columns).into_iter().map(|row_cards| {
        let mut cells: Vec<Element<'_, SearchViewMessage>> =
            row_cards.iter().map(render_card).collect();

        while cells.len() < columns {
            cells.push(Space::new().width(Length::FillPortion(1)).into());
        }

        let row: Element<'_, SearchViewMessage> =
            Row::with_children(cells).spacing(GRID_SPACING).into();
        row
    });

    Column::with_children(rows)
        .spacing(GRID_SPACING)
        .width(Length::Fill)
        .into()
}
