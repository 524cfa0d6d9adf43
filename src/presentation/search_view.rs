use iced::widget::{button, column, container, row, scrollable, text, text_input, Row, Space};
use iced::{Alignment, Background, Element, Length, Theme};

use crate::core::models::{SearchState, StatusBanner};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::artwork_card_view;

pub struct SearchView {
    query_input: String,
    spinner_frame: usize,
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    QueryChanged(String),
    SearchPressed,
    ExampleTermSelected(String),
    OpenMuseumLink(String),
}

impl SearchView {
    pub fn build() -> Self {
        Self {
            query_input: String::new(),
            spinner_frame: 0,
        }
    }

    pub fn update(&mut self, message: &SearchViewMessage) {
        match message {
            SearchViewMessage::QueryChanged(text) => {
                self.query_input = text.clone();
            }
            SearchViewMessage::ExampleTermSelected(term) => {
                log::debug!("[VIEW] Example term selected: {}", term);
                self.query_input = term.clone();
            }
            SearchViewMessage::SearchPressed | SearchViewMessage::OpenMuseumLink(_) => {}
        }
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % global_constants::SPINNER_FRAMES.len();
    }

    pub fn spinner_glyph(&self) -> &'static str {
        global_constants::SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn render_ui<'a>(
        &'a self,
        state: &'a SearchState,
        theme: &Theme,
    ) -> Element<'a, SearchViewMessage> {
        let title = text(global_constants::HEADER_TITLE).size(34);
        let subtitle = text(global_constants::HEADER_SUBTITLE)
            .size(16)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::muted_text_color()),
            });

        let header_section = column![title, subtitle].spacing(6);

        let search_input = text_input(global_constants::SEARCH_PLACEHOLDER, &self.query_input)
            .on_input(SearchViewMessage::QueryChanged)
            .on_submit(SearchViewMessage::SearchPressed)
            .padding(12)
            .size(16)
            .width(Length::FillPortion(4));

        let search_label = text(global_constants::SEARCH_BUTTON_LABEL).size(16);
        let search_btn = button(container(search_label).center_x(Length::Fill))
            .padding([12, 20])
            .width(Length::FillPortion(1))
            .style(app_theme::primary_button_style)
            .on_press(SearchViewMessage::SearchPressed);

        let search_section = row![search_input, search_btn]
            .spacing(12)
            .align_y(Alignment::Center);

        let content = column![
            header_section,
            Space::new().height(Length::Fixed(20.0)),
            search_section,
            Space::new().height(Length::Fixed(20.0)),
            self.render_body(state),
        ]
        .spacing(4)
        .padding(32)
        .max_width(1200.0);

        let palette = theme.palette();

        container(scrollable(container(content).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| iced::widget::container::Style {
                background: Some(Background::Color(palette.background)),
                text_color: Some(palette.text),
                ..Default::default()
            })
            .into()
    }

    fn render_body<'a>(&'a self, state: &'a SearchState) -> Element<'a, SearchViewMessage> {
        match state {
            SearchState::NoQuery => {
                let mut body = column![].spacing(16);
                if let Some(banner) = state.banner() {
                    body = body.push(render_banner(banner));
                }
                body.push(render_example_terms()).into()
            }
            SearchState::Loading { .. } => row![
                text(self.spinner_glyph()).size(20),
                text(global_constants::USER_MESSAGE_SEARCHING).size(16),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into(),
            SearchState::Results { cards, .. } => {
                let mut body = column![].spacing(16);
                if let Some(banner) = state.banner() {
                    body = body.push(render_banner(banner));
                }
                body.push(artwork_card_view::render_grid(cards)).into()
            }
            SearchState::EmptyQueryError
            | SearchState::Empty { .. }
            | SearchState::Error { .. } => match state.banner() {
                Some(banner) => render_banner(banner),
                None => Space::new().into(),
            },
        }
    }
}

fn render_banner<'a>(banner: StatusBanner) -> Element<'a, SearchViewMessage> {
    let kind = banner.kind;

    container(text(banner.message).size(15))
        .padding([12, 16])
        .width(Length::Fill)
        .style(move |_theme| app_theme::banner_style(kind))
        .into()
}

fn render_example_terms<'a>() -> Element<'a, SearchViewMessage> {
    let chips = global_constants::EXAMPLE_SEARCH_TERMS.iter().map(|term| {
        let chip: Element<'a, SearchViewMessage> = button(text(*term).size(14))
            .padding([6, 14])
            .style(app_theme::chip_button_style)
            .on_press(SearchViewMessage::ExampleTermSelected(term.to_string()))
            .into();
        chip
    });

    column![
        text(global_constants::USER_MESSAGE_TRY_SEARCHING).size(15),
        Row::with_children(chips).spacing(8),
    ]
    .spacing(10)
    .into()
}
