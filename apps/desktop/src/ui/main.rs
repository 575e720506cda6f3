//! Views for each app state

use super::toolbar::toolbar_view;
use crate::app::{AppState, Message, PlayerApp};
use cuepoint_core::format_timestamp;
use cuepoint_ui::{question_card, ProgressBar};
use iced::{
    widget::{column, container, text, Space},
    Alignment, Element, Length,
};

pub fn main_view(app: &PlayerApp) -> Element<'_, Message> {
    let content: Element<Message> = match &app.state {
        AppState::Loading => loading_view(app),
        AppState::Ready => player_view(app),
        AppState::Error(msg) => error_view(msg),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

fn seek_bar(app: &PlayerApp) -> Element<'_, Message> {
    ProgressBar::new(app.clock.position(), app.clock.duration(), Message::Seek)
        .questions(app.questions.clone())
        .answered(app.answered.clone())
        .config(&app.config)
        .into()
}

fn loading_view(app: &PlayerApp) -> Element<'_, Message> {
    let status = text("Loading session...")
        .size(16)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.6, 0.6, 0.6,
        )));

    column![
        screen(Space::new(Length::Shrink, Length::Shrink).into()),
        status,
        seek_bar(app),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}

fn player_view(app: &PlayerApp) -> Element<'_, Message> {
    let title = text(&app.title)
        .size(24)
        .style(iced::theme::Text::Color(iced::Color::WHITE));

    let surface: Element<Message> = match app.active_question() {
        Some(question) => {
            question_card(question, Message::AnswerQuestion, Message::SkipQuestion)
        }
        None => text(format_timestamp(app.clock.position()))
            .size(64)
            .style(iced::theme::Text::Color(iced::Color::from_rgb(
                0.5, 0.5, 0.5,
            )))
            .into(),
    };

    column![title, screen(surface), seek_bar(app), toolbar_view(app)]
        .spacing(12)
        .into()
}

fn error_view(error: &str) -> Element<'static, Message> {
    let title = text("Could not open session")
        .size(32)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            1.0, 0.3, 0.3,
        )));

    let message = text(error)
        .size(14)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(
            0.8, 0.8, 0.8,
        )));

    column![title, message]
        .spacing(12)
        .align_items(Alignment::Center)
        .into()
}

/// Dark area where the video would play
fn screen(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(VideoSurface)))
        .into()
}

struct VideoSurface;

impl iced::widget::container::StyleSheet for VideoSurface {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(iced::Color::from_rgb(
                0.05, 0.05, 0.06,
            ))),
            border: iced::Border {
                color: iced::Color::from_rgb(0.2, 0.2, 0.22),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}
