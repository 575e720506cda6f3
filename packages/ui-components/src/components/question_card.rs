//! Prompt shown when playback reaches a question

use cuepoint_core::{format_timestamp, Question};
use iced::widget::{button, row, text, Space};
use iced::{Element, Length};
use iced_aw::Card;

/// Card asking the viewer to answer or skip `question`
pub fn question_card<'a, Message: Clone + 'a>(
    question: &Question,
    on_answer: Message,
    on_skip: Message,
) -> Element<'a, Message> {
    let heading = text(format!("Question at {}", format_timestamp(question.timestamp))).size(16);

    let prompt = question
        .prompt
        .clone()
        .unwrap_or_else(|| "Answer the question to continue.".to_string());

    let actions = row![
        button(text("Skip").size(14))
            .padding([8, 16])
            .style(iced::theme::Button::Secondary)
            .on_press(on_skip),
        Space::with_width(Length::Fill),
        button(text("Answer").size(14))
            .padding([8, 16])
            .style(iced::theme::Button::Primary)
            .on_press(on_answer),
    ];

    Card::new(heading, text(prompt).size(14))
        .foot(actions)
        .max_width(420.0)
        .into()
}
