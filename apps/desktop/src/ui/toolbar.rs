use crate::app::{Message, PlayerApp};
use cuepoint_core::format_timestamp;
use iced::{
    widget::{button, row, text},
    Alignment, Element, Length,
};

/// Play/pause button, elapsed time and answered count
pub fn toolbar_view(app: &PlayerApp) -> Element<'_, Message> {
    let label = if app.clock.is_playing() { "Pause" } else { "Play" };
    let mut play_button = button(text(label).size(14))
        .padding([8, 20])
        .style(iced::theme::Button::Primary);
    if app.active_question.is_none() && app.clock.duration() > 0.0 {
        play_button = play_button.on_press(Message::TogglePlayback);
    }

    let elapsed = text(format!(
        "{} / {}",
        format_timestamp(app.clock.position()),
        format_timestamp(app.clock.duration())
    ))
    .size(14);

    let answered = text(format!(
        "{} of {} answered",
        app.answered.len(),
        app.questions.len()
    ))
    .size(12)
    .style(iced::theme::Text::Color(iced::Color::from_rgb(0.6, 0.6, 0.6)));

    row![
        play_button,
        elapsed,
        iced::widget::Space::with_width(Length::Fill),
        answered,
    ]
    .spacing(16)
    .align_items(Alignment::Center)
    .into()
}
