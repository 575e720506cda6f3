//! Player application: session loading, simulated playback and question prompts

use crate::playback::{crossed_question, PlaybackClock};
use crate::ui::main_view;
use anyhow::Context;
use cuepoint_core::{AnsweredSet, ProgressBarConfig, Question, Session};
use iced::{executor, time, Application, Command, Element, Subscription, Theme};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct PlayerApp {
    pub state: AppState,
    pub theme: Theme,
    pub title: String,
    pub clock: PlaybackClock,
    pub questions: Arc<[Question]>,
    pub answered: Arc<AnsweredSet>,
    /// Questions whose card was already shown
    pub prompted: HashSet<String>,
    /// Index of the question currently asking for an answer
    pub active_question: Option<usize>,
    pub config: ProgressBarConfig,
}

#[derive(Debug, Clone)]
pub enum AppState {
    /// Waiting for the session file
    Loading,
    /// Session loaded, player usable
    Ready,
    /// Session could not be loaded
    Error(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    SessionLoaded(Result<Session, String>),
    Tick(Instant),
    TogglePlayback,
    Seek(f64),
    AnswerQuestion,
    SkipQuestion,
}

impl Application for PlayerApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Option<PathBuf>;

    fn new(session_path: Option<PathBuf>) -> (Self, Command<Message>) {
        info!("Initializing player");

        (
            Self {
                state: AppState::Loading,
                theme: Theme::Dark,
                title: String::new(),
                clock: PlaybackClock::new(),
                questions: Arc::from(Vec::new()),
                answered: Arc::new(AnsweredSet::new()),
                prompted: HashSet::new(),
                active_question: None,
                config: ProgressBarConfig::load(),
            },
            Command::perform(load_session(session_path), |result| {
                Message::SessionLoaded(result.map_err(|e| format!("{:#}", e)))
            }),
        )
    }

    fn title(&self) -> String {
        match &self.state {
            AppState::Loading => "Cuepoint - Loading...".to_string(),
            AppState::Ready => format!("Cuepoint - {}", self.title),
            AppState::Error(_) => "Cuepoint - Error".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SessionLoaded(Ok(session)) => {
                info!(
                    "Session '{}' ready: {:.0}s, {} questions",
                    session.title,
                    session.duration,
                    session.questions.len()
                );
                self.title = session.title;
                self.clock.set_duration(session.duration);
                self.questions = Arc::from(session.questions);
                self.state = AppState::Ready;
            }
            Message::SessionLoaded(Err(e)) => {
                error!("Session load failed: {}", e);
                self.state = AppState::Error(e);
            }
            Message::Tick(now) => {
                if let Some((from, to)) = self.clock.advance(now) {
                    self.check_questions(from, to);
                }
            }
            Message::TogglePlayback => {
                if self.active_question.is_none() {
                    self.clock.toggle();
                    debug!("Playing: {}", self.clock.is_playing());
                }
            }
            Message::Seek(time) => {
                // Jumping over questions does not prompt them
                self.clock.seek(time);
                self.active_question = None;
            }
            Message::AnswerQuestion => {
                if let Some(index) = self.active_question.take() {
                    let id = self.questions[index].key(index).into_owned();
                    info!("Answered question {}", id);
                    let mut answered = (*self.answered).clone();
                    answered.insert(id);
                    self.answered = Arc::new(answered);
                    self.clock.play();
                }
            }
            Message::SkipQuestion => {
                if let Some(index) = self.active_question.take() {
                    info!("Skipped question {}", self.questions[index].key(index));
                    self.clock.play();
                }
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.clock.is_playing() {
            time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl PlayerApp {
    /// Pause on the first unprompted question played through in `(from, to]`
    fn check_questions(&mut self, from: f64, to: f64) {
        let Some(index) =
            crossed_question(&self.questions, &self.answered, &self.prompted, from, to)
        else {
            return;
        };

        let question = &self.questions[index];
        let id = question.key(index).into_owned();
        debug!("Reached question {} at {:.1}s", id, question.timestamp);

        self.clock.pause();
        self.clock.seek(question.timestamp);
        self.prompted.insert(id);
        self.active_question = Some(index);
    }

    /// Question currently on screen
    pub fn active_question(&self) -> Option<&Question> {
        self.active_question.map(|index| &self.questions[index])
    }
}

/// Load the session at `path`, or the built-in sample
async fn load_session(path: Option<PathBuf>) -> anyhow::Result<Session> {
    match path {
        Some(path) => Session::load_from_file_async(&path)
            .await
            .with_context(|| format!("Failed to load session from {}", path.display())),
        None => {
            info!("No session file given, using the sample session");
            Ok(Session::sample())
        }
    }
}

impl Default for PlayerApp {
    fn default() -> Self {
        let (app, _) = Self::new(None);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_app() -> PlayerApp {
        let mut app = PlayerApp::default();
        let _ = app.update(Message::SessionLoaded(Ok(Session::sample())));
        app
    }

    #[test]
    fn test_session_loaded_sets_duration() {
        let app = ready_app();
        assert!(matches!(app.state, AppState::Ready));
        assert_eq!(app.clock.duration(), 180.0);
        assert_eq!(app.questions.len(), 4);
        assert_eq!(app.title(), "Cuepoint - Intro to Ownership");
    }

    #[test]
    fn test_load_error_shows_error_state() {
        let mut app = PlayerApp::default();
        let _ = app.update(Message::SessionLoaded(Err("boom".to_string())));
        assert!(matches!(app.state, AppState::Error(ref e) if e == "boom"));
    }

    #[test]
    fn test_playback_pauses_at_question() {
        let mut app = ready_app();
        let start = Instant::now();
        let _ = app.update(Message::TogglePlayback);
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_secs(25)));

        assert!(!app.clock.is_playing());
        assert_eq!(app.clock.position(), 20.0);
        assert_eq!(
            app.active_question().and_then(|q| q.id.as_deref()),
            Some("borrow-basics")
        );
    }

    #[test]
    fn test_answer_replaces_answered_set() {
        let mut app = ready_app();
        app.clock.play();
        app.check_questions(0.0, 21.0);
        let before = app.answered.clone();

        let _ = app.update(Message::AnswerQuestion);

        assert!(!Arc::ptr_eq(&before, &app.answered));
        assert!(app.answered.contains("borrow-basics"));
        assert!(app.clock.is_playing());
        assert!(app.active_question().is_none());
    }

    #[test]
    fn test_skip_does_not_prompt_again() {
        let mut app = ready_app();
        app.check_questions(0.0, 21.0);
        let _ = app.update(Message::SkipQuestion);

        app.check_questions(0.0, 21.0);
        assert!(app.active_question().is_none());
        assert!(!app.answered.contains("borrow-basics"));
    }

    #[test]
    fn test_seek_dismisses_question() {
        let mut app = ready_app();
        app.check_questions(0.0, 21.0);
        let _ = app.update(Message::Seek(500.0));

        assert!(app.active_question().is_none());
        assert_eq!(app.clock.position(), 180.0);
    }

    #[tokio::test]
    async fn test_load_session_reports_path() {
        let result = load_session(Some(PathBuf::from("/nonexistent/session.json"))).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/session.json"));
    }

    #[tokio::test]
    async fn test_load_session_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        Session::sample().save_to_file(file.path()).unwrap();

        let session = load_session(Some(file.path().to_path_buf())).await.unwrap();
        assert_eq!(session.questions.len(), 4);
    }
}
