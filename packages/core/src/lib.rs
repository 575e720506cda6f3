pub mod config;
pub mod error;
pub mod format;
pub mod interaction;
pub mod markers;
pub mod position;
pub mod question;
pub mod session;
pub mod tooltip;
pub mod view;

pub use config::{Palette, ProgressBarConfig, Rgba};
pub use error::{CueError, CueResult};
pub use format::format_timestamp;
pub use interaction::{InteractionState, Phase, PointerEvent};
pub use markers::{Marker, MarkerState};
pub use position::TrackGeometry;
pub use question::{AnsweredSet, Question};
pub use session::Session;
pub use tooltip::Tooltip;
pub use view::{ProgressProps, ProgressView};
