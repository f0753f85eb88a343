//! Chat widget core: pure state machine and view-model helpers.
mod effect;
mod ids;
mod indicator;
mod msg;
mod reply;
mod reveal;
mod state;
mod transcript;
mod update;
mod view_model;

pub use effect::Effect;
pub use ids::{fresh_id, MessageId};
pub use indicator::{LoadingIndicator, INDICATOR_PERIOD};
pub use msg::Msg;
pub use reply::BotReply;
pub use reveal::{RevealStep, TypewriterReveal, LINK_LIMIT, REVEAL_PERIOD};
pub use state::{
    AppState, SettledOutcome, SubmissionPhase, APOLOGY, GREETING, QUICK_REPLIES,
};
pub use transcript::{LinkRef, MessageBody, MessageEntry, Role, Transcript};
pub use update::update;
pub use view_model::{EntryView, WidgetViewModel};
