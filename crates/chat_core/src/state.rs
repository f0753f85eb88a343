use std::collections::HashMap;

use crate::ids::MessageId;
use crate::indicator::LoadingIndicator;
use crate::reveal::TypewriterReveal;
use crate::transcript::Transcript;
use crate::view_model::{EntryView, WidgetViewModel};

/// Greeting seeded as the first transcript entry. Never mutated, carries no id.
pub const GREETING: &str = "Greetings! I'm the University of South Florida's \
official chatbot. How can I assist you today?";

/// Predefined prompts offered alongside the input box; selecting one submits
/// its label verbatim.
pub const QUICK_REPLIES: [&str; 3] = [
    "What is USF and what campuses does it have?",
    "How do I apply? Deadlines and requirements?",
    "What programs and majors are available?",
];

/// Shown in place of a reply when the gateway call fails.
pub const APOLOGY: &str = "Continue after a few second. I'm taking a break!";

/// Lifecycle of one submission, keyed by its placeholder id. Absence of a
/// record is the idle state; `Settled` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    AwaitingResponse { indicator: LoadingIndicator },
    Revealing { reveal: TypewriterReveal },
    Settled(SettledOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettledOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    transcript: Transcript,
    input: String,
    submissions: HashMap<MessageId, SubmissionPhase>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        let mut transcript = Transcript::default();
        transcript.append_bot(GREETING, None);
        Self {
            transcript,
            input: String::new(),
            submissions: HashMap::new(),
            dirty: true,
        }
    }

    pub fn view(&self) -> WidgetViewModel {
        WidgetViewModel {
            entries: self
                .transcript
                .entries()
                .iter()
                .map(|entry| EntryView {
                    role: entry.role,
                    text: entry.body.text.clone(),
                    links: entry.body.links.clone(),
                })
                .collect(),
            input: self.input.clone(),
            quick_replies: QUICK_REPLIES.iter().map(|label| label.to_string()).collect(),
            pending: self
                .submissions
                .values()
                .filter(|phase| !matches!(phase, SubmissionPhase::Settled(_)))
                .count(),
            dirty: self.dirty,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn submission(&self, id: &MessageId) -> Option<&SubmissionPhase> {
        self.submissions.get(id)
    }

    /// Returns whether a render is due, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub(crate) fn submission_mut(&mut self, id: &MessageId) -> Option<&mut SubmissionPhase> {
        self.submissions.get_mut(id)
    }

    pub(crate) fn set_submission(&mut self, id: MessageId, phase: SubmissionPhase) {
        self.submissions.insert(id, phase);
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.mark_dirty();
    }

    pub(crate) fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
