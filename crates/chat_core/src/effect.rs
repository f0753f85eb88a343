use crate::ids::MessageId;

/// IO the app layer must perform on behalf of the state machine. Every
/// timer effect names the submission that owns the timer; there is no
/// process-wide handle to interfere across submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one POST to the gateway for this submission.
    SendPrompt { id: MessageId, prompt: String },
    /// Begin delivering `IndicatorTick`s for this submission.
    StartIndicator { id: MessageId },
    /// Cancel this submission's indicator ticks.
    StopIndicator { id: MessageId },
    /// Begin delivering `RevealTick`s for this submission.
    StartReveal { id: MessageId },
    /// Cancel this submission's reveal ticks.
    StopReveal { id: MessageId },
}
