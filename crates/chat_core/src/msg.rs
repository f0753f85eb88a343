use crate::ids::MessageId;
use crate::reply::BotReply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the prompt input box.
    InputChanged(String),
    /// User submitted the current input (form submit / Enter). Empty input
    /// is submitted as-is.
    PromptSubmitted,
    /// User selected one of the predefined quick replies by index.
    QuickReplySelected(usize),
    /// Periodic tick for a submission's loading indicator.
    IndicatorTick { id: MessageId },
    /// Periodic tick for a submission's typewriter reveal.
    RevealTick { id: MessageId },
    /// The gateway answered a submission.
    GatewayReplied { id: MessageId, reply: BotReply },
    /// The gateway call failed: transport, status, or malformed body. The
    /// detail is logged at the IO boundary before this message is sent.
    GatewayFailed { id: MessageId },
    /// Fallback for placeholder wiring.
    NoOp,
}
