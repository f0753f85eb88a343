use crate::ids::{fresh_id, MessageId};
use crate::indicator::LoadingIndicator;
use crate::reply::BotReply;
use crate::reveal::{RevealStep, TypewriterReveal};
use crate::state::{AppState, SettledOutcome, SubmissionPhase, APOLOGY, QUICK_REPLIES};
use crate::transcript::MessageBody;
use crate::{Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::PromptSubmitted => {
            let prompt = state.take_input();
            submit(&mut state, prompt)
        }
        Msg::QuickReplySelected(index) => match QUICK_REPLIES.get(index) {
            Some(label) => {
                // The input box resets on either submission path.
                state.take_input();
                submit(&mut state, label.to_string())
            }
            None => Vec::new(),
        },
        Msg::IndicatorTick { id } => indicator_tick(&mut state, id),
        Msg::RevealTick { id } => reveal_tick(&mut state, id),
        Msg::GatewayReplied { id, reply } => settle_success(&mut state, id, reply),
        Msg::GatewayFailed { id } => settle_failure(&mut state, id),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Appends the user entry and the bot placeholder, then starts this
/// submission's indicator and the one outbound gateway call. Empty prompts
/// are submitted as-is; nothing serializes concurrent submissions.
fn submit(state: &mut AppState, prompt: String) -> Vec<Effect> {
    state.transcript_mut().append_user(prompt.clone());
    let id = fresh_id();
    state.transcript_mut().append_bot("", Some(id.clone()));
    state.set_submission(
        id.clone(),
        SubmissionPhase::AwaitingResponse {
            indicator: LoadingIndicator::new(),
        },
    );
    state.mark_dirty();
    vec![
        Effect::StartIndicator { id: id.clone() },
        Effect::SendPrompt { id, prompt },
    ]
}

fn indicator_tick(state: &mut AppState, id: MessageId) -> Vec<Effect> {
    // A tick may race settlement; stale ticks are dropped.
    let frame = match state.submission_mut(&id) {
        Some(SubmissionPhase::AwaitingResponse { indicator }) => indicator.tick(),
        _ => return Vec::new(),
    };
    state.transcript_mut().replace(&id, MessageBody::text(frame));
    state.mark_dirty();
    Vec::new()
}

fn settle_success(state: &mut AppState, id: MessageId, reply: BotReply) -> Vec<Effect> {
    match state.submission(&id) {
        Some(SubmissionPhase::AwaitingResponse { .. }) => {}
        // A reply for a settled or unknown submission arrived late.
        _ => return Vec::new(),
    }

    let mut effects = vec![Effect::StopIndicator { id: id.clone() }];
    // The reveal appends to the placeholder, so it must be cleared first.
    state.transcript_mut().replace(&id, MessageBody::default());

    let reveal = TypewriterReveal::new(&reply);
    if reveal.is_empty() {
        state.transcript_mut().attach_links(&id, reveal.into_links());
        state.set_submission(id, SubmissionPhase::Settled(SettledOutcome::Success));
    } else {
        effects.push(Effect::StartReveal { id: id.clone() });
        state.set_submission(id, SubmissionPhase::Revealing { reveal });
    }
    state.mark_dirty();
    effects
}

fn settle_failure(state: &mut AppState, id: MessageId) -> Vec<Effect> {
    match state.submission(&id) {
        Some(SubmissionPhase::AwaitingResponse { .. }) => {}
        _ => return Vec::new(),
    }

    state.transcript_mut().replace(&id, MessageBody::text(APOLOGY));
    state.set_submission(id.clone(), SubmissionPhase::Settled(SettledOutcome::Failure));
    state.mark_dirty();
    vec![Effect::StopIndicator { id }]
}

fn reveal_tick(state: &mut AppState, id: MessageId) -> Vec<Effect> {
    let step = match state.submission_mut(&id) {
        Some(SubmissionPhase::Revealing { reveal }) => reveal.tick(),
        _ => return Vec::new(),
    };
    match step {
        RevealStep::Char(ch) => {
            state.transcript_mut().push_char(&id, ch);
            state.mark_dirty();
            Vec::new()
        }
        RevealStep::Done(links) => {
            state.transcript_mut().attach_links(&id, links);
            state.set_submission(id.clone(), SubmissionPhase::Settled(SettledOutcome::Success));
            state.mark_dirty();
            vec![Effect::StopReveal { id }]
        }
    }
}
