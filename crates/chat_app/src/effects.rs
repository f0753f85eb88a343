use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chat_core::{BotReply, Effect, MessageId, Msg, INDICATOR_PERIOD, REVEAL_PERIOD};
use chat_engine::{EngineEvent, EngineHandle, GatewayError, GatewaySettings, PredictionReply};
use chat_logging::{chat_info, chat_warn};

use crate::tickers::Tickers;

/// Executes core effects: gateway calls via the engine, tick delivery via
/// per-submission tickers.
pub struct EffectRunner {
    engine: EngineHandle,
    indicators: Tickers,
    reveals: Tickers,
}

impl EffectRunner {
    pub fn new(settings: GatewaySettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, GatewayError> {
        let engine = EngineHandle::new(settings)?;
        spawn_event_loop(engine.clone(), msg_tx.clone());
        Ok(Self {
            engine,
            indicators: Tickers::new(INDICATOR_PERIOD, msg_tx.clone(), |id| {
                Msg::IndicatorTick { id }
            }),
            reveals: Tickers::new(REVEAL_PERIOD, msg_tx, |id| Msg::RevealTick { id }),
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendPrompt { id, prompt } => {
                    chat_info!("SendPrompt id={} prompt_len={}", id, prompt.len());
                    self.engine.ask(id.to_string(), prompt);
                }
                Effect::StartIndicator { id } => self.indicators.start(id),
                Effect::StopIndicator { id } => self.indicators.stop(&id),
                Effect::StartReveal { id } => self.reveals.start(id),
                Effect::StopReveal { id } => self.reveals.stop(&id),
            }
        }
    }
}

/// Forwards engine events into the app inbox, logging failure detail here
/// at the IO boundary; the state machine only learns that the call failed.
fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            let msg = match event {
                EngineEvent::Replied { id, reply } => Msg::GatewayReplied {
                    id: MessageId::from(id),
                    reply: map_reply(reply),
                },
                EngineEvent::Failed { id, error } => {
                    chat_warn!("gateway call for {} failed: {}", id, error);
                    Msg::GatewayFailed {
                        id: MessageId::from(id),
                    }
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_reply(reply: PredictionReply) -> BotReply {
    BotReply {
        result: reply.result,
        source: reply.source,
        title: reply.title,
    }
}
