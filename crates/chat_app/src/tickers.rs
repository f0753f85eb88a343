use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chat_core::{MessageId, Msg};

/// Periodic tick delivery with one thread per submission, keyed by message
/// id. Each submission's `Stop*` effect halts exactly its own ticker;
/// there is no shared "current timer" handle.
pub struct Tickers {
    period: Duration,
    msg_tx: mpsc::Sender<Msg>,
    make_msg: fn(MessageId) -> Msg,
    active: HashMap<MessageId, TickerHandle>,
}

struct TickerHandle {
    stop: Arc<AtomicBool>,
}

impl Tickers {
    pub fn new(period: Duration, msg_tx: mpsc::Sender<Msg>, make_msg: fn(MessageId) -> Msg) -> Self {
        Self {
            period,
            msg_tx,
            make_msg,
            active: HashMap::new(),
        }
    }

    /// Starts a ticker for `id`, stopping any previous one for the same id
    /// first so a submission never has two.
    pub fn start(&mut self, id: MessageId) {
        self.stop(&id);

        let stop = Arc::new(AtomicBool::new(false));
        let handle = TickerHandle { stop: stop.clone() };
        let msg_tx = self.msg_tx.clone();
        let make_msg = self.make_msg;
        let period = self.period;
        let ticker_id = id.clone();
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(period);
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                // The inbox going away means the app is shutting down.
                if msg_tx.send(make_msg(ticker_id.clone())).is_err() {
                    break;
                }
            }
        });

        self.active.insert(id, handle);
    }

    /// Stops and forgets the ticker for `id`; unknown ids are a no-op.
    pub fn stop(&mut self, id: &MessageId) {
        if let Some(handle) = self.active.remove(id) {
            handle.stop.store(true, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::fresh_id;

    #[test]
    fn ticker_delivers_then_stops() {
        let (tx, rx) = mpsc::channel();
        let mut tickers = Tickers::new(Duration::from_millis(5), tx, |id| Msg::IndicatorTick { id });
        let id = fresh_id();

        tickers.start(id.clone());
        let first = rx.recv_timeout(Duration::from_secs(2)).expect("first tick");
        assert_eq!(first, Msg::IndicatorTick { id: id.clone() });

        tickers.stop(&id);
        // Drain anything in flight, then expect silence.
        thread::sleep(Duration::from_millis(25));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(25));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn restarting_replaces_previous_ticker() {
        let (tx, rx) = mpsc::channel();
        let mut tickers = Tickers::new(Duration::from_millis(5), tx, |id| Msg::RevealTick { id });
        let id = fresh_id();

        tickers.start(id.clone());
        tickers.start(id.clone());
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());

        tickers.stop(&id);
        thread::sleep(Duration::from_millis(25));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(25));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stopping_unknown_ticker_is_noop() {
        let (tx, _rx) = mpsc::channel();
        let mut tickers = Tickers::new(Duration::from_millis(5), tx, |id| Msg::RevealTick { id });
        tickers.stop(&fresh_id());
    }
}
