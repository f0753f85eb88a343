use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::client::{GatewayClient, GatewaySettings, ReqwestGatewayClient};
use crate::types::{EngineEvent, GatewayError, MessageId};

enum EngineCommand {
    Ask { id: MessageId, prompt: String },
}

/// Handle to the IO thread: commands in, events out. The front end stays
/// synchronous; the tokio runtime lives entirely behind this handle.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestGatewayClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    /// Queues one gateway call; the answer arrives later as an event.
    pub fn ask(&self, id: MessageId, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Ask {
            id,
            prompt: prompt.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn GatewayClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Ask { id, prompt } => {
            let event = match client.ask(&prompt).await {
                Ok(reply) => EngineEvent::Replied { id, reply },
                Err(error) => EngineEvent::Failed { id, error },
            };
            let _ = event_tx.send(event);
        }
    }
}
