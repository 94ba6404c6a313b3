use std::sync::Arc;

use tokio::sync::Mutex;

use encuesta_api::ApiClient;
use encuesta_flow::ResponseSession;

/// The one response session slot, guarded against late responses.
///
/// `epoch` bumps every time the slot is installed or closed. A command
/// that starts a fetch records the epoch first and installs or applies its
/// result only if the epoch is unchanged — a response landing after the
/// operator navigated away is dropped on the floor.
#[derive(Default)]
pub struct SessionSlot {
    pub epoch: u64,
    pub current: Option<ResponseSession>,
}

impl SessionSlot {
    pub fn install(&mut self, session: ResponseSession) {
        self.epoch += 1;
        self.current = Some(session);
    }

    pub fn close(&mut self) {
        self.epoch += 1;
        self.current = None;
    }
}

pub struct DesktopState {
    /// None until the operator logs in.
    pub api: Arc<Mutex<Option<ApiClient>>>,
    pub username: Arc<Mutex<Option<String>>>,
    pub session: Arc<Mutex<SessionSlot>>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            api: Arc::new(Mutex::new(None)),
            username: Arc::new(Mutex::new(None)),
            session: Arc::new(Mutex::new(SessionSlot::default())),
        }
    }
}
