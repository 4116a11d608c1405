use gatekeeper_core::{update, AppState, AppViewModel, Effect, Msg, Settings};
use page_logging::{page_trace, set_dispatch_seq};

/// Result of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub effects: Vec<Effect>,
    /// Present when the state changed and the page needs a render.
    pub view: Option<AppViewModel>,
}

impl Dispatch {
    /// True when the browser's default submit action must be prevented.
    pub fn suppresses_submit(&self) -> bool {
        self.effects
            .iter()
            .any(|effect| matches!(effect, Effect::SuppressSubmit { .. }))
    }
}

/// Owns the page state and runs messages through `update`.
#[derive(Debug, Default)]
pub struct PageRuntime {
    state: AppState,
    seq: u64,
}

impl PageRuntime {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::with_settings(settings),
            seq: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) -> Dispatch {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        page_trace!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        Dispatch {
            effects,
            view: was_dirty.then_some(view),
        }
    }
}
