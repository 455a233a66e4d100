use std::future::Future;

use leptos::prelude::*;
use utils::videogen::{GenerationId, VideoGenError};

/// Top-level state of the submission form, provided via context. At most
/// one generation is ever active per form instance.
#[derive(Clone, Copy, Debug)]
pub struct GenerationState {
    /// True from the moment a submission is dispatched until cancellation
    /// or a failed creation call; controls the Generate/Cancel affordance.
    pub generating: RwSignal<bool>,
    /// Identifier of the active generation attempt. Setting it mounts a
    /// progress monitor scoped to that identifier; clearing it tears the
    /// monitor down.
    pub active_id: RwSignal<Option<GenerationId>>,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationState {
    pub fn new() -> Self {
        Self {
            generating: RwSignal::new(false),
            active_id: RwSignal::new(None),
        }
    }

    pub fn get() -> Self {
        let this: Self = expect_context();
        this
    }

    /// Local-first reset used by cancellation and by failed creation
    /// calls; runs unconditionally, before any remote outcome is known.
    pub fn reset(&self) {
        self.generating.set(false);
        self.active_id.set(None);
    }
}

/// Cancellation protocol: `state` resets before `cancel` is ever polled,
/// and a failed remote call only logs. The UI never waits on the backend
/// acknowledging a cancel.
pub async fn cancel_generation<Fut>(state: GenerationState, cancel: Fut)
where
    Fut: Future<Output = Result<(), VideoGenError>>,
{
    state.reset();
    if let Err(e) = cancel.await {
        leptos::logging::warn!("cancel request failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn cancel_resets_state_even_when_the_remote_call_fails() {
        let state = GenerationState::new();
        state.generating.set(true);
        state
            .active_id
            .set(Some(GenerationId::from("abc123".to_string())));

        block_on(cancel_generation(state, async {
            Err(VideoGenError::Network("connection refused".to_string()))
        }));

        assert!(!state.generating.get_untracked());
        assert!(state.active_id.get_untracked().is_none());
    }

    #[test]
    fn cancel_resets_state_before_the_remote_call_runs() {
        let state = GenerationState::new();
        state.generating.set(true);

        let generating_during_call = Cell::new(true);
        block_on(cancel_generation(state, async {
            generating_during_call.set(state.generating.get_untracked());
            Ok(())
        }));

        assert!(!generating_during_call.get());
    }
}
