use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::videogen::{ProgressSnapshot, VideoGenError};

/// Cancellation token tying a polling loop to the lifetime of one
/// generation identifier. The owning component cancels it on cleanup, so
/// a stale poll resolving after a newer identifier took over can never
/// publish its snapshot (last-identifier-wins).
#[derive(Clone, Debug, Default)]
pub struct PollToken(Rc<Cell<bool>>);

impl PollToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drives the progress state machine for one generation: fetch a
/// snapshot, publish it, wait, repeat. Stops on a terminal snapshot
/// (`completed` / `error`) or once `token` is cancelled. A transport
/// failure is handed to `on_error` and polling continues at the same
/// fixed interval; the previously published snapshot stays current.
///
/// The next poll is only scheduled after the prior one resolves, so at
/// most one request is in flight per token.
pub async fn poll_until_terminal<F, FFut, D, DFut>(
    token: PollToken,
    mut fetch: F,
    mut delay: D,
    mut on_snapshot: impl FnMut(ProgressSnapshot),
    mut on_error: impl FnMut(VideoGenError),
) where
    F: FnMut() -> FFut,
    FFut: Future<Output = Result<ProgressSnapshot, VideoGenError>>,
    D: FnMut() -> DFut,
    DFut: Future<Output = ()>,
{
    loop {
        let result = fetch().await;
        if token.is_cancelled() {
            return;
        }
        match result {
            Ok(snapshot) => {
                let terminal = snapshot.is_terminal();
                on_snapshot(snapshot);
                if terminal {
                    return;
                }
            }
            Err(e) => on_error(e),
        }
        delay().await;
        if token.is_cancelled() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn snap(status: &str, progress: u32, message: &str) -> ProgressSnapshot {
        ProgressSnapshot {
            status: status.to_string(),
            progress,
            message: message.to_string(),
            video_url: None,
            script_url: None,
        }
    }

    struct Run {
        seen: Vec<ProgressSnapshot>,
        delays: usize,
        errors: usize,
    }

    /// Runs the loop against a scripted response sequence with an
    /// immediate delay. Panics if the loop polls past the script's end.
    fn run_script(responses: Vec<Result<ProgressSnapshot, VideoGenError>>) -> Run {
        let queue = RefCell::new(VecDeque::from(responses));
        let seen = RefCell::new(Vec::new());
        let delays = Cell::new(0usize);
        let errors = Cell::new(0usize);

        block_on(poll_until_terminal(
            PollToken::new(),
            || {
                let next = queue
                    .borrow_mut()
                    .pop_front()
                    .expect("polled past the end of the scripted responses");
                async move { next }
            },
            || {
                delays.set(delays.get() + 1);
                std::future::ready(())
            },
            |s| seen.borrow_mut().push(s),
            |_| errors.set(errors.get() + 1),
        ));

        Run {
            seen: seen.into_inner(),
            delays: delays.get(),
            errors: errors.get(),
        }
    }

    #[test]
    fn stops_exactly_on_completed() {
        let run = run_script(vec![
            Ok(snap("processing", 40, "Rendering")),
            Ok(snap("completed", 100, "Done")),
        ]);
        assert_eq!(run.seen.len(), 2);
        assert_eq!(run.seen[0].progress, 40);
        assert_eq!(run.seen[0].message, "Rendering");
        assert!(run.seen[1].is_completed());
        // one wait between the two polls, none after the terminal one
        assert_eq!(run.delays, 1);
    }

    #[test]
    fn stops_exactly_on_error() {
        let run = run_script(vec![
            Ok(snap("started", 5, "Starting video generation...")),
            Ok(snap("processing", 20, "Generating script...")),
            Ok(snap("error", 0, "quota exceeded")),
        ]);
        assert_eq!(run.seen.len(), 3);
        assert!(run.seen[2].is_error());
        assert_eq!(run.seen[2].message, "quota exceeded");
    }

    #[test]
    fn unknown_intermediate_statuses_keep_polling() {
        let run = run_script(vec![
            Ok(snap("queued", 0, "")),
            Ok(snap("rendering", 55, "")),
            Ok(snap("uploading", 90, "")),
            Ok(snap("completed", 100, "")),
        ]);
        assert_eq!(run.seen.len(), 4);
        assert_eq!(run.delays, 3);
    }

    #[test]
    fn transport_failures_are_reported_and_polling_continues() {
        let run = run_script(vec![
            Err(VideoGenError::Network("connection refused".to_string())),
            Ok(snap("processing", 60, "Generating audio...")),
            Err(VideoGenError::Network("timed out".to_string())),
            Ok(snap("completed", 100, "Done")),
        ]);
        assert_eq!(run.errors, 2);
        assert_eq!(run.seen.len(), 2);
        assert!(run.seen[1].is_completed());
    }

    #[test]
    fn stale_poll_after_cancellation_is_discarded() {
        let token = PollToken::new();
        let seen = RefCell::new(Vec::new());

        // The in-flight fetch resolves only after the token was cancelled,
        // as when a new submission supersedes the identifier mid-request.
        let fetch_token = token.clone();
        block_on(poll_until_terminal(
            token,
            move || {
                fetch_token.cancel();
                async { Ok(snap("completed", 100, "Done")) }
            },
            || std::future::ready(()),
            |s| seen.borrow_mut().push(s),
            |_| panic!("no transport error in this script"),
        ));

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn cancellation_during_delay_schedules_no_further_poll() {
        let token = PollToken::new();
        let delay_token = token.clone();
        let seen = RefCell::new(Vec::new());

        // Script has exactly one response; a second fetch would panic.
        let queue = RefCell::new(VecDeque::from(vec![Ok(snap("processing", 10, ""))]));
        block_on(poll_until_terminal(
            token,
            || {
                let next = queue
                    .borrow_mut()
                    .pop_front()
                    .expect("poll was scheduled after cancellation");
                async move { next }
            },
            move || {
                delay_token.cancel();
                std::future::ready(())
            },
            |s| seen.borrow_mut().push(s),
            |_| {},
        ));

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn full_generation_scenario() {
        let completed = ProgressSnapshot {
            video_url: Some("/files/abc123.mp4".to_string()),
            script_url: Some("/files/abc123.txt".to_string()),
            ..snap("completed", 100, "Done")
        };
        let run = run_script(vec![Ok(snap("processing", 40, "Rendering")), Ok(completed)]);

        assert_eq!(run.seen[0].progress, 40);
        assert_eq!(run.seen[0].message, "Rendering");
        let last = run.seen.last().unwrap();
        assert!(last.is_completed());
        assert_eq!(
            last.download_url(crate::videogen::DownloadKind::Video),
            Some("/files/abc123.mp4")
        );
    }
}
