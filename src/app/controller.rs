//! Controller driver executing actions against the API worker.
//!
//! [`Controller::dispatch`] runs one view event to completion: it applies the
//! event, executes the resulting actions in order, and feeds every API response
//! back through [`handle_event`]. Follow-up actions raised by a response run
//! before the remaining actions of the triggering event, so a reload triggered by
//! a successful post finishes before the navigation that follows it.

use crate::api::{ApiWorker, JobBoardApi};
use crate::app::modes::Section;
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use std::collections::VecDeque;

/// What the view layer must do after a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// State changed visibly; repaint.
    pub render: bool,
    /// Scroll or route to this section.
    pub navigate: Option<Section>,
}

/// Owns the application state and the API worker.
#[derive(Debug)]
pub struct Controller<A> {
    state: AppState,
    worker: ApiWorker<A>,
}

impl<A: JobBoardApi> Controller<A> {
    #[must_use]
    pub fn new(state: AppState, api: A) -> Self {
        Self {
            state,
            worker: ApiWorker::new(api),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        self.worker.api()
    }

    /// Applies `event` and every action it causes.
    ///
    /// Only one request is ever outstanding: each API action is awaited before
    /// the next action runs.
    ///
    /// # Errors
    ///
    /// Propagates errors returned by [`handle_event`].
    pub async fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        let (render, actions) = handle_event(&mut self.state, &event)?;
        let mut outcome = Outcome {
            render,
            navigate: None,
        };

        let mut queue: VecDeque<Action> = actions.into();
        while let Some(action) = queue.pop_front() {
            match action {
                Action::Api(request) => {
                    let response = self.worker.handle_request(request).await;
                    let (render, follow_up) =
                        handle_event(&mut self.state, &Event::ApiResponse(response))?;
                    outcome.render |= render;
                    for action in follow_up.into_iter().rev() {
                        queue.push_front(action);
                    }
                }
                Action::Navigate(section) => {
                    tracing::debug!(section = section.anchor(), "navigating");
                    outcome.navigate = Some(section);
                }
            }
        }

        Ok(outcome)
    }
}
