//! # Optimistic reactions
//!
//! Like, star, save and follow buttons flip immediately and talk to the
//! backend afterwards. [`Optimistic`] remembers the pre-toggle state so a
//! failed request can be rolled back, and [`Reconcile`] tells the caller what
//! to do next.
//!
//! | Reaction | Endpoint | On failure |
//! |----------|----------|------------|
//! | Like | none, local only | n/a |
//! | Star | none, local only | n/a |
//! | Save | `POST` / `DELETE /projects/{id}/save` | roll back, refetch |
//! | Follow | `/users/{username}/follow`, `/unfollow` | roll back, refetch |

use crate::error::ApiError;
use crate::models::Project;

/// A toggle-able reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Star,
    Save,
    Follow,
}

impl Reaction {
    /// Whether the backend knows about this reaction at all.
    pub fn is_persisted(self) -> bool {
        matches!(self, Reaction::Save | Reaction::Follow)
    }

    /// Current state of this reaction on `project`. `Follow` is not a
    /// project reaction and reads as inactive.
    pub fn read(self, project: &Project) -> ToggleState {
        match self {
            Reaction::Like => ToggleState::counted(project.liked_by_user, project.likes),
            Reaction::Star => ToggleState::counted(project.starred_by_user, project.stars),
            Reaction::Save => ToggleState::flag(project.saved_by_user),
            Reaction::Follow => ToggleState::default(),
        }
    }

    /// Write `state` back into `project`.
    pub fn write(self, project: &mut Project, state: ToggleState) {
        match self {
            Reaction::Like => {
                project.liked_by_user = state.active;
                project.likes = state.count;
            }
            Reaction::Star => {
                project.starred_by_user = state.active;
                project.stars = state.count;
            }
            Reaction::Save => project.saved_by_user = state.active,
            Reaction::Follow => {}
        }
    }
}

/// On/off plus an optional visible counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
    pub count: u64,
}

impl ToggleState {
    pub fn flag(active: bool) -> Self {
        Self { active, count: 0 }
    }

    pub fn counted(active: bool, count: u64) -> Self {
        Self { active, count }
    }

    /// Flipped state; the counter follows without going below zero.
    pub fn toggled(self) -> Self {
        let active = !self.active;
        let count = if active {
            self.count.saturating_add(1)
        } else {
            self.count.saturating_sub(1)
        };
        Self { active, count }
    }
}

/// What to do after a request settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Server agreed; nothing to do.
    None,
    /// Server disagreed; the view was rolled back and should reload.
    Refetch,
    /// No server round trip exists for this reaction.
    LocalOnly,
}

/// A toggle applied ahead of the server's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optimistic {
    reaction: Reaction,
    previous: ToggleState,
    current: ToggleState,
}

impl Optimistic {
    pub fn begin(reaction: Reaction, state: ToggleState) -> Self {
        Self {
            reaction,
            previous: state,
            current: state.toggled(),
        }
    }

    pub fn reaction(&self) -> Reaction {
        self.reaction
    }

    /// The state to show while the request is in flight.
    pub fn current(&self) -> ToggleState {
        self.current
    }

    pub fn previous(&self) -> ToggleState {
        self.previous
    }

    /// Settle against the request outcome. Returns the state to show and the
    /// follow-up action.
    pub fn settle<T>(self, outcome: &Result<T, ApiError>) -> (ToggleState, Reconcile) {
        if !self.reaction.is_persisted() {
            return (self.current, Reconcile::LocalOnly);
        }
        match outcome {
            Ok(_) => (self.current, Reconcile::None),
            Err(e) => {
                tracing::warn!("{:?} toggle rolled back: {e}", self.reaction);
                (self.previous, Reconcile::Refetch)
            }
        }
    }
}
