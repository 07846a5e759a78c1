#![allow(missing_docs)]

//! Session controller owning the board and the resource collection.
//!
//! A session lives for one play-through and is driven from a single thread.

mod action;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{board::BoardState, resource::ResourceKind, view_model::ResourceCollection};

pub use action::Action;

/// State for one play session.
#[derive(Debug)]
pub struct GameSession {
    board: BoardState,
    resources: ResourceCollection,
    selected: ResourceKind,
    started_at: DateTime<Utc>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        let started_at = Utc::now();
        info!(%started_at, "session started");
        Self {
            board: BoardState::new(),
            resources: ResourceCollection::new(),
            selected: ResourceKind::MegaCredit,
            started_at,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Mutable board access, used to register change callbacks.
    pub fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub fn resources(&self) -> &ResourceCollection {
        &self.resources
    }

    /// The most recently tapped resource.
    pub fn selected(&self) -> ResourceKind {
        self.selected
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Apply one user action to the session state.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");
        match action {
            Action::Tap(kind) => {
                self.selected = kind;
                info!(%kind, "tapped resource");
            }
            Action::AdjustQuantity { kind, delta } => {
                self.resources.resource_mut(kind).adjust_quantity(delta);
            }
            Action::AdjustProduction { kind, delta } => {
                self.resources.resource_mut(kind).adjust_production(delta);
            }
            Action::AdvanceGeneration => self.board.advance_generation(),
            Action::SetTerraform(value) => self.board.set_terraform(value),
            Action::Reset => {
                self.resources.reset_all();
                self.board.reset();
                info!("session reset");
            }
        }
    }
}
