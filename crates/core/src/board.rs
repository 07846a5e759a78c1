//! Board-level counters: the generation marker and the terraform track.
//!
//! Each counter has a single change-callback slot. Registering a new
//! callback replaces the previous one, which matches the one-view-per-session
//! layout of the front-end. Callbacks run synchronously, right after the
//! mutation, on the caller's thread. The board is mutably borrowed for the
//! duration of the call, so a callback cannot mutate the board that fired it.

use std::fmt;

use tracing::debug;

/// Generation the game starts in.
pub const FIRST_GENERATION: i32 = 1;

/// Terraform value after a reset.
pub const INITIAL_TERRAFORM: i32 = 0;

/// Callback invoked with the new counter value.
pub type ChangeCallback = Box<dyn FnMut(i32)>;

/// Generation and terraform tracker.
pub struct BoardState {
    generation: i32,
    terraform: i32,
    did_change_generation: Option<ChangeCallback>,
    did_change_terraform: Option<ChangeCallback>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            generation: FIRST_GENERATION,
            terraform: INITIAL_TERRAFORM,
            did_change_generation: None,
            did_change_terraform: None,
        }
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardState")
            .field("generation", &self.generation)
            .field("terraform", &self.terraform)
            .field("did_change_generation", &self.did_change_generation.is_some())
            .field("did_change_terraform", &self.did_change_terraform.is_some())
            .finish()
    }
}

impl BoardState {
    /// A board at generation 1 with no terraform progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation number.
    pub fn generation(&self) -> i32 {
        self.generation
    }

    /// Current terraform value.
    pub fn terraform(&self) -> i32 {
        self.terraform
    }

    /// Register the generation callback, replacing any previous one.
    pub fn on_generation_change(&mut self, callback: impl FnMut(i32) + 'static) {
        self.did_change_generation = Some(Box::new(callback));
    }

    /// Register the terraform callback, replacing any previous one.
    pub fn on_terraform_change(&mut self, callback: impl FnMut(i32) + 'static) {
        self.did_change_terraform = Some(Box::new(callback));
    }

    /// Move to the next generation.
    pub fn advance_generation(&mut self) {
        self.generation = self.generation.saturating_add(1);
        debug!(generation = self.generation, "generation advanced");
        self.notify_generation();
    }

    /// Set the terraform value.
    pub fn set_terraform(&mut self, value: i32) {
        self.terraform = value;
        debug!(terraform = value, "terraform set");
        self.notify_terraform();
    }

    /// Back to generation 1 and terraform 0. Fires both callbacks.
    pub fn reset(&mut self) {
        self.generation = FIRST_GENERATION;
        self.terraform = INITIAL_TERRAFORM;
        debug!("board reset");
        self.notify_generation();
        self.notify_terraform();
    }

    fn notify_generation(&mut self) {
        if let Some(callback) = self.did_change_generation.as_mut() {
            callback(self.generation);
        }
    }

    fn notify_terraform(&mut self) {
        if let Some(callback) = self.did_change_terraform.as_mut() {
            callback(self.terraform);
        }
    }
}
