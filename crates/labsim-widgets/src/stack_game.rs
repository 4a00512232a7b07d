//! Stack game: practice push/pop/peek until the level completes.

use labsim_core::challenge::ChallengeSession;
use labsim_core::progress::{ProgressStore, StoreError};
use labsim_core::structures::Stack;

use crate::input::non_blank;

/// Successful operations needed to finish the level
const TARGET_SCORE: u32 = 5;

const LEVEL_KEY: &str = "cse_stacks";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// State of the stack practice game. Every successful push/pop/peek earns
/// a point; reaching the target score completes the level once per
/// session. Operations on an empty stack and blank input set a message
/// instead of failing.
#[derive(Debug, Clone)]
pub struct StackGame {
    stack: Stack<String>,
    score: u32,
    message: Option<String>,
    session: ChallengeSession,
}

impl StackGame {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            score: 0,
            message: None,
            session: ChallengeSession::new(LEVEL_KEY),
        }
    }

    pub fn items(&self) -> &[String] {
        self.stack.items()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Latest user-visible message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Push the entered text. Blank input is rejected with a message and
    /// no state change.
    pub fn push(&mut self, text: &str) {
        match non_blank(text) {
            Ok(value) => {
                self.stack.push(value.to_string());
                self.score += 1;
                self.message = Some(format!("pushed `{value}`"));
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn pop(&mut self) {
        match self.stack.pop() {
            Ok(value) => {
                self.score += 1;
                self.message = Some(format!("popped `{value}`"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn peek(&mut self) {
        match self.stack.peek() {
            Ok(value) => {
                self.score += 1;
                self.message = Some(format!("top is `{value}`"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Empty the stack and clear the message; score and completion are kept
    pub fn reset(&mut self) {
        self.stack.reset();
        self.message = None;
    }

    /// Award the level if the score target has been reached. Safe to call
    /// after every operation; the store is written at most once per session.
    pub fn maybe_complete<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        if self.score < TARGET_SCORE {
            return Ok(false);
        }
        self.session.complete_once(store, REWARD_STARS, REWARD_XP)
    }
}

impl Default for StackGame {
    fn default() -> Self {
        Self::new()
    }
}
