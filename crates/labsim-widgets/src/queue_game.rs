//! Queue game: FIFO practice with numeric tickets.

use labsim_core::challenge::ChallengeSession;
use labsim_core::progress::{ProgressStore, StoreError};
use labsim_core::structures::Queue;

use crate::input::parse_number;

const TARGET_SCORE: u32 = 5;

const LEVEL_KEY: &str = "cse_queues";
const REWARD_STARS: u8 = 3;
const REWARD_XP: u32 = 50;

/// State of the queue practice game. Tickets are numbers typed by the
/// player; junk input sets a message and changes nothing. Scoring and
/// completion mirror the stack game.
#[derive(Debug, Clone)]
pub struct QueueGame {
    queue: Queue<u32>,
    score: u32,
    message: Option<String>,
    session: ChallengeSession,
}

impl QueueGame {
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
            score: 0,
            message: None,
            session: ChallengeSession::new(LEVEL_KEY),
        }
    }

    /// Queue contents front first
    pub fn items(&self) -> impl Iterator<Item = &u32> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Enqueue the entered text as a number; non-numeric input is rejected
    /// with a message.
    pub fn enqueue(&mut self, text: &str) {
        match parse_number(text) {
            Ok(value) => {
                self.queue.enqueue(value);
                self.score += 1;
                self.message = Some(format!("enqueued {value}"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn dequeue(&mut self) {
        match self.queue.dequeue() {
            Ok(value) => {
                self.score += 1;
                self.message = Some(format!("served {value}"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn peek(&mut self) {
        match self.queue.peek() {
            Ok(value) => {
                self.score += 1;
                self.message = Some(format!("next up is {value}"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.queue.reset();
        self.message = None;
    }

    /// Award the level once the score target is reached
    pub fn maybe_complete<S: ProgressStore>(&mut self, store: &mut S) -> Result<bool, StoreError> {
        if self.score < TARGET_SCORE {
            return Ok(false);
        }
        self.session.complete_once(store, REWARD_STARS, REWARD_XP)
    }
}

impl Default for QueueGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsim_core::progress::MemoryStore;
    use labsim_types::Progress;

    #[test]
    fn test_non_numeric_input_rejected() {
        let mut game = QueueGame::new();
        game.enqueue("abc");
        assert!(game.is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.message(), Some("`abc` is not a number"));
    }

    #[test]
    fn test_fifo_through_the_widget() {
        let mut game = QueueGame::new();
        game.enqueue("10");
        game.enqueue("20");
        game.dequeue();
        assert_eq!(game.message(), Some("served 10"));
        assert_eq!(game.items().copied().collect::<Vec<_>>(), vec![20]);
    }

    #[test]
    fn test_empty_dequeue_messages() {
        let mut game = QueueGame::new();
        game.dequeue();
        assert_eq!(game.message(), Some("the queue is empty"));
    }

    #[test]
    fn test_completion_at_target_score() {
        let mut store = MemoryStore::new();
        let mut game = QueueGame::new();
        for i in 0..5 {
            game.enqueue(&i.to_string());
        }
        assert!(game.maybe_complete(&mut store).unwrap());
        assert!(!game.maybe_complete(&mut store).unwrap());
        assert_eq!(store.read("cse_queues"), Progress::new(3, 50));
    }
}
