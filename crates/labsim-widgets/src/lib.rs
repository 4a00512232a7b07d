//! LabSim widgets — one headless state struct per game.
//!
//! Each widget owns its core models, a challenge session, and whatever
//! playback or scoring state the game needs. All transitions are
//! synchronous methods; time-driven widgets take the caller's clock through
//! `tick(...)` so nothing here reads wall time or spawns threads. A
//! renderer polls the public snapshot accessors after every event.
//!
//! Level completions go through [`labsim_core::ChallengeSession`], so each
//! widget awards its level at most once per session and the progress store
//! only ever improves.

mod balance_game;
mod beam_sandbox;
mod dc_widget;
mod graph_editor;
mod input;
mod queue_game;
mod rlc_widget;
mod shm_widget;
mod sort_player;
mod stack_game;

pub use balance_game::BalanceGame;
pub use beam_sandbox::BeamSandbox;
pub use dc_widget::DcCircuitWidget;
pub use graph_editor::{GraphEditor, GraphTool};
pub use input::InputError;
pub use queue_game::QueueGame;
pub use rlc_widget::RlcWidget;
pub use shm_widget::ShmWidget;
pub use sort_player::SortPlayer;
pub use stack_game::StackGame;
