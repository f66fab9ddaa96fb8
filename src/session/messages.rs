use actix::prelude::*;
use serde::Serialize;

use crate::game::snapshot::RenderSnapshot;
use crate::game::state::TickReport;
use crate::game::types::Key;

/// A key press forwarded by the front-end.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct DirectionKey(pub Key);

/// Arm the tick timer. Does nothing if it is already running.
#[derive(Message, Debug)]
#[rtype(result = "()")]
pub struct Start;

/// Rebuild the session from scratch and resume ticking.
#[derive(Message, Debug)]
#[rtype(result = "()")]
pub struct Reset;

/// Run one tick immediately, outside the timer.
#[derive(Message, Debug)]
#[rtype(result = "TickReport")]
pub struct Tick;

#[derive(Message, Debug)]
#[rtype(result = "RenderSnapshot")]
pub struct GetSnapshot;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<StateUpdate>);

/// Pushed to every subscriber after a state change.
#[derive(Message, Clone, Serialize, Debug)]
#[rtype(result = "()")]
pub struct StateUpdate {
    pub snapshot: RenderSnapshot,
}
