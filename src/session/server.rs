use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};

use crate::config::timing::SessionTiming;
use crate::game::snapshot::RenderSnapshot;
use crate::game::state::{GameState, TickReport};
use crate::game::systems::ContactOutcome;
use crate::session::messages::{DirectionKey, GetSnapshot, Reset, Start, StateUpdate, Subscribe, Tick};

/// Owns one `GameState` and drives it from two timers: the main tick and the power expiry.
pub struct GameSession {
    game_state: GameState,
    timing: SessionTiming,
    pub(crate) subscribers: Vec<Recipient<StateUpdate>>,

    tick_timer: Option<SpawnHandle>,
    power_timer: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameSession] Started: tick={:?} power={:?}",
            self.timing.tick_interval, self.timing.power_duration
        );
        self.start_ticking(ctx);
    }
}

impl GameSession {
    pub fn new(game_state: GameState, timing: SessionTiming) -> Self {
        Self {
            game_state,
            timing,
            subscribers: Vec::new(),
            tick_timer: None,
            power_timer: None,
        }
    }

    pub fn send_state(&mut self) {
        self.subscribers.retain(|subscriber| subscriber.connected());
        debug!(
            "[GameSession] Broadcast frame={} score={} lives={} subscribers={}",
            self.game_state.frame,
            self.game_state.score,
            self.game_state.lives,
            self.subscribers.len()
        );
        let snapshot = self.game_state.snapshot();
        for subscriber in &self.subscribers {
            subscriber.do_send(StateUpdate { snapshot: snapshot.clone() });
        }
    }

    fn start_ticking(&mut self, ctx: &mut Context<Self>) {
        if self.tick_timer.is_some() {
            return;
        }
        let handle = ctx.run_interval(self.timing.tick_interval, |act, ctx| {
            act.run_tick(ctx);
        });
        self.tick_timer = Some(handle);
    }

    fn stop_ticking(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    /// (Re)start the power countdown. A new pellet restarts it, it never stacks.
    fn arm_power_timer(&mut self, ctx: &mut Context<Self>) {
        self.cancel_power_timer(ctx);
        let handle = ctx.run_later(self.timing.power_duration, |act, _ctx| {
            act.power_timer = None;
            act.game_state.end_power_up();
            info!("[GameSession] Power expired");
            act.send_state();
        });
        self.power_timer = Some(handle);
    }

    fn cancel_power_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.power_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn run_tick(&mut self, ctx: &mut Context<Self>) -> TickReport {
        let report = self.game_state.tick();
        if !report.processed {
            self.stop_ticking(ctx);
            return report;
        }

        if report.power_started {
            info!("[GameSession] Power pellet eaten at frame {}", self.game_state.frame);
            self.arm_power_timer(ctx);
        }

        match report.contact {
            ContactOutcome::Clear => {}
            ContactOutcome::Eaten(count) => {
                info!("[GameSession] {} enemy(ies) eaten", count);
            }
            ContactOutcome::LifeLost => {
                info!("[GameSession] Life lost, {} left", self.game_state.lives);
            }
            ContactOutcome::GameOver => {
                info!("[GameSession] Game over with score {}", self.game_state.score);
            }
        }
        if report.won {
            info!("[GameSession] Maze cleared with score {}", self.game_state.score);
        }

        if !self.game_state.is_running() {
            self.stop_ticking(ctx);
        }
        self.send_state();
        report
    }
}

impl Handler<DirectionKey> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: DirectionKey, _: &mut Context<Self>) -> Self::Result {
        self.game_state.on_direction_key(msg.0);
    }
}

impl Handler<Start> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Start, ctx: &mut Context<Self>) -> Self::Result {
        if self.game_state.is_running() {
            self.start_ticking(ctx);
        }
    }
}

impl Handler<Reset> for GameSession {
    type Result = ();

    fn handle(&mut self, _: Reset, ctx: &mut Context<Self>) -> Self::Result {
        info!("[GameSession] Reset");
        self.cancel_power_timer(ctx);
        self.stop_ticking(ctx);
        self.game_state.reset();
        self.start_ticking(ctx);
        self.send_state();
    }
}

impl Handler<Tick> for GameSession {
    type Result = MessageResult<Tick>;

    fn handle(&mut self, _: Tick, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.run_tick(ctx))
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.snapshot())
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        let snapshot: RenderSnapshot = self.game_state.snapshot();
        msg.0.do_send(StateUpdate { snapshot });
        self.subscribers.push(msg.0);
    }
}
