//! Message pump: timer and input tasks feeding one engine inbox.
//!
//! The engine consumes messages one at a time from a single channel, in
//! delivery order, so all state mutation is serialized without locks.
//! Producers never block on the consumer; messages queue.

use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::World;
use crate::input::map_key;
use crate::term::{FrameBuffer, GameView, TerminalRenderer};
use crate::types::{GameAction, SPAWN_INTERVAL_MS, TICK_MS};

/// Messages delivered to the engine inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Tick,
    Spawn,
    Key(KeyEvent),
}

/// What the host loop does after a message is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatches messages into the world, measuring elapsed wall-clock time
/// between ticks.
#[derive(Debug)]
pub struct Pump {
    last_tick: Instant,
}

impl Pump {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    pub fn handle(&mut self, world: &mut World, msg: Msg) -> Flow {
        match msg {
            Msg::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_tick).as_secs_f32();
                self.last_tick = now;
                world.tick(dt);
            }
            Msg::Spawn => world.spawn_enemy(),
            Msg::Key(key) => match map_key(key) {
                Some(GameAction::Jump) => world.request_jump(),
                Some(GameAction::Quit) => return Flow::Quit,
                None => {}
            },
        }
        Flow::Continue
    }
}

impl Default for Pump {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_timers(tx: &Sender<Msg>) {
    let tick_tx = tx.clone();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(TICK_MS));
        if tick_tx.send(Msg::Tick).is_err() {
            break;
        }
    });

    // The first obstacle spawns right away.
    let spawn_tx = tx.clone();
    thread::spawn(move || loop {
        if spawn_tx.send(Msg::Spawn).is_err() {
            break;
        }
        thread::sleep(Duration::from_millis(SPAWN_INTERVAL_MS));
    });
}

fn spawn_input_reader(tx: Sender<Msg>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(Msg::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

/// Run the game until a quit request arrives.
pub fn run(mut world: World, term: &mut TerminalRenderer) -> Result<()> {
    let (tx, rx) = mpsc::channel::<Msg>();
    spawn_timers(&tx);
    spawn_input_reader(tx);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(world.width(), world.height());
    let mut pump = Pump::new();

    while let Ok(msg) = rx.recv() {
        if pump.handle(&mut world, msg) == Flow::Quit {
            break;
        }
        view.render_into(&world, &mut fb);
        term.draw_swap(&mut fb)?;
    }
    Ok(())
}
