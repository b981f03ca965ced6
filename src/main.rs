//! Bounce Pit entry point
//!
//! Headless native shell: scripts the spawn key, runs one fixed tick per loop
//! iteration and builds the frame's vertex list without presenting it.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_pit::consts::SIM_DT;
use bounce_pit::renderer::{Appearance, Palette, build_frame};
use bounce_pit::settings::Settings;
use bounce_pit::sim::{SimState, TickInput, tick};

/// Shell instance holding simulation and presentation state
struct Game {
    state: SimState,
    palette: Palette,
    input: TickInput,
    settings: Settings,
    frame: u32,
    vertex_count: usize,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Seed: {}, step order: {:?}", seed, settings.step_order);
        Self {
            state: SimState::new(seed).with_step_order(settings.step_order),
            palette: Palette::new(),
            input: TickInput::default(),
            settings,
            frame: 0,
            vertex_count: 0,
        }
    }

    /// Scripted stand-in for keyboard polling
    fn poll_input(&mut self) {
        self.input.spawn_held = self.frame < self.settings.spawn_frames;
        self.input.quit = self.frame >= self.settings.frames;
    }

    /// Run exactly one simulation tick
    fn update(&mut self) {
        let outcome = tick(&mut self.state, &self.input, SIM_DT);
        if let Some(id) = outcome.spawned {
            let look = Appearance::random(self.state.rng());
            self.palette.insert(id, look);
        }
    }

    fn render(&mut self) {
        let vertices = build_frame(
            &self.state.bodies,
            &self.palette,
            self.settings.circle_segments,
        );
        self.vertex_count = vertices.len();
    }

    fn log_summary(&self) {
        let totals = self.state.totals;
        log::info!(
            "t={:.2}s bodies={} vertices={} energy={:.0} pairs={} contacts={} impulses={}",
            self.state.time_ticks as f32 * SIM_DT,
            self.state.bodies.len(),
            self.vertex_count,
            self.state.kinetic_energy(),
            totals.pairs_tested,
            totals.contacts,
            totals.impulses
        );
    }

    fn run(&mut self) {
        loop {
            self.poll_input();
            if self.input.quit {
                break;
            }

            self.update();
            self.render();
            self.frame += 1;

            let every = self.settings.log_every;
            if every > 0 && self.frame % every == 0 {
                self.log_summary();
            }
        }
        self.log_summary();
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bounce Pit (headless) starting...");

    let path = Settings::locate(std::env::args().nth(1));
    let settings = Settings::load_or_default(path.as_deref());
    let dump_state = settings.dump_state;

    let mut game = Game::new(settings);
    game.run();

    if dump_state {
        match serde_json::to_string_pretty(&game.state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize state: {}", e),
        }
    }
}
