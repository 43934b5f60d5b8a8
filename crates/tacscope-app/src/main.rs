//! Headless host for the TACSCOPE kernel.
//!
//! Loads a scenario JSON, drives the engine at the fixed tick rate (or as
//! fast as possible with --fast), logs kernel events, and prints the final
//! snapshot as JSON on stdout. This binary owns all file I/O; the kernel
//! itself never touches the filesystem.

use std::thread::sleep;
use std::time::{Duration, Instant};

use log::info;

use tacscope_core::constants::TICK_RATE;
use tacscope_sim::engine::SimulationEngine;
use tacscope_sim::scenario;

/// Drift-free tick pacer: sleeps out the remainder of each tick so the
/// loop tracks wall clock without accumulating error.
struct Pacer {
    next: Instant,
    period: Duration,
}

impl Pacer {
    fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate_hz as f64);
        Self {
            next: Instant::now() + period,
            period,
        }
    }

    fn sleep(&mut self) {
        let now = Instant::now();
        if self.next > now {
            sleep(self.next - now);
        }
        self.next += self.period;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scenario_path: Option<String> = None;
    let mut ticks: u64 = 600;
    let mut fast = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = args.next().ok_or("--ticks needs a value")?;
                ticks = value.parse()?;
            }
            "--fast" => fast = true,
            "--help" => {
                eprintln!("usage: tacscope [scenario.json] [--ticks N] [--fast]");
                return Ok(());
            }
            other => scenario_path = Some(other.to_string()),
        }
    }

    let saved = match &scenario_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => scenario::default_scenario(),
    };

    let mut engine = SimulationEngine::from_scenario(&saved);
    info!(
        "scenario loaded: {} assets, running {ticks} ticks at {TICK_RATE} Hz",
        saved.assets.len()
    );

    let mut pacer = Pacer::new(TICK_RATE);
    let mut last = None;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        for event in &snapshot.events {
            info!("{event:?}");
        }
        last = Some(snapshot);
        if !fast {
            pacer.sleep();
        }
    }

    if let Some(snapshot) = last {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
