//! Desktop runner for the fire flicker engine
//!
//! Reads `on` / `off` commands from stdin on a producer thread and runs the
//! frame scheduler on the main thread. Channel intensities are logged instead
//! of driving PWM hardware; set `RUST_LOG=debug` to see every frame.
//!
//! Usage: `fire-flicker-demo [frame_ms]`

use std::io::BufRead;
use std::process::ExitCode;
use std::thread;

use fire_flicker::{
    ActuationBackend, CHANNEL_COUNT, COMMAND_CHANNEL_SIZE, Command, CommandChannel,
    CommandSender, Duration, FireConfig, FireEngine, FrameScheduler, Instant, Waveform,
};

/// Command channel shared between the stdin thread and the render loop
static COMMANDS: CommandChannel<COMMAND_CHANNEL_SIZE> = CommandChannel::new();

/// Backend that records the last frame and logs it
#[derive(Default)]
struct LogBackend {
    frame: [u16; CHANNEL_COUNT],
}

impl ActuationBackend for LogBackend {
    type Error = core::convert::Infallible;

    fn set_channel_intensity(&mut self, channel: usize, intensity: u16) -> Result<(), Self::Error> {
        self.frame[channel] = intensity;
        if channel == CHANNEL_COUNT - 1 {
            log::debug!("frame {:?}", self.frame);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config: FireConfig<CHANNEL_COUNT> = FireConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(frame_ms) if frame_ms > 0 => config.frame_duration = Duration::from_millis(frame_ms),
            _ => {
                log::error!("invalid frame period `{arg}`, expected milliseconds");
                return ExitCode::FAILURE;
            }
        }
    }

    let engine = match FireEngine::new(
        LogBackend::default(),
        COMMANDS.receiver(),
        Waveform::fire(),
        &config,
    ) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "fire running: {} channels, {} ms frames, {} frames power-off",
        CHANNEL_COUNT,
        config.frame_duration.as_millis(),
        config.countdown_ticks()
    );

    thread::spawn(move || read_commands(COMMANDS.sender()));

    let mut scheduler = FrameScheduler::new(engine);
    loop {
        let result = match scheduler.tick(Instant::now()) {
            Ok(result) => result,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        };

        let outcome = result.outcome;
        if outcome.command.is_some() {
            log::info!("command {}", outcome.command.as_str());
        }
        if let Some(transition) = outcome.transition {
            log::info!(
                "{transition:?}, power-off countdown {}",
                scheduler.engine().countdown()
            );
        }

        thread::sleep(std::time::Duration::from_micros(
            result.sleep_duration.as_micros(),
        ));
    }
}

/// Decode stdin lines into commands until stdin closes
fn read_commands(sender: CommandSender<'static, COMMAND_CHANNEL_SIZE>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("stdin closed: {err}");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse_from_str(&line) else {
            log::warn!("unknown command `{}`", line.trim());
            continue;
        };
        if let Err(err) = sender.try_send(command) {
            log::warn!("{err}");
        }
    }
}
