use std::io;
use std::thread;
use std::time::Duration;

use beep_core::consts::DEFAULT_INTERVAL_MS;
use beep_core::count::parse_count;
use beep_core::engine::{Engine, Pause};
use beep_core::player::{BeepPlayer, Selection};
use beep_core::sound::{SOUND_KINDS, SoundKind};
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

mod console;
mod console_log;
mod notifier;

#[derive(Parser, Debug)]
#[command(name = console::PROGRAM_NAME, version, about = console::DESCRIPTION)]
struct Args {
    /// How many beeps to play. Anything but a positive integer plays 1-100.
    #[arg(value_name = "NUMBER_OF_BEEPS_TO_PLAY", allow_negative_numbers = true)]
    count: Option<String>,

    /// Always play this sound instead of a random one (see --list).
    #[arg(long, value_name = "NAME", value_parser = parse_sound)]
    sound: Option<SoundKind>,

    /// Pause between two beeps, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Print the known sounds and exit.
    #[arg(long)]
    list: bool,

    /// Log more, repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_sound(name: &str) -> Result<SoundKind, String> {
    SoundKind::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = SOUND_KINDS.iter().map(|kind| kind.name).collect();
        format!("unknown sound `{}`, expected one of: {}", name, known.join(", "))
    })
}

struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    console_log::init(console_log::level_for(args.verbose));

    let mut stdout = io::stdout();
    console::print_banner(&mut stdout)?;

    if args.list {
        console::print_catalog(&mut stdout)?;
        return Ok(());
    }

    let requested = args.count.as_deref().and_then(parse_count);
    let selection = args.sound.map_or(Selection::Random, Selection::Fixed);
    log::debug!("requested {:?}, selection {:?}", requested, selection);

    let notifier = notifier::SystemNotifier::new();
    let player = BeepPlayer::new(&notifier, selection);
    let mut engine = Engine::new(player, SmallRng::from_os_rng())
        .with_interval(Duration::from_millis(args.interval_ms));

    let mut reporter = console::ConsoleReporter::new(stdout);
    engine.run(requested, &mut ThreadPause, &mut reporter)?;

    Ok(())
}
