use std::io::{self, Write};

use beep_core::{
    count::RepeatCount,
    player::{PlayResult, Selection},
    report::{FALLBACK_WARNING, Reporter, SelectionLabel},
    sound::SOUND_KINDS,
};
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};

pub const PROGRAM_NAME: &str = "hello-beep";
pub const DESCRIPTION: &str = "A Hello, World! program in Rust that plays random system beep sounds.";

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        PrintStyledContent(PROGRAM_NAME.dark_cyan()),
        Print("\n"),
        PrintStyledContent(DESCRIPTION.dark_grey()),
        Print("\n\n"),
        PrintStyledContent("Usage:".dark_grey()),
        Print(format!(" {} [number_of_beeps_to_play]\n\n", PROGRAM_NAME)),
    )?;
    out.flush()
}

/// One line per catalog entry: name, code, what it sounds like.
pub fn print_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    for kind in SOUND_KINDS {
        writeln!(out, "{:<20} {:#010x}  {}", kind.name, kind.code, kind.description)?;
    }
    out.flush()
}

/// Prints run progress to a terminal.
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    type Error = io::Error;

    fn starting(&mut self, count: &RepeatCount, selection: Selection) -> io::Result<()> {
        if count.is_substituted() {
            log::info!("no usable count given, playing {} times", count.get());
            queue!(
                self.out,
                PrintStyledContent(FALLBACK_WARNING.dark_yellow()),
                Print("\n\n"),
            )?;
        }

        queue!(
            self.out,
            Print(format!("Playing {} system beep sound ", SelectionLabel(selection))),
            PrintStyledContent(format!("{} times", count.get()).dark_cyan()),
            Print(":\n"),
        )?;
        self.out.flush()
    }

    fn played(&mut self, result: &PlayResult) -> io::Result<()> {
        writeln!(self.out, "{}", result)?;
        self.out.flush()
    }
}
