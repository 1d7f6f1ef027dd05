use core::time::Duration;

use rand::Rng;

use crate::{
    consts::DEFAULT_INTERVAL_MS,
    count::RepeatCount,
    player::BeepPlayer,
    report::Reporter,
};

/// Blocks between two plays.
pub trait Pause {
    fn pause(&mut self, interval: Duration);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempts: u32,
    pub failures: u32,
}

pub struct Engine<'a, R> {
    player: BeepPlayer<'a>,
    context: Context<R>,
}

impl<'a, R: Rng> Engine<'a, R> {
    pub fn new(player: BeepPlayer<'a>, rng: R) -> Self {
        Self {
            player,
            context: Context::new(rng),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.context.interval = interval;
        self
    }

    /// Resolve `requested` and play that many sounds.
    pub fn run<P, T>(
        &mut self,
        requested: Option<i64>,
        pause: &mut P,
        reporter: &mut T,
    ) -> Result<RunSummary, T::Error>
    where
        P: Pause + ?Sized,
        T: Reporter + ?Sized,
    {
        let count = RepeatCount::resolve(requested, &mut self.context.rng);
        self.run_count(count, pause, reporter)
    }

    /// Play `count` sounds, pausing between them. A failed play is reported
    /// and the loop carries on; only a reporter error ends it early.
    pub fn run_count<P, T>(
        &mut self,
        count: RepeatCount,
        pause: &mut P,
        reporter: &mut T,
    ) -> Result<RunSummary, T::Error>
    where
        P: Pause + ?Sized,
        T: Reporter + ?Sized,
    {
        reporter.starting(&count, self.player.selection())?;

        let mut summary = RunSummary::default();
        let total = count.get();
        for i in 0..total {
            let kind = self.player.select_sound(&mut self.context.rng);
            log::trace!("play {}/{}: {}", i + 1, total, kind);

            let result = self.player.play(kind);
            summary.attempts += 1;
            if !result.succeeded() {
                summary.failures += 1;
            }
            reporter.played(&result)?;

            if i + 1 < total {
                pause.pause(self.context.interval);
            }
        }

        log::info!(
            "played {} sounds, {} failed",
            summary.attempts,
            summary.failures
        );
        Ok(summary)
    }
}

pub struct Context<R> {
    pub rng: R,
    pub interval: Duration,
}

impl<R> Context<R> {
    fn new(rng: R) -> Self {
        Self {
            rng,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::RANDOM_COUNT_RANGE,
        count::CountSource,
        notifier::{NotifierTrait, NotifyReply},
        player::{PlayResult, Selection},
        sound::SoundKind,
    };
    use core::convert::Infallible;
    use rand::{SeedableRng, rngs::SmallRng};
    use std::cell::Cell;

    /// Fails every `fail_every`-th call, counting from 1.
    struct FakeNotifier {
        calls: Cell<u32>,
        fail_every: u32,
    }

    impl FakeNotifier {
        fn new(fail_every: u32) -> Self {
            Self {
                calls: Cell::new(0),
                fail_every,
            }
        }
    }

    impl NotifierTrait for FakeNotifier {
        fn notify(&self, _code: u32) -> NotifyReply {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if self.fail_every != 0 && n % self.fail_every == 0 {
                NotifyReply::failed("The device is not ready.")
            } else {
                NotifyReply {
                    ret: 1,
                    diagnostic: Some("The operation completed successfully.".into()),
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingPause(Vec<Duration>);

    impl Pause for RecordingPause {
        fn pause(&mut self, interval: Duration) {
            self.0.push(interval);
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        started: Vec<RepeatCount>,
        lines: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        type Error = Infallible;

        fn starting(&mut self, count: &RepeatCount, _selection: Selection) -> Result<(), Infallible> {
            self.started.push(*count);
            Ok(())
        }

        fn played(&mut self, result: &PlayResult) -> Result<(), Infallible> {
            self.lines.push(result.to_string());
            Ok(())
        }
    }

    fn new_engine(notifier: &FakeNotifier, selection: Selection) -> Engine<'_, SmallRng> {
        Engine::new(
            BeepPlayer::new(notifier, selection),
            SmallRng::seed_from_u64(2137),
        )
    }

    #[test]
    fn test_run_five_times() {
        let notifier = FakeNotifier::new(0);
        let mut engine = new_engine(&notifier, Selection::Random);
        let mut pause = RecordingPause::default();
        let mut reporter = RecordingReporter::default();

        let summary = engine.run(Some(5), &mut pause, &mut reporter).unwrap();

        assert_eq!(summary, RunSummary { attempts: 5, failures: 0 });
        assert_eq!(notifier.calls.get(), 5);
        assert_eq!(reporter.lines.len(), 5);
        assert!(reporter.lines.iter().all(|l| l.starts_with("Played beep: ")));
        assert_eq!(pause.0.len(), 4);
    }

    #[test]
    fn test_three_plays_one_second_apart() {
        let notifier = FakeNotifier::new(0);
        let mut engine = new_engine(&notifier, Selection::Fixed(SoundKind::ICON_QUESTION));
        let mut pause = RecordingPause::default();
        let mut reporter = RecordingReporter::default();

        engine.run(Some(3), &mut pause, &mut reporter).unwrap();

        assert_eq!(pause.0, vec![Duration::from_secs(1); 2]);
        assert_eq!(reporter.lines, vec!["Played beep: MB_ICONQUESTION"; 3]);
    }

    #[test]
    fn test_failures_do_not_stop_the_run() {
        let notifier = FakeNotifier::new(2);
        let mut engine = new_engine(&notifier, Selection::Fixed(SoundKind::OK));
        let mut pause = RecordingPause::default();
        let mut reporter = RecordingReporter::default();

        let summary = engine.run(Some(4), &mut pause, &mut reporter).unwrap();

        assert_eq!(summary, RunSummary { attempts: 4, failures: 2 });
        assert_eq!(
            reporter.lines[1],
            "Failed to play beep: MB_OK, error: The device is not ready."
        );
        assert_eq!(reporter.lines[2], "Played beep: MB_OK");
    }

    #[test]
    fn test_substituted_count_is_used_for_whole_run() {
        for requested in [None, Some(0), Some(-7)] {
            let notifier = FakeNotifier::new(0);
            let mut engine = new_engine(&notifier, Selection::Random);
            let mut pause = RecordingPause::default();
            let mut reporter = RecordingReporter::default();

            let summary = engine.run(requested, &mut pause, &mut reporter).unwrap();

            assert_eq!(reporter.started.len(), 1);
            let count = reporter.started[0];
            assert_eq!(count.source(), CountSource::Random);
            assert!(RANDOM_COUNT_RANGE.contains(&count.get()));
            assert_eq!(summary.attempts, count.get());
            assert_eq!(reporter.lines.len() as u32, count.get());
        }
    }

    #[test]
    fn test_custom_interval() {
        let notifier = FakeNotifier::new(0);
        let mut engine =
            new_engine(&notifier, Selection::Random).with_interval(Duration::from_millis(250));
        let mut pause = RecordingPause::default();
        let mut reporter = RecordingReporter::default();

        engine.run(Some(2), &mut pause, &mut reporter).unwrap();

        assert_eq!(pause.0, vec![Duration::from_millis(250)]);
    }

    #[test]
    fn test_reporter_error_is_returned() {
        struct BrokenReporter;

        impl Reporter for BrokenReporter {
            type Error = &'static str;

            fn starting(&mut self, _: &RepeatCount, _: Selection) -> Result<(), &'static str> {
                Ok(())
            }

            fn played(&mut self, _: &PlayResult) -> Result<(), &'static str> {
                Err("stdout closed")
            }
        }

        let notifier = FakeNotifier::new(0);
        let mut engine = new_engine(&notifier, Selection::Random);
        let mut pause = RecordingPause::default();

        let err = engine.run(Some(3), &mut pause, &mut BrokenReporter).unwrap_err();

        assert_eq!(err, "stdout closed");
        assert_eq!(notifier.calls.get(), 1);
    }
}
