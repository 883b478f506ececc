use std::fmt;

/// Wall-clock timing for the phases of a run (parse, each render layer,
/// output).  Each `lap()` measures one phase; `total()` spans all of them.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started_ns: u64,
    lap_ns: u64,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        let now = time::precise_time_ns();
        Stopwatch {
            started_ns: now,
            lap_ns: now,
        }
    }

    /// Ends the current phase and returns how long it took.
    pub fn lap(&mut self) -> Seconds {
        let now = time::precise_time_ns();
        let lap = Seconds::between(self.lap_ns, now);
        self.lap_ns = now;
        lap
    }

    /// Time since the stopwatch was started, regardless of laps.
    pub fn total(&self) -> Seconds {
        Seconds::between(self.started_ns, time::precise_time_ns())
    }
}

/// A duration that logs as `1.234s`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Seconds(pub f64);

impl Seconds {
    fn between(from_ns: u64, to_ns: u64) -> Seconds {
        Seconds(to_ns.saturating_sub(from_ns) as f64 / 1_000_000_000.0)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_display() {
        assert_eq!(Seconds(1.23456).to_string(), "1.235s");
        assert_eq!(Seconds(0.0).to_string(), "0.000s");
    }

    #[test]
    fn seconds_between() {
        assert_eq!(Seconds::between(0, 2_500_000_000), Seconds(2.5));
        // A clock that appears to step backwards reads as zero.
        assert_eq!(Seconds::between(10, 5), Seconds(0.0));
    }

    #[test]
    fn laps_fit_within_total() {
        let mut sw = Stopwatch::start();
        let a = sw.lap();
        let b = sw.lap();
        let total = sw.total();

        assert!(a.0 >= 0.0);
        assert!(b.0 >= 0.0);
        assert!(total.0 + 1e-9 >= a.0 + b.0);
    }
}
