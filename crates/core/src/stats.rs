//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of every access. It provides:
//! 1. **Counters:** Accesses, hits, and compulsory/capacity/conflict misses.
//! 2. **Rates:** Hit and miss rates over all accesses; miss-kind rates over all misses.
//! 3. **Reporting:** Verbose and compact text layouts plus JSON export.

use serde::Serialize;

use crate::cache::MissKind;

/// Running totals for one simulated cache.
///
/// Every access increments `accesses` and exactly one of the other counters,
/// so `hits + misses() == accesses` always holds. Counters never decrease.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total number of accesses replayed.
    pub accesses: u64,
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Misses on a set that still had an empty way.
    pub compulsory_misses: u64,
    /// Misses while the whole cache was full.
    pub capacity_misses: u64,
    /// Misses on a full set while other sets had room.
    pub conflict_misses: u64,
}

impl CacheStats {
    /// Counts a hit.
    #[inline]
    pub const fn record_hit(&mut self) {
        self.accesses += 1;
        self.hits += 1;
    }

    /// Counts a miss of the given kind.
    #[inline]
    pub const fn record_miss(&mut self, kind: MissKind) {
        self.accesses += 1;
        match kind {
            MissKind::Compulsory => self.compulsory_misses += 1,
            MissKind::Capacity => self.capacity_misses += 1,
            MissKind::Conflict => self.conflict_misses += 1,
        }
    }

    /// Total misses of every kind.
    pub const fn misses(&self) -> u64 {
        self.compulsory_misses + self.capacity_misses + self.conflict_misses
    }

    /// Derives the rate report from the counters.
    ///
    /// Every rate is 0 when its denominator is 0.
    pub fn report(&self) -> Report {
        let ratio = |num: u64, den: u64| if den == 0 { 0.0 } else { num as f64 / den as f64 };
        let misses = self.misses();
        Report {
            accesses: self.accesses,
            hit_rate: ratio(self.hits, self.accesses),
            miss_rate: ratio(misses, self.accesses),
            compulsory_rate: ratio(self.compulsory_misses, misses),
            capacity_rate: ratio(self.capacity_misses, misses),
            conflict_rate: ratio(self.conflict_misses, misses),
            counters: *self,
        }
    }
}

/// Layout of a printed report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled, one value per line.
    #[default]
    Verbose,
    /// All six values on one space-separated line.
    Compact,
}

impl OutputFormat {
    /// Maps the command-line flag: `0` is verbose, `1` is compact.
    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Verbose),
            1 => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Final rates of a simulation run.
///
/// Miss-kind rates are fractions of total misses, not of accesses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Total accesses.
    pub accesses: u64,
    /// `hits / accesses`.
    pub hit_rate: f64,
    /// `misses / accesses`.
    pub miss_rate: f64,
    /// `compulsory / misses`.
    pub compulsory_rate: f64,
    /// `capacity / misses`.
    pub capacity_rate: f64,
    /// `conflict / misses`.
    pub conflict_rate: f64,
    /// Raw counters the rates were derived from.
    pub counters: CacheStats,
}

impl Report {
    /// Renders the report in the given layout, without a trailing newline.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Compact => format!(
                "{} {:.4} {:.4} {:.4} {:.4} {:.4}",
                self.accesses,
                self.hit_rate,
                self.miss_rate,
                self.compulsory_rate,
                self.capacity_rate,
                self.conflict_rate
            ),
            OutputFormat::Verbose => {
                let line = |label: &str, rate: f64| {
                    format!("{label:<22}{rate:.4} ({:.2}%)", rate * 100.0)
                };
                [
                    "============ Cache Statistics ============".to_string(),
                    format!("{:<22}{}", "Total accesses:", self.accesses),
                    line("Hit rate:", self.hit_rate),
                    line("Miss rate:", self.miss_rate),
                    line("Compulsory misses:", self.compulsory_rate),
                    line("Capacity misses:", self.capacity_rate),
                    line("Conflict misses:", self.conflict_rate),
                    "==========================================".to_string(),
                ]
                .join("\n")
            }
        }
    }

    /// Serializes the report, counters included, as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures; none are expected for this plain structure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
