//! Chart series generation
//!
//! A result chart is twelve points, one per calendar month in order, each
//! holding a value drawn from a [`ValueSource`]. The default source is
//! unseeded randomness; tests and the `--seed` CLI flag plug in
//! deterministic sources instead.

use std::fmt;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Range every chart value falls in
pub const VALUE_RANGE: Range<u32> = 60..100;

/// Calendar month labels used on the chart's x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months, January first
    pub fn all() -> &'static [Month; 12] {
        &[
            Month::Jan,
            Month::Feb,
            Month::Mar,
            Month::Apr,
            Month::May,
            Month::Jun,
            Month::Jul,
            Month::Aug,
            Month::Sep,
            Month::Oct,
            Month::Nov,
            Month::Dec,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One point on the result chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub month: Month,
    pub value: u32,
}

/// Exactly twelve points, Jan through Dec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChartSeries(Vec<ChartPoint>);

impl ChartSeries {
    /// Draw a fresh series from `source`
    pub fn generate(source: &mut dyn ValueSource) -> Self {
        let points = Month::all()
            .iter()
            .map(|&month| ChartPoint {
                month,
                value: source.next_value(VALUE_RANGE),
            })
            .collect();
        Self(points)
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.0
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|p| p.value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Supplies chart values
pub trait ValueSource: Send {
    /// Next value, which must lie in `range`
    fn next_value(&mut self, range: Range<u32>) -> u32;
}

/// Unseeded randomness; every draw is independent and uniform
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl ValueSource for RandomSource {
    fn next_value(&mut self, range: Range<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Reproducible randomness from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for SeededSource {
    fn next_value(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside the requested range wrap into it.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl ValueSource for SequenceSource {
    fn next_value(&mut self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start).max(1);
        let Some(&raw) = self.values.get(self.pos % self.values.len().max(1)) else {
            return range.start;
        };
        self.pos += 1;
        if range.contains(&raw) {
            raw
        } else {
            range.start + raw.wrapping_sub(range.start) % span
        }
    }
}
