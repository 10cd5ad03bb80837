//! Thresholds for LF walks that can only scan the BWT sequentially.
//!
//! When the walk lands on a row whose BWT character is not the one it needs,
//! it has to jump to a neighbouring run of that character. Every row gets a
//! [`Marker`] per character telling which run keeps the longer match.
use contracts::*;
use std::cmp::Ordering::*;
use std::collections::BTreeMap;
use std::fmt;
use std::iter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The row holds the character itself.
    Run,
    /// Jump down to the next run.
    Descend,
    /// Jump up to the previous run.
    Ascend,
    /// Both runs are equally good.
    Tie,
}

impl Marker {
    pub fn symbol(self) -> char {
        match self {
            Marker::Run => ' ',
            Marker::Descend => 'v',
            Marker::Ascend => '^',
            Marker::Tie => '=',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Markers for one gap between two runs, plus their run-length summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapThresholds {
    /// One marker per row of the gap.
    pub markers: Vec<Marker>,
    /// Run-length encoding of the classification of every LCP in the gap,
    /// including the one at the closing run.
    pub runs: Vec<(Marker, usize)>,
}

fn running_min<'a>(values: impl Iterator<Item = &'a usize>) -> Vec<usize> {
    values
        .scan(usize::MAX, |m, &v| {
            *m = (*m).min(v);
            Some(*m)
        })
        .collect()
}

fn run_lengths(markers: &[Marker]) -> Vec<(Marker, usize)> {
    let mut runs: Vec<(Marker, usize)> = Vec::new();
    for &m in markers {
        if let Some((prev, count)) = runs.last_mut() {
            if *prev == m {
                *count += 1;
                continue;
            }
        }
        runs.push((m, 1));
    }
    runs
}

/// Classify a gap given the LCP values from its first row up to and including
/// the first row of the run that closes it.
///
/// At each position the minimum LCP seen so far from the top is compared with
/// the minimum from there to the bottom: equal is a tie, a smaller top minimum
/// means descend, a smaller bottom minimum means ascend. The top minimum only
/// shrinks and the bottom minimum only grows, so the classification is always
/// some `^* =* v*` and never has more than three runs.
#[ensures(ret.runs.len() <= 3, "a gap classifies into at most three runs")]
#[ensures(ret.markers.len() == lcps.len().saturating_sub(1))]
pub fn classify_gap(lcps: &[usize]) -> GapThresholds {
    let forward = running_min(lcps.iter());
    let mut backward = running_min(lcps.iter().rev());
    backward.reverse();

    let mut markers = forward
        .iter()
        .zip(&backward)
        .map(|(fw, bw)| match fw.cmp(bw) {
            Equal => Marker::Tie,
            Less => Marker::Descend,
            Greater => Marker::Ascend,
        })
        .collect::<Vec<_>>();

    let runs = run_lengths(&markers);
    markers.pop();

    GapThresholds { markers, runs }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WalkState {
    BeforeFirstRun,
    InRun,
    /// LCP values collected since the last run ended.
    InGap(Vec<usize>),
}

/// Row-by-row threshold computation for one target character.
///
/// Rows above the first run descend, rows inside a run are plain, rows in a
/// gap are settled by [`classify_gap`] once the closing run is reached, and
/// rows below the last run ascend.
#[derive(Debug, Clone)]
pub struct ThresholdWalk<C> {
    target: C,
    state: WalkState,
    markers: Vec<Marker>,
}

impl<C: PartialEq> ThresholdWalk<C> {
    pub fn new(target: C) -> Self {
        ThresholdWalk {
            target,
            state: WalkState::BeforeFirstRun,
            markers: vec![],
        }
    }

    /// Feed the next BWT row: its character and its LCP value.
    pub fn step(&mut self, symbol: C, lcp: usize) {
        let hit = symbol == self.target;

        self.state = match std::mem::replace(&mut self.state, WalkState::InRun) {
            WalkState::BeforeFirstRun if hit => {
                self.markers.push(Marker::Run);
                WalkState::InRun
            }
            WalkState::BeforeFirstRun => {
                self.markers.push(Marker::Descend);
                WalkState::BeforeFirstRun
            }
            WalkState::InRun if hit => {
                self.markers.push(Marker::Run);
                WalkState::InRun
            }
            WalkState::InRun => WalkState::InGap(vec![lcp]),
            WalkState::InGap(mut lcps) => {
                lcps.push(lcp);
                if hit {
                    self.markers.extend(classify_gap(&lcps).markers);
                    self.markers.push(Marker::Run);
                    WalkState::InRun
                } else {
                    WalkState::InGap(lcps)
                }
            }
        };
    }

    /// Rows still waiting in an open gap have no run below them and ascend.
    pub fn finish(mut self) -> Vec<Marker> {
        if let WalkState::InGap(lcps) = &self.state {
            self.markers
                .extend(iter::repeat(Marker::Ascend).take(lcps.len()));
        }
        self.markers
    }
}

/// Threshold markers of `target` for every row.
#[requires(bwt.len() == lcp.len(), "`bwt` and `lcp` have same length")]
#[ensures(ret.len() == bwt.len())]
pub fn thresholds_for<C: PartialEq + Copy>(target: C, bwt: &[C], lcp: &[usize]) -> Vec<Marker> {
    let mut walk = ThresholdWalk::new(target);
    bwt.iter().zip(lcp).for_each(|(&c, &l)| walk.step(c, l));
    walk.finish()
}

/// [`thresholds_for`] every character of `alphabet`.
pub fn thresholds_by_symbol<C: Ord + Copy>(
    alphabet: &[C],
    bwt: &[C],
    lcp: &[usize],
) -> BTreeMap<C, Vec<Marker>> {
    alphabet
        .iter()
        .map(|&c| (c, thresholds_for(c, bwt, lcp)))
        .collect()
}
