//! The BWT suite: every array derived once from a terminated text.
use crate::arrays::{
    invert, last_column, lcp_from_text_sa, lcs_from_bwm, lf_fl_from_sa_isa, permute,
    phi_from_sa_isa, rotations, suffix_array,
};
use crate::document::{document_array, DEFAULT_TERMINATORS};
use crate::threshold::{thresholds_by_symbol, Marker};
use contracts::*;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Why a text cannot be turned into a [`BwtSuite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    Empty,
    /// The character at `position` is not greater than the last character.
    TerminatorNotMinimal { position: usize },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Empty => write!(f, "text is empty"),
            TextError::TerminatorNotMinimal { position } => write!(
                f,
                "last character must be smaller than every other character, offset {} is not greater",
                position
            ),
        }
    }
}

impl Error for TextError {}

fn check_text(text: &[char]) -> Result<(), TextError> {
    let (&last, rest) = text.split_last().ok_or(TextError::Empty)?;
    match rest.iter().position(|&c| c <= last) {
        Some(position) => Err(TextError::TerminatorNotMinimal { position }),
        None => Ok(()),
    }
}

fn is_terminated(text: &[char]) -> bool {
    check_text(text).is_ok()
}

/// A maximal unique match: the half-open SA range `start..end`, holding one
/// suffix from each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mum {
    pub start: usize,
    pub end: usize,
}

impl Mum {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn ranks(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Mum> for (usize, usize) {
    fn from(m: Mum) -> Self {
        (m.start, m.end)
    }
}

/// SA, ISA, BWT, LCP, LCS and friends for one text.
///
/// All arrays are computed in [`BwtSuite::with_terminators`] and never change
/// afterwards. Arrays indexed by rank follow SA order; `isa`, `plcp`, `plcs`,
/// `phi` and `phiinv` are indexed by text offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtSuite {
    text: Vec<char>,
    sa: Vec<usize>,
    isa: Vec<usize>,
    da: Vec<usize>,
    num_docs: usize,
    alphabet: Vec<char>,
    bwm: Vec<Vec<char>>,
    bwt: Vec<char>,
    lcp: Vec<usize>,
    lcs: Vec<usize>,
    plcp: Vec<usize>,
    plcs: Vec<usize>,
    lf: Vec<usize>,
    fl: Vec<usize>,
    phi: Vec<usize>,
    phiinv: Vec<usize>,
    thresholds: BTreeMap<char, Vec<Marker>>,
}

impl BwtSuite {
    /// Build the suite with `$` and `#` as document terminators.
    ///
    /// # Panics
    /// If `text` is empty or its last character is not strictly smaller than
    /// all others. Use [`BwtSuite::try_new`] for unchecked input.
    pub fn new(text: &str) -> Self {
        Self::from_chars(text.chars().collect())
    }

    pub fn from_chars(text: Vec<char>) -> Self {
        Self::with_terminators(text, &DEFAULT_TERMINATORS)
    }

    /// Same as [`BwtSuite::new`], reporting a bad text instead of panicking.
    pub fn try_new(text: &str) -> Result<Self, TextError> {
        let text = text.chars().collect::<Vec<_>>();
        check_text(&text)?;
        Ok(Self::from_chars(text))
    }

    /// Build the suite; `terminators` only decide where documents end.
    #[requires(is_terminated(&text), "last character is smaller than all others")]
    pub fn with_terminators(text: Vec<char>, terminators: &[char]) -> Self {
        let sa = suffix_array(&text);
        let isa = invert(&sa);
        let (da, num_docs) = document_array(&text, &isa, terminators);

        let alphabet = text
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        let bwm = rotations(&text, &sa);
        let bwt = last_column(&bwm);

        let lcp = lcp_from_text_sa(&text, &sa);
        let lcs = lcs_from_bwm(&bwm);
        let plcp = permute(&lcp, &isa);
        let plcs = permute(&lcs, &isa);

        let (lf, fl) = lf_fl_from_sa_isa(&sa, &isa);
        let phi = phi_from_sa_isa(&sa, &isa);
        let phiinv = invert(&phi);

        let thresholds = thresholds_by_symbol(&alphabet, &bwt, &lcp);

        BwtSuite {
            text,
            sa,
            isa,
            da,
            num_docs,
            alphabet,
            bwm,
            bwt,
            lcp,
            lcs,
            plcp,
            plcs,
            lf,
            fl,
            phi,
            phiinv,
            thresholds,
        }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: a suite needs at least the terminator.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    pub fn isa(&self) -> &[usize] {
        &self.isa
    }

    /// Document of each suffix, by rank.
    pub fn da(&self) -> &[usize] {
        &self.da
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Distinct characters of the text in ascending order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn bwm(&self) -> &[Vec<char>] {
        &self.bwm
    }

    pub fn bwt(&self) -> &[char] {
        &self.bwt
    }

    pub fn bwt_string(&self) -> String {
        self.bwt.iter().collect()
    }

    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    pub fn lcs(&self) -> &[usize] {
        &self.lcs
    }

    pub fn plcp(&self) -> &[usize] {
        &self.plcp
    }

    pub fn plcs(&self) -> &[usize] {
        &self.plcs
    }

    pub fn lf(&self) -> &[usize] {
        &self.lf
    }

    pub fn fl(&self) -> &[usize] {
        &self.fl
    }

    pub fn phi(&self) -> &[usize] {
        &self.phi
    }

    pub fn phiinv(&self) -> &[usize] {
        &self.phiinv
    }

    pub fn thresholds(&self) -> &BTreeMap<char, Vec<Marker>> {
        &self.thresholds
    }

    /// The suffix of rank `rank` as a string.
    pub fn suffix(&self, rank: usize) -> String {
        self.text[self.sa[rank]..].iter().collect()
    }

    fn is_mum(&self, ranks: Range<usize>) -> bool {
        let inner_min = match self.lcp[ranks.start + 1..ranks.end].iter().min() {
            Some(&m) => m,
            None => return false,
        };
        let lcp_interval = inner_min > self.lcp[ranks.start] && inner_min > self.lcp[ranks.end];

        let window = &self.bwt[ranks.clone()];
        let left_maximal = window.iter().any(|&c| c != window[0]);

        let docs = self.da[ranks].iter().collect::<BTreeSet<_>>();
        let one_per_doc = docs.len() == self.num_docs;

        lcp_interval && left_maximal && one_per_doc
    }

    /// Maximal unique matches, in SA order.
    ///
    /// Each is a window of `num_docs` consecutive ranks whose inner LCPs all
    /// exceed the LCPs at both of its borders, whose BWT characters are not
    /// all equal and which takes one suffix from every document. Needs at
    /// least two documents.
    #[ensures(ret.iter().all(|m| m.len() == self.num_docs))]
    pub fn find_mums(&self) -> Vec<Mum> {
        let n = self.len();
        let k = self.num_docs;
        if k < 2 || n <= k {
            return vec![];
        }

        (0..n - k)
            .filter(|&i| self.is_mum(i..i + k))
            .map(|i| Mum { start: i, end: i + k })
            .collect()
    }
}
