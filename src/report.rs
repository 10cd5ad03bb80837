//! Plain-text dump of a [`BwtSuite`].
use crate::suite::BwtSuite;
use std::fmt;

/// Labelled listing of every array of a suite, optionally followed by its
/// MUMs and thresholds.
///
/// ```
/// use bwt_suite::{BwtSuite, Report};
///
/// let suite = BwtSuite::new("ab$ac#");
/// let text = Report::new(&suite).show_mums(true).to_string();
/// assert!(text.contains("MUM 1: SA[2:4] (length 2)"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    suite: &'a BwtSuite,
    show_mums: bool,
    show_thresholds: bool,
}

impl<'a> Report<'a> {
    pub fn new(suite: &'a BwtSuite) -> Self {
        Report {
            suite,
            show_mums: false,
            show_thresholds: false,
        }
    }

    /// List MUMs; ignored unless the text has two or more documents.
    pub fn show_mums(mut self, yes: bool) -> Self {
        self.show_mums = yes;
        self
    }

    pub fn show_thresholds(mut self, yes: bool) -> Self {
        self.show_thresholds = yes;
        self
    }

    fn write_mums(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.suite;
        writeln!(f)?;
        writeln!(f, "Maximal Unique Matches (MUMs):")?;

        let mums = s.find_mums();
        if mums.is_empty() {
            return writeln!(f, "  No MUMs found");
        }
        for (i, m) in mums.iter().enumerate() {
            writeln!(
                f,
                "  MUM {}: SA[{}:{}] (length {})",
                i + 1,
                m.start,
                m.end,
                m.len()
            )?;
            for rank in m.ranks() {
                writeln!(f, "    SA[{}] = {}: {}", rank, s.sa()[rank], s.suffix(rank))?;
            }
        }
        Ok(())
    }

    fn write_thresholds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Thresholds:")?;
        for (c, markers) in self.suite.thresholds() {
            let symbols = markers.iter().map(|m| m.symbol()).collect::<Vec<_>>();
            writeln!(f, "  {}: {:?}", c, symbols)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.suite;
        writeln!(f, "Text: {}", s.text().iter().collect::<String>())?;
        writeln!(f, "Length: {}", s.len())?;

        let arrays: [(&str, &[usize]); 10] = [
            ("Suffix Array (SA)", s.sa()),
            ("Inverse Suffix Array (ISA)", s.isa()),
            ("Longest Common Prefix (LCP)", s.lcp()),
            ("Longest Common Suffix (LCS)", s.lcs()),
            ("Permuted LCP (PLCP)", s.plcp()),
            ("Permuted LCS (PLCS)", s.plcs()),
            ("LF mapping", s.lf()),
            ("FL mapping", s.fl()),
            ("Phi (φ)", s.phi()),
            ("Phi-inverse (φ⁻¹)", s.phiinv()),
        ];
        for (i, (label, values)) in arrays.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}:", label)?;
            writeln!(f, "{:?}", values)?;
            // BWT goes right after ISA
            if i == 1 {
                writeln!(f)?;
                writeln!(f, "Burrows-Wheeler Transform (BWT):")?;
                writeln!(f, "{}", s.bwt_string())?;
            }
        }

        if self.show_mums && s.num_docs() > 1 {
            self.write_mums(f)?;
        }
        if self.show_thresholds {
            self.write_thresholds(f)?;
        }
        Ok(())
    }
}
