//! Splitting a concatenated text into documents.
use contracts::*;

/// Terminators recognised when none are given explicitly.
pub const DEFAULT_TERMINATORS: [char; 2] = ['$', '#'];

/// Document array and document count.
///
/// `da[r]` is the document holding the suffix of rank `r`. A terminator belongs
/// to the document it closes, and the next document opens at the first
/// non-terminator after it. A run of terminators, such as a final `#` right
/// after the last `$`, never forms a document of its own.
#[requires(text.len() == isa.len(), "`text` and `isa` have same length")]
#[ensures(ret.1 >= 1)]
pub fn document_array<C: PartialEq>(
    text: &[C],
    isa: &[usize],
    terminators: &[C],
) -> (Vec<usize>, usize) {
    let mut da = vec![0; text.len()];
    let mut doc = 0;
    let mut after_terminator = false;

    for (i, c) in text.iter().enumerate() {
        let is_terminator = terminators.contains(c);
        if after_terminator && !is_terminator {
            doc += 1;
        }
        da[isa[i]] = doc;
        after_terminator = is_terminator;
    }

    (da, doc + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays::{invert, suffix_array};

    fn da_of(s: &str) -> (Vec<usize>, usize) {
        let t = s.chars().collect::<Vec<_>>();
        let isa = invert(&suffix_array(&t));
        document_array(&t, &isa, &DEFAULT_TERMINATORS)
    }

    #[test]
    fn single_document() {
        assert_eq!(da_of("abaaba$"), (vec![0; 7], 1));
    }

    #[test]
    fn two_documents() {
        // SA = [5, 2, 0, 3, 1, 4]
        assert_eq!(da_of("ab$ac#"), (vec![1, 0, 0, 1, 0, 1], 2));
    }

    #[test]
    fn trailing_sentinel_joins_last_document() {
        let (da, docs) = da_of("gattacat$gattacgt$attcgt$#");
        assert_eq!(docs, 3);
        assert_eq!(
            da,
            vec![
                2, 2, 1, 0, 0, 1, 0, 0, 1, 2, 0, 2, 1, 0, 1, 2, 1, 2, 1, 0, 0, 1, 2, 0, 1, 2
            ]
        );
    }

    #[test]
    fn no_terminator_at_all() {
        assert_eq!(da_of("ba"), (vec![0, 0], 1));
    }

    #[test]
    fn custom_terminators() {
        let t = "ab%ab!".chars().collect::<Vec<_>>();
        let isa = invert(&suffix_array(&t));
        let (_, docs) = document_array(&t, &isa, &['%', '!']);
        assert_eq!(docs, 2);
        let (_, docs) = document_array(&t, &isa, &DEFAULT_TERMINATORS);
        assert_eq!(docs, 1);
    }
}
