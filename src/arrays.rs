//! Free-standing array derivations used by [`BwtSuite`](crate::BwtSuite).
//!
//! Every function here is the direct rendition of its definition: full suffix
//! comparisons, quadratic LCP/LCS scans and so on. They are meant for inputs
//! small enough to be checked by hand.
use contracts::*;

/// `true` if `v` holds every value of `0..v.len()` exactly once.
pub fn is_permutation(v: &[usize]) -> bool {
    let mut seen = vec![false; v.len()];
    v.iter()
        .all(|&x| x < seen.len() && !std::mem::replace(&mut seen[x], true))
}

/// Construct the suffix array by sorting `(suffix, offset)` pairs.
///
/// Two suffixes of the same text never compare equal, so the offsets decide
/// nothing and the order is total.
#[ensures(ret.len() == text.len())]
#[ensures(is_permutation(&ret), "suffix array is a permutation of 0..n")]
pub fn suffix_array<C: Ord>(text: &[C]) -> Vec<usize> {
    let mut pairs = (0..text.len())
        .map(|i| (&text[i..], i))
        .collect::<Vec<_>>();
    pairs.sort();
    pairs.into_iter().map(|(_, i)| i).collect()
}

/// Inverse permutation: `invert(p)[p[i]] == i`.
#[requires(is_permutation(perm), "`perm` is a permutation")]
pub fn invert(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; perm.len()];
    perm.iter().enumerate().for_each(|(i, &p)| inverse[p] = i);
    inverse
}

/// Inverse permutation through sorting: pair every target with its source,
/// sort by target and read the sources back in that order.
#[requires(is_permutation(perm), "`perm` is a permutation")]
#[ensures(ret == invert(perm))]
pub fn invert_by_sort(perm: &[usize]) -> Vec<usize> {
    let mut pairs = perm
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, i))
        .collect::<Vec<_>>();
    pairs.sort_unstable();
    pairs.into_iter().map(|(_, i)| i).collect()
}

/// `values` read in the order given by `order`: `ret[i] == values[order[i]]`.
#[requires(values.len() == order.len(), "`values` and `order` have same length")]
pub fn permute<T: Copy>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&j| values[j]).collect()
}

/// LF and FL mappings.
///
/// `LF[i]` is the rank of the suffix that starts one position left of
/// `SA[i]` (cyclically). FL is recovered by sorting the LF pairs.
#[requires(sa.len() == isa.len(), "`sa` and `isa` have same length")]
pub fn lf_fl_from_sa_isa(sa: &[usize], isa: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let n = sa.len();
    let lf = sa.iter().map(|&s| isa[(s + n - 1) % n]).collect::<Vec<_>>();
    let fl = invert_by_sort(&lf);
    (lf, fl)
}

/// `Phi[j]` is the text offset of the suffix ranked just before the suffix at
/// `j`, wrapping from the smallest rank to the largest.
#[requires(sa.len() == isa.len(), "`sa` and `isa` have same length")]
pub fn phi_from_sa_isa(sa: &[usize], isa: &[usize]) -> Vec<usize> {
    let n = sa.len();
    isa.iter().map(|&rank| sa[(rank + n - 1) % n]).collect()
}

fn common_prefix_len<C: PartialEq>(a: &[C], b: &[C]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len<C: PartialEq>(a: &[C], b: &[C]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// LCP array; comparisons stop at the end of the text, they never wrap.
#[requires(text.len() == sa.len(), "`text` and `sa` have same length")]
pub fn lcp_from_text_sa<C: PartialEq>(text: &[C], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for (i, w) in sa.windows(2).enumerate() {
        lcp[i + 1] = common_prefix_len(&text[w[0]..], &text[w[1]..]);
    }
    lcp
}

/// LCS array: longest common suffix of each pair of adjacent BWM rows.
pub fn lcs_from_bwm<C: PartialEq>(bwm: &[Vec<C>]) -> Vec<usize> {
    let mut lcs = vec![0; bwm.len()];
    for (i, w) in bwm.windows(2).enumerate() {
        lcs[i + 1] = common_suffix_len(&w[0], &w[1]);
    }
    lcs
}

/// Burrows-Wheeler matrix: the rotation starting at `SA[i]` for every rank.
#[requires(text.len() == sa.len(), "`text` and `sa` have same length")]
pub fn rotations<C: Copy>(text: &[C], sa: &[usize]) -> Vec<Vec<C>> {
    sa.iter()
        .map(|&s| text[s..].iter().chain(&text[..s]).copied().collect())
        .collect()
}

/// Last column of the matrix, i.e. the BWT.
pub fn last_column<C: Copy>(bwm: &[Vec<C>]) -> Vec<C> {
    bwm.iter().filter_map(|row| row.last().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn suffix_array_abaaba() {
        assert_eq!(suffix_array(&chars("abaaba$")), vec![6, 5, 2, 3, 0, 4, 1]);
    }

    #[test]
    fn suffix_array_mississippi() {
        assert_eq!(
            suffix_array(&chars("mississippi$")),
            vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
        );
    }

    #[test]
    fn invert_and_sort_agree() {
        let perm = vec![4, 6, 2, 3, 5, 1, 0];
        assert_eq!(invert(&perm), vec![6, 5, 2, 3, 0, 4, 1]);
        assert_eq!(invert_by_sort(&perm), invert(&perm));
    }

    #[test]
    #[should_panic]
    fn invert_rejects_duplicates() {
        invert(&[0, 1, 1]);
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[2, 0, 0]));
        assert!(!is_permutation(&[0, 3, 1]));
    }

    #[test]
    fn permute_reads_in_order() {
        let lcp = vec![0, 0, 1, 1, 3, 0, 2];
        let isa = vec![4, 6, 2, 3, 5, 1, 0];
        assert_eq!(permute(&lcp, &isa), vec![3, 2, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn sa_permutation_into_text_order() {
        // position (SA[i] - 1) mod n receives rank i
        let sa = suffix_array(&chars("abaaba$"));
        let n = sa.len();
        let mut perm = vec![0; n];
        for (i, &s) in sa.iter().enumerate() {
            perm[(s + n - 1) % n] = i;
        }
        assert_eq!(perm, vec![6, 2, 3, 5, 1, 0, 4]);
    }

    #[test]
    fn lf_fl_abaaba() {
        // i F  L LF[i]
        // 0 $  a     1
        // 1 a  b     5
        // 2 a  b     6
        // 3 a  a     2
        // 4 a  $     0
        // 5 b  a     3
        // 6 b  a     4
        let sa = vec![6, 5, 2, 3, 0, 4, 1];
        let isa = invert(&sa);
        let (lf, fl) = lf_fl_from_sa_isa(&sa, &isa);
        assert_eq!(lf, vec![1, 5, 6, 2, 0, 3, 4]);
        assert_eq!(fl, vec![4, 0, 3, 5, 6, 1, 2]);
    }

    #[test]
    fn phi_abaaba() {
        let sa = vec![6, 5, 2, 3, 0, 4, 1];
        let isa = invert(&sa);
        let phi = phi_from_sa_isa(&sa, &isa);
        assert_eq!(phi, vec![3, 4, 5, 2, 0, 6, 1]);
        assert_eq!(invert(&phi), vec![4, 6, 3, 0, 1, 2, 5]);
    }

    #[test]
    fn lcp_does_not_wrap() {
        let t = chars("abaaba$");
        let sa = suffix_array(&t);
        assert_eq!(lcp_from_text_sa(&t, &sa), vec![0, 0, 1, 1, 3, 0, 2]);
    }

    #[test]
    fn lcs_compares_rotations_backwards() {
        let t = chars("abaaba$");
        let bwm = rotations(&t, &suffix_array(&t));
        assert_eq!(lcs_from_bwm(&bwm), vec![0, 0, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn matrix_and_last_column() {
        let t = chars("abaaba$");
        let bwm = rotations(&t, &suffix_array(&t));
        let rows = bwm
            .iter()
            .map(|r| r.iter().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec!["$abaaba", "a$abaab", "aaba$ab", "aba$aba", "abaaba$", "ba$abaa", "baaba$a"]
        );
        assert_eq!(last_column(&bwm).iter().collect::<String>(), "abba$aa");
    }

    #[test]
    fn single_symbol() {
        let t = vec!['$'];
        let sa = suffix_array(&t);
        assert_eq!(sa, vec![0]);
        assert_eq!(lcp_from_text_sa(&t, &sa), vec![0]);
        assert_eq!(lcs_from_bwm(&rotations(&t, &sa)), vec![0]);
        assert_eq!(lf_fl_from_sa_isa(&sa, &sa), (vec![0], vec![0]));
    }

    use proptest::collection::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]
        #[test]
        fn sorted_inversion_matches_scatter(perm in vec(any::<u16>(), 0..64)
            .prop_map(|keys| {
                let mut p = (0..keys.len()).collect::<Vec<_>>();
                p.sort_by_key(|&i| keys[i]);
                p
            })) {
            prop_assert_eq!(invert_by_sort(&perm), invert(&perm));
        }

        #[test]
        fn suffix_array_is_sorted(mut s in vec(1u8..4, 0..48)) {
            s.push(0);
            let sa = suffix_array(&s);
            prop_assert!(sa.windows(2).all(|w| s[w[0]..] < s[w[1]..]));
        }
    }
}
