//! Conjunctive query evaluation
//!
//! A query is a whitespace-separated list of terms; a file matches when it
//! contains every term. Queries split on the same separators as documents.
//! Query terms are matched against index keys byte for byte: they are not
//! punctuation-stripped or case-folded here, so callers lowercase the query
//! before evaluating it.
//!
//! Results are deduplicated and in ascending `FilePath` order.

use crate::index::InvertedIndex;
use crate::tokenizer::is_separator;
use std::cmp::Ordering;
use textsearch_core::FilePath;

/// Outcome of evaluating a query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query had no terms; an interactive session should end
    Empty,
    /// Files containing every query term (possibly none)
    Results(Vec<FilePath>),
}

impl QueryOutcome {
    /// Matching files, empty for `QueryOutcome::Empty`
    pub fn into_results(self) -> Vec<FilePath> {
        match self {
            QueryOutcome::Empty => Vec::new(),
            QueryOutcome::Results(results) => results,
        }
    }
}

/// Split a query into its terms
pub fn parse_query(query: &[u8]) -> Vec<&[u8]> {
    query
        .split(|&b| is_separator(b))
        .filter(|term| !term.is_empty())
        .collect()
}

/// Evaluate a query against the index.
///
/// Returns `QueryOutcome::Empty` when the query has no terms. If any term is
/// missing from the index the result is empty without looking at the rest.
pub fn evaluate<Q: AsRef<[u8]> + ?Sized>(index: &InvertedIndex, query: &Q) -> QueryOutcome {
    let terms = parse_query(query.as_ref());
    let Some((first, rest)) = terms.split_first() else {
        return QueryOutcome::Empty;
    };

    let Some(postings) = index.lookup(first) else {
        return QueryOutcome::Results(Vec::new());
    };
    let mut acc = dedup_sorted(postings.as_slice());

    for term in rest {
        let Some(postings) = index.lookup(term) else {
            return QueryOutcome::Results(Vec::new());
        };
        if !acc.is_empty() {
            acc = intersect(&acc, postings.as_slice());
        }
    }

    QueryOutcome::Results(acc)
}

/// Files containing every term of `query`, in ascending order.
///
/// An empty query yields no files.
///
/// # Example
///
/// ```
/// use textsearch_search::{build_index, search};
/// # let (index, _titles) = build_index(Vec::new()).unwrap();
/// assert!(search(&index, "anything").is_empty());
/// ```
pub fn search<Q: AsRef<[u8]> + ?Sized>(index: &InvertedIndex, query: &Q) -> Vec<FilePath> {
    evaluate(index, query).into_results()
}

/// Intersect two sorted posting slices.
///
/// Both inputs must be in non-decreasing order; duplicates are allowed.
/// The output is strictly increasing.
pub fn intersect(a: &[FilePath], b: &[FilePath]) -> Vec<FilePath> {
    debug_assert!(a.windows(2).all(|w| w[0] <= w[1]), "left input unsorted");
    debug_assert!(b.windows(2).all(|w| w[0] <= w[1]), "right input unsorted");

    let mut out: Vec<FilePath> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if out.last() != Some(&a[i]) {
                    out.push(a[i].clone());
                }
                i += 1;
                j += 1;
            }
        }
    }
    out
}

fn dedup_sorted(postings: &[FilePath]) -> Vec<FilePath> {
    let mut out = postings.to_vec();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsearch_core::Term;

    fn fp(name: &str) -> FilePath {
        FilePath::from(name)
    }

    fn fps(names: &[&str]) -> Vec<FilePath> {
        names.iter().map(|n| fp(n)).collect()
    }

    fn cats_and_dogs() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.add_posting("cats".into(), fp("a.txt"));
        index.add_posting("and".into(), fp("a.txt"));
        index.add_posting("dogs".into(), fp("a.txt"));
        index.add_posting("dogs".into(), fp("b.txt"));
        index.add_posting("only".into(), fp("b.txt"));
        index
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(
            parse_query(b"  cats\tdogs \x0b\n"),
            vec![&b"cats"[..], &b"dogs"[..]]
        );
        assert!(parse_query(b"   ").is_empty());
        assert!(parse_query(b"").is_empty());
    }

    #[test]
    fn test_evaluate_empty_query() {
        let index = cats_and_dogs();
        assert_eq!(evaluate(&index, ""), QueryOutcome::Empty);
        assert_eq!(evaluate(&index, "   "), QueryOutcome::Empty);
        assert!(search(&index, "   ").is_empty());
    }

    #[test]
    fn test_single_term() {
        let index = cats_and_dogs();
        assert_eq!(search(&index, "dogs"), fps(&["a.txt", "b.txt"]));
        assert_eq!(search(&index, "cats"), fps(&["a.txt"]));
    }

    #[test]
    fn test_conjunction() {
        let index = cats_and_dogs();
        assert_eq!(search(&index, "cats dogs"), fps(&["a.txt"]));
        assert_eq!(search(&index, "dogs only"), fps(&["b.txt"]));
        assert!(search(&index, "cats only").is_empty());
    }

    #[test]
    fn test_missing_term_short_circuits() {
        let index = cats_and_dogs();
        assert_eq!(
            evaluate(&index, "missing"),
            QueryOutcome::Results(Vec::new())
        );
        assert!(search(&index, "dogs missing").is_empty());
        assert!(search(&index, "missing dogs").is_empty());
    }

    #[test]
    fn test_query_terms_are_not_normalized() {
        let index = cats_and_dogs();
        assert!(search(&index, "Dogs").is_empty());
        assert!(search(&index, "dogs,").is_empty());
    }

    #[test]
    fn test_invalid_utf8_query_matches_exact_bytes() {
        let mut index = cats_and_dogs();
        index.add_posting(Term::new(&b"caf\xff"[..]), fp("c.txt"));
        index.add_posting(Term::new(&b"caf\xfe"[..]), fp("d.txt"));

        assert_eq!(search(&index, &b"caf\xff"[..]), fps(&["c.txt"]));
        assert_eq!(search(&index, &b"caf\xfe"[..]), fps(&["d.txt"]));
        assert!(search(&index, "caf\u{FFFD}").is_empty());
    }

    #[test]
    fn test_repeated_query_term() {
        let index = cats_and_dogs();
        assert_eq!(search(&index, "dogs dogs"), fps(&["a.txt", "b.txt"]));
    }

    #[test]
    fn test_duplicate_postings_are_deduplicated() {
        let mut index = InvertedIndex::new();
        for _ in 0..3 {
            index.add_posting("word".into(), fp("a.txt"));
        }
        index.add_posting("word".into(), fp("b.txt"));
        index.add_posting("word".into(), fp("b.txt"));
        assert_eq!(search(&index, "word"), fps(&["a.txt", "b.txt"]));
    }

    #[test]
    fn test_intersect_merges_sorted_with_duplicates() {
        let a = fps(&["a", "a", "b", "d", "d", "e"]);
        let b = fps(&["a", "c", "d", "d", "d", "f"]);
        assert_eq!(intersect(&a, &b), fps(&["a", "d"]));
    }

    #[test]
    fn test_intersect_disjoint_and_empty() {
        assert!(intersect(&fps(&["a", "b"]), &fps(&["c", "d"])).is_empty());
        assert!(intersect(&[], &fps(&["a"])).is_empty());
        assert!(intersect(&fps(&["a"]), &[]).is_empty());
    }

    #[test]
    fn test_into_results() {
        assert!(QueryOutcome::Empty.into_results().is_empty());
        assert_eq!(
            QueryOutcome::Results(fps(&["a.txt"])).into_results(),
            fps(&["a.txt"])
        );
    }
}
