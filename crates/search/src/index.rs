//! Inverted index and title map
//!
//! This module provides:
//! - PostingList: files containing a term, in build order
//! - InvertedIndex: term -> PostingList
//! - TitleMap: file -> article title
//! - IndexStats: summary of a build
//!
//! Both maps are populated once by the indexer and are read-only afterwards;
//! mutation is crate-private.
//!
//! # Ordering
//!
//! Files are indexed in sorted order and postings are appended, so every
//! posting list is non-decreasing in `FilePath` order. A file appears once
//! per occurrence of the term, so consecutive duplicates are expected.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use textsearch_core::{FilePath, Term, Title};

// ============================================================================
// PostingList
// ============================================================================

/// Files containing a term, one entry per occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostingList {
    entries: Vec<FilePath>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { entries: vec![] }
    }

    /// Append an occurrence
    pub(crate) fn add(&mut self, path: FilePath) {
        self.entries.push(path);
    }

    /// Number of occurrences, including repeats within a file
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in posting order
    pub fn as_slice(&self) -> &[FilePath] {
        &self.entries
    }

    /// Iterate entries in posting order
    pub fn iter(&self) -> std::slice::Iter<'_, FilePath> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a FilePath;
    type IntoIter = std::slice::Iter<'a, FilePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Mapping from normalized term to the files containing it
///
/// Terms are kept in a `BTreeMap` so iteration and serialization order is
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: BTreeMap<Term, PostingList>,
}

impl InvertedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        InvertedIndex {
            postings: BTreeMap::new(),
        }
    }

    /// Record one occurrence of `term` in `path`
    pub(crate) fn add_posting(&mut self, term: Term, path: FilePath) {
        self.postings.entry(term).or_default().add(path);
    }

    /// Lookup the posting list for a term
    ///
    /// Matching is exact byte equality; callers are responsible for
    /// normalization.
    pub fn lookup<T: AsRef<[u8]> + ?Sized>(&self, term: &T) -> Option<&PostingList> {
        self.postings.get(term.as_ref())
    }

    /// Check whether a term is indexed
    pub fn contains_term<T: AsRef<[u8]> + ?Sized>(&self, term: &T) -> bool {
        self.postings.contains_key(term.as_ref())
    }

    /// Iterate indexed terms in sorted order
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.postings.keys()
    }

    /// Iterate (term, posting list) pairs in term order
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &PostingList)> {
        self.postings.iter()
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if no term has been indexed
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Total occurrences across all posting lists
    pub fn total_postings(&self) -> usize {
        self.postings.values().map(PostingList::len).sum()
    }

    /// Summarize this index together with its title map
    pub fn stats(&self, titles: &TitleMap) -> IndexStats {
        IndexStats {
            documents: titles.len(),
            terms: self.len(),
            postings: self.total_postings(),
        }
    }
}

// ============================================================================
// TitleMap
// ============================================================================

/// Mapping from indexed file to its article title
///
/// Every indexed file has an entry, including files that produced no terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleMap {
    titles: BTreeMap<FilePath, Title>,
}

impl TitleMap {
    /// Create a new empty title map
    pub fn new() -> Self {
        TitleMap {
            titles: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, path: FilePath, title: Title) {
        self.titles.insert(path, title);
    }

    /// Title of an indexed file
    pub fn get(&self, path: &FilePath) -> Option<&Title> {
        self.titles.get(path)
    }

    /// Check whether a file was indexed
    pub fn contains(&self, path: &FilePath) -> bool {
        self.titles.contains_key(path)
    }

    /// Iterate (file, title) pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&FilePath, &Title)> {
        self.titles.iter()
    }

    /// Number of indexed files
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if no file has been indexed
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Counters describing a completed build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Indexed files
    pub documents: usize,
    /// Distinct terms
    pub terms: usize,
    /// Term occurrences across all files
    pub postings: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents, {} terms, {} postings",
            self.documents, self.terms, self.postings
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
