//! Keyword search over a curriculum track.
//!
//! The index maps lowercase tokens to the entries containing them. Entries are
//! numbered in curriculum order, so intersecting posting lists yields hits in
//! reading order without a sort.

use crate::core::catalog::Track;
use crate::core::render;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Section,
    Lesson,
    Subsection,
}

/// Address and label of one searchable entry. Indices are 1-based; `lesson`
/// and `subsection` are absent for coarser entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub kind: HitKind,
    pub section: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<usize>,
    pub title: &'static str,
}

impl SearchHit {
    pub fn address(&self) -> String {
        match (self.lesson, self.subsection) {
            (Some(l), Some(s)) => format!("{}.{}.{}", self.section, l, s),
            (Some(l), None) => format!("{}.{}", self.section, l),
            _ => self.section.to_string(),
        }
    }
}

pub struct SearchIndex {
    entries: Vec<SearchHit>,
    postings: FxHashMap<String, Vec<usize>>,
}

pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '#' || c == '+'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
}

impl SearchIndex {
    pub fn build(track: Track) -> Self {
        let mut index = SearchIndex {
            entries: Vec::new(),
            postings: FxHashMap::default(),
        };
        for (si, section) in track.sections().iter().enumerate() {
            index.add(
                SearchHit {
                    kind: HitKind::Section,
                    section: si + 1,
                    lesson: None,
                    subsection: None,
                    title: section.title,
                },
                &[section.title, section.description],
            );
            for (li, lesson) in section.lessons.iter().enumerate() {
                index.add(
                    SearchHit {
                        kind: HitKind::Lesson,
                        section: si + 1,
                        lesson: Some(li + 1),
                        subsection: None,
                        title: lesson.title,
                    },
                    &[lesson.title, lesson.description],
                );
                for (ni, sub) in lesson.sections.iter().enumerate() {
                    let text = render::html_to_text(sub.explanation);
                    index.add(
                        SearchHit {
                            kind: HitKind::Subsection,
                            section: si + 1,
                            lesson: Some(li + 1),
                            subsection: Some(ni + 1),
                            title: sub.title,
                        },
                        &[sub.title, text.as_str()],
                    );
                }
            }
        }
        index
    }

    fn add(&mut self, hit: SearchHit, texts: &[&str]) {
        let id = self.entries.len();
        self.entries.push(hit);
        let mut seen = FxHashSet::default();
        for text in texts {
            for token in tokenize(text) {
                if seen.insert(token.clone()) {
                    self.postings.entry(token).or_default().push(id);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries containing every token of `query`. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&SearchHit> {
        let tokens: Vec<String> = tokenize(query).collect();
        if tokens.is_empty() {
            return Vec::new();
        }
        let mut lists = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.postings.get(token) {
                Some(ids) => lists.push(ids.as_slice()),
                None => return Vec::new(),
            }
        }
        lists.sort_by_key(|l| l.len());
        let (shortest, rest) = match lists.split_first() {
            Some((s, r)) => (*s, r),
            None => return Vec::new(),
        };
        shortest
            .iter()
            .filter(|&&id| rest.iter().all(|l| l.binary_search(&id).is_ok()))
            .map(|&id| &self.entries[id])
            .collect()
    }
}
