//! Ordered clause selection.
//!
//! Templates declare their optional clauses as static slices. Selection walks
//! a slice in declaration order and keeps every candidate whose condition
//! holds, so the caller's field-assignment order can never reorder a document.

use super::condition::Condition;
use super::form::FormData;

/// Something selectable: an id for audit trails and a gate.
pub trait Candidate {
    fn id(&self) -> &'static str;
    fn condition(&self) -> &Condition;
}

/// Fixed bullet text gated by a condition.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub id: &'static str,
    pub when: Condition,
    pub text: &'static str,
}

impl Bullet {
    pub const fn new(id: &'static str, when: Condition, text: &'static str) -> Self {
        Self { id, when, text }
    }

    /// Bullet shown when the checkbox of the same key is ticked.
    pub const fn on_flag(key: &'static str, text: &'static str) -> Self {
        Self::new(key, Condition::flag(key), text)
    }

    pub const fn always(id: &'static str, text: &'static str) -> Self {
        Self::new(id, Condition::ALWAYS, text)
    }
}

impl Candidate for Bullet {
    fn id(&self) -> &'static str {
        self.id
    }

    fn condition(&self) -> &Condition {
        &self.when
    }
}

/// Clause whose output is generated from the form values.
pub struct Clause<T> {
    pub id: &'static str,
    pub when: Condition,
    pub emit: fn(&FormData) -> T,
}

impl<T> Clause<T> {
    pub const fn new(id: &'static str, when: Condition, emit: fn(&FormData) -> T) -> Self {
        Self { id, when, emit }
    }
}

impl<T> Candidate for Clause<T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn condition(&self) -> &Condition {
        &self.when
    }
}

pub fn select_bullets(candidates: &[Bullet], data: &FormData) -> Vec<String> {
    candidates
        .iter()
        .filter(|bullet| bullet.when.holds(data))
        .map(|bullet| bullet.text.to_string())
        .collect()
}

pub fn select<T>(candidates: &[Clause<T>], data: &FormData) -> Vec<T> {
    candidates
        .iter()
        .filter(|clause| clause.when.holds(data))
        .map(|clause| (clause.emit)(data))
        .collect()
}

/// Ids of the candidates that fire for `data`, in declaration order.
pub fn selected_ids<C: Candidate>(candidates: &[C], data: &FormData) -> Vec<&'static str> {
    candidates
        .iter()
        .filter(|candidate| candidate.condition().holds(data))
        .map(Candidate::id)
        .collect()
}

/// Maps the value of one enum field to a fixed paragraph.
///
/// An unmatched value yields no paragraph unless `otherwise` is set.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub key: &'static str,
    pub arms: &'static [(&'static str, &'static str)],
    pub otherwise: Option<&'static str>,
}

impl Branch {
    pub const fn new(key: &'static str, arms: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            key,
            arms,
            otherwise: None,
        }
    }

    pub const fn with_otherwise(mut self, text: &'static str) -> Self {
        self.otherwise = Some(text);
        self
    }

    pub fn pick(&self, data: &FormData) -> Option<&'static str> {
        let value = data.text(self.key);
        self.arms
            .iter()
            .find(|(option, _)| *option == value)
            .map(|(_, text)| *text)
            .or(self.otherwise)
    }
}
