//! Field-keyed lookups and updates over slices of records.
//!
//! Records are matched by equality on one named field, described by a
//! [`Field`] accessor. Non-destructive helpers return new vectors.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Result, UtilError};

/// A named accessor for one field of `T`.
pub struct Field<T, K> {
    pub name: &'static str,
    pub get: fn(&T) -> &K,
}

impl<T, K> Field<T, K> {
    pub const fn new(name: &'static str, get: fn(&T) -> &K) -> Self {
        Self { name, get }
    }

    fn matches(&self, item: &T, value: &K) -> bool
    where
        K: PartialEq,
    {
        (self.get)(item) == value
    }
}

impl<T, K> Clone for Field<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for Field<T, K> {}

/// Empties the vector in place.
pub fn clear_array<T>(array: &mut Vec<T>) {
    array.clear();
}

/// Removes the element at `index`; `None` or an out-of-range index is a no-op.
pub fn remove_at<T>(array: &mut Vec<T>, index: Option<usize>) {
    if let Some(i) = index.filter(|i| *i < array.len()) {
        array.remove(i);
    }
}

pub fn find_in_array<'a, T, K: PartialEq>(array: &'a [T], field: Field<T, K>, value: &K) -> Option<&'a T> {
    array.iter().find(|item| field.matches(item, value))
}

/// Like [`find_in_array`] but a miss is an error naming the field and value.
pub fn require_in_array<'a, T, K: PartialEq + Display>(
    array: &'a [T],
    field: Field<T, K>,
    value: &K,
) -> Result<&'a T> {
    find_in_array(array, field, value).ok_or_else(|| UtilError::NotFound {
        field: field.name,
        value: value.to_string(),
    })
}

pub fn find_index_in_array<T, K: PartialEq>(array: &[T], field: Field<T, K>, value: &K) -> Option<usize> {
    array.iter().position(|item| field.matches(item, value))
}

/// Copy of `array` without the items whose field equals `value`.
pub fn remove_from_array<T: Clone, K: PartialEq>(array: &[T], field: Field<T, K>, value: &K) -> Vec<T> {
    array
        .iter()
        .filter(|item| !field.matches(item, value))
        .cloned()
        .collect()
}

pub fn bulk_remove_from_array<T: Clone, K: Eq + Hash>(array: &[T], field: Field<T, K>, values: &[K]) -> Vec<T> {
    let wanted: HashSet<&K> = values.iter().collect();
    array
        .iter()
        .filter(|item| !wanted.contains((field.get)(item)))
        .cloned()
        .collect()
}

pub fn update_in_array<T: Clone, K: PartialEq>(
    array: &[T],
    field: Field<T, K>,
    value: &K,
    updater: impl Fn(&T) -> T,
) -> Vec<T> {
    array
        .iter()
        .map(|item| {
            if field.matches(item, value) {
                updater(item)
            } else {
                item.clone()
            }
        })
        .collect()
}

pub fn bulk_update_in_array<T: Clone, K: Eq + Hash>(
    array: &[T],
    field: Field<T, K>,
    values: &[K],
    updater: impl Fn(&T) -> T,
) -> Vec<T> {
    let wanted: HashSet<&K> = values.iter().collect();
    array
        .iter()
        .map(|item| {
            if wanted.contains((field.get)(item)) {
                updater(item)
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Every item except those whose field equals `exclude`.
pub fn all_except<T: Clone, K: PartialEq>(array: &[T], field: Field<T, K>, exclude: &K) -> Vec<T> {
    remove_from_array(array, field, exclude)
}
