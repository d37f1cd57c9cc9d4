//! Small expression-style control-flow helpers.

use crate::safety::{Maybe, Outcome};

/// First stage of `branch(cond, value).then(f).otherwise(g)`.
pub struct Branch<T> {
    condition: bool,
    value: T,
}

pub struct BranchThen<T, F> {
    branch: Branch<T>,
    on_true: F,
}

pub fn branch<T>(condition: bool, value: T) -> Branch<T> {
    Branch { condition, value }
}

impl<T> Branch<T> {
    pub fn then<R, F: FnOnce(T) -> R>(self, on_true: F) -> BranchThen<T, F> {
        BranchThen {
            branch: self,
            on_true,
        }
    }
}

impl<T, F> BranchThen<T, F> {
    pub fn otherwise<R, G>(self, on_false: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(T) -> R,
    {
        let Branch { condition, value } = self.branch;
        if condition {
            (self.on_true)(value)
        } else {
            on_false(value)
        }
    }
}

pub fn unless(condition: bool, f: impl FnOnce()) {
    if !condition {
        f();
    }
}

/// Calls `f` until `predicate` accepts its result or `max_tries` calls have
/// been made, returning the last result. `f` always runs at least once.
pub fn repeat_until<T>(mut f: impl FnMut() -> T, predicate: impl Fn(&T) -> bool, max_tries: usize) -> T {
    let mut attempts = 1;
    let mut result = f();
    while !predicate(&result) && attempts < max_tries {
        result = f();
        attempts += 1;
    }
    result
}

pub fn do_if<R>(condition: bool, f: impl FnOnce() -> R) -> Option<R> {
    condition.then(f)
}

/// `Some(f())` when `value` is present.
pub fn if_valid<T, R>(value: Option<&T>, f: impl FnOnce() -> R) -> Maybe<R> {
    if value.is_some() {
        Maybe::Some { value: f() }
    } else {
        Maybe::None
    }
}

pub fn attempt<T, E>(f: impl FnOnce() -> Result<T, E>) -> Outcome<T, E> {
    f().into()
}
