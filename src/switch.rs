//! Declarative `switch`/`match` over a list of cases.
//!
//! [`pro_switch`] and [`pro_switch_return`] treat a `Default` case
//! differently: the former runs it as soon as it is reached, the latter only
//! after every `Value` case has been checked.

/// A case for [`pro_switch`].
pub enum SwitchCase<'a, T> {
    Value {
        value: T,
        action: Box<dyn FnOnce() + 'a>,
    },
    Default {
        action: Box<dyn FnOnce() + 'a>,
    },
}

impl<'a, T> SwitchCase<'a, T> {
    pub fn on(value: T, action: impl FnOnce() + 'a) -> Self {
        Self::Value {
            value,
            action: Box::new(action),
        }
    }

    pub fn fallback(action: impl FnOnce() + 'a) -> Self {
        Self::Default {
            action: Box::new(action),
        }
    }
}

/// A case for [`pro_switch_return`].
pub enum ReturnCase<'a, T, R> {
    Value {
        value: T,
        action: Box<dyn FnOnce() -> R + 'a>,
    },
    Default {
        action: Box<dyn FnOnce() -> R + 'a>,
    },
}

impl<'a, T, R> ReturnCase<'a, T, R> {
    pub fn on(value: T, action: impl FnOnce() -> R + 'a) -> Self {
        Self::Value {
            value,
            action: Box::new(action),
        }
    }

    pub fn fallback(action: impl FnOnce() -> R + 'a) -> Self {
        Self::Default {
            action: Box::new(action),
        }
    }
}

/// Runs the first case that either is a `Default` or whose value equals `key`.
///
/// A `Default` listed before a matching `Value` wins; callers list it last.
pub fn pro_switch<'a, T: PartialEq>(key: &T, cases: impl IntoIterator<Item = SwitchCase<'a, T>>) {
    for case in cases {
        match case {
            SwitchCase::Default { action } => {
                action();
                return;
            }
            SwitchCase::Value { value, action } if value == *key => {
                action();
                return;
            }
            SwitchCase::Value { .. } => {}
        }
    }
}

/// Returns the result of the first `Value` case equal to `key`, else the
/// result of the last `Default` case, else `None`.
pub fn pro_switch_return<'a, T: PartialEq, R>(
    key: &T,
    cases: impl IntoIterator<Item = ReturnCase<'a, T, R>>,
) -> Option<R> {
    let mut fallback = None;
    for case in cases {
        match case {
            ReturnCase::Default { action } => fallback = Some(action),
            ReturnCase::Value { value, action } if value == *key => return Some(action()),
            ReturnCase::Value { .. } => {}
        }
    }
    fallback.map(|action| action())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_pro_switch_runs_matching_case() {
        let hits = RefCell::new(Vec::new());
        pro_switch(
            &"red",
            [
                SwitchCase::on("red", || hits.borrow_mut().push("red")),
                SwitchCase::on("blue", || hits.borrow_mut().push("blue")),
                SwitchCase::fallback(|| hits.borrow_mut().push("default")),
            ],
        );
        assert_eq!(*hits.borrow(), vec!["red"]);
    }

    #[test]
    fn test_pro_switch_runs_default_when_nothing_matches() {
        let hits = RefCell::new(Vec::new());
        pro_switch(
            &"green",
            [
                SwitchCase::on("red", || hits.borrow_mut().push("red")),
                SwitchCase::on("blue", || hits.borrow_mut().push("blue")),
                SwitchCase::fallback(|| hits.borrow_mut().push("default")),
            ],
        );
        assert_eq!(*hits.borrow(), vec!["default"]);
    }

    #[test]
    fn test_pro_switch_early_default_shadows_later_match() {
        let hits = RefCell::new(Vec::new());
        pro_switch(
            &"blue",
            [
                SwitchCase::on("red", || hits.borrow_mut().push("red")),
                SwitchCase::fallback(|| hits.borrow_mut().push("default")),
                SwitchCase::on("blue", || hits.borrow_mut().push("blue")),
            ],
        );
        assert_eq!(*hits.borrow(), vec!["default"]);
    }

    #[test]
    fn test_pro_switch_first_match_only() {
        let hits = RefCell::new(0);
        pro_switch(
            &1,
            [
                SwitchCase::on(1, || *hits.borrow_mut() += 1),
                SwitchCase::on(1, || *hits.borrow_mut() += 10),
            ],
        );
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_pro_switch_no_cases() {
        pro_switch(&"x", Vec::<SwitchCase<&str>>::new());
    }

    #[test]
    fn test_pro_switch_return_matched() {
        let result = pro_switch_return(
            &"blue",
            [
                ReturnCase::on("red", || "Red"),
                ReturnCase::on("blue", || "Blue"),
                ReturnCase::fallback(|| "Default"),
            ],
        );
        assert_eq!(result, Some("Blue"));
    }

    #[test]
    fn test_pro_switch_return_default() {
        let result = pro_switch_return(
            &"yellow",
            [
                ReturnCase::on("red", || "Red"),
                ReturnCase::on("blue", || "Blue"),
                ReturnCase::fallback(|| "Default"),
            ],
        );
        assert_eq!(result, Some("Default"));
    }

    #[test]
    fn test_pro_switch_return_none_without_default() {
        let result = pro_switch_return(
            &"yellow",
            [ReturnCase::on("red", || "Red"), ReturnCase::on("blue", || "Blue")],
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_pro_switch_return_default_position_does_not_matter() {
        let ran_default = RefCell::new(false);
        let result = pro_switch_return(
            &"blue",
            [
                ReturnCase::fallback(|| {
                    *ran_default.borrow_mut() = true;
                    "Default"
                }),
                ReturnCase::on("red", || "Red"),
                ReturnCase::on("blue", || "Blue"),
            ],
        );
        assert_eq!(result, Some("Blue"));
        assert!(!*ran_default.borrow());
    }

    #[test]
    fn test_pro_switch_return_last_default_wins() {
        let result = pro_switch_return(
            &0,
            [ReturnCase::fallback(|| "first"), ReturnCase::fallback(|| "second")],
        );
        assert_eq!(result, Some("second"));
    }
}
