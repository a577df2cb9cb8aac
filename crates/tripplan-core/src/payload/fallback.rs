//! The two substitution rules used when merging form input over a template.
//!
//! - **Truthy fallback**: empty strings, empty sequences, zero and absent
//!   values all mean "unset" and take the default.
//! - **Nullish fallback**: only an absent value takes the default; zero and
//!   empty strings are explicit user choices.
//!
//! Text and sequence fields use the truthy rule, party head counts use the
//! nullish rule. Collapsing them into one would change how a submitted `0`
//! is treated.

/// Values that can be "falsy" in the loose sense the UI layer uses.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        self.as_slice().is_truthy()
    }
}

impl Truthy for u32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Return `value` if it is truthy, otherwise a clone of `default`.
pub fn truthy_or<T>(value: Option<&T>, default: &T) -> T
where
    T: Truthy + Clone,
{
    match value {
        Some(v) if v.is_truthy() => v.clone(),
        _ => default.clone(),
    }
}

/// Return `value` if present (zero included), otherwise `default`.
pub fn nullish_or<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_text() {
        assert!("Paris".is_truthy());
        assert!(" ".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[test]
    fn test_truthy_counts() {
        assert!(3_u32.is_truthy());
        assert!(!0_u32.is_truthy());
    }

    #[test]
    fn test_truthy_option_and_vec() {
        assert!(!None::<String>.is_truthy());
        assert!(Some("x".to_string()).is_truthy());
        assert!(!Some(String::new()).is_truthy());
        assert!(!Vec::<String>::new().is_truthy());
        assert!(vec![String::new()].is_truthy());
    }

    #[test]
    fn test_truthy_or_falls_back_on_empty() {
        let default = "San Francisco".to_string();
        assert_eq!(truthy_or(Some(&"Chicago".to_string()), &default), "Chicago");
        assert_eq!(truthy_or(Some(&String::new()), &default), "San Francisco");
        assert_eq!(truthy_or(None, &default), "San Francisco");
    }

    #[test]
    fn test_nullish_or_keeps_zero() {
        assert_eq!(nullish_or(Some(0_u32), 2), 0);
        assert_eq!(nullish_or(None, 2_u32), 2);
    }

    #[test]
    fn test_rules_differ_on_zero() {
        assert_eq!(truthy_or(Some(&0_u32), &2), 2);
        assert_eq!(nullish_or(Some(0_u32), 2), 0);
    }
}
