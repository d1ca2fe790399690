//! Resolution of the user-supplied "how many similar films" count.
//!
//! Malformed or out-of-range input is never an error: it is replaced by a
//! usable value and the replacement is reported back to the caller.

use serde::Serialize;

/// Why the resolved count differs from what was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CountAdjustment {
    /// Nothing was entered
    DefaultedEmpty,
    /// The input was not a whole number
    DefaultedInvalid { raw: String },
    /// The number was below 1
    DefaultedBelowOne { requested: i64 },
    /// The number exceeded the films available for comparison
    Clamped { requested: i64, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountResolution {
    pub value: usize,
    pub adjustment: Option<CountAdjustment>,
}

/// Turn raw input into a count in `[1, total - 1]`.
///
/// Empty, non-numeric and sub-1 inputs fall back to `default`. Any value,
/// including the default, is then capped at `total - 1`. Callers must
/// check `total > 1` first; below that there is nothing to compare.
pub fn resolve_count(raw: Option<&str>, default: usize, total: usize) -> CountResolution {
    let max = total.saturating_sub(1).max(1);
    let raw = raw.map(str::trim).unwrap_or("");

    let (requested, adjustment) = if raw.is_empty() {
        (default, Some(CountAdjustment::DefaultedEmpty))
    } else {
        match raw.parse::<i64>() {
            Err(_) => (
                default,
                Some(CountAdjustment::DefaultedInvalid {
                    raw: raw.to_string(),
                }),
            ),
            Ok(n) if n < 1 => (default, Some(CountAdjustment::DefaultedBelowOne { requested: n })),
            Ok(n) if n as u64 > max as u64 => {
                (max, Some(CountAdjustment::Clamped { requested: n, max }))
            }
            Ok(n) => (n as usize, None),
        }
    };

    CountResolution {
        value: requested.clamp(1, max),
        adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_count_is_kept() {
        let r = resolve_count(Some("3"), 5, 10);
        assert_eq!(r.value, 3);
        assert_eq!(r.adjustment, None);
    }

    #[test]
    fn test_empty_uses_default() {
        assert_eq!(
            resolve_count(None, 5, 10),
            CountResolution {
                value: 5,
                adjustment: Some(CountAdjustment::DefaultedEmpty)
            }
        );
        assert_eq!(resolve_count(Some("   "), 5, 10).value, 5);
    }

    #[test]
    fn test_non_numeric_uses_default() {
        let r = resolve_count(Some("abc"), 5, 10);
        assert_eq!(r.value, 5);
        assert_eq!(
            r.adjustment,
            Some(CountAdjustment::DefaultedInvalid {
                raw: "abc".to_string()
            })
        );
        assert_eq!(resolve_count(Some("2.5"), 5, 10).value, 5);
    }

    #[test]
    fn test_below_one_uses_default() {
        let r = resolve_count(Some("0"), 5, 10);
        assert_eq!(r.value, 5);
        assert_eq!(r.adjustment, Some(CountAdjustment::DefaultedBelowOne { requested: 0 }));
        assert_eq!(resolve_count(Some("-4"), 5, 10).value, 5);
    }

    #[test]
    fn test_too_large_is_clamped() {
        let r = resolve_count(Some("50"), 5, 10);
        assert_eq!(r.value, 9);
        assert_eq!(r.adjustment, Some(CountAdjustment::Clamped { requested: 50, max: 9 }));
    }

    #[test]
    fn test_exact_maximum_is_kept() {
        let r = resolve_count(Some("9"), 5, 10);
        assert_eq!(r.value, 9);
        assert_eq!(r.adjustment, None);
    }

    #[test]
    fn test_default_is_capped_by_small_catalogue() {
        let r = resolve_count(None, 5, 3);
        assert_eq!(r.value, 2);
        assert_eq!(r.adjustment, Some(CountAdjustment::DefaultedEmpty));
    }
}
