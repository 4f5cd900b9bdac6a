use std::fmt;

/// Renders a rank as an English ordinal such as `1st`, `12th` or `22nd`.
///
/// # Examples
///
/// ```
/// use marked_time::Ordinal;
///
/// assert_eq!(Ordinal(1).to_string(), "1st");
/// assert_eq!(Ordinal(13).to_string(), "13th");
/// assert_eq!(Ordinal(22).to_string(), "22nd");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a plain number wrapper, there is nothing else it could ever contain"
)]
pub struct Ordinal(pub usize);

impl Ordinal {
    /// The suffix for this ordinal, without the number.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        ordinal_suffix(self.0)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.suffix())
    }
}

/// Values up to 15 come from a fixed table so that 11, 12 and 13 get "th".
/// Past that, the last digit decides.
fn ordinal_suffix(n: usize) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        0 | 4..=15 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
