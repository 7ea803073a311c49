//! Move-limit threshold parsing.
//!
//! The move limit tells the relocation logic when a backend is too full to
//! receive new data. It is either a percentage of backend capacity or an
//! absolute number of free bytes.
//!
//! # Grammar
//!
//! ```text
//! threshold := number [ 'K' | 'M' | 'G' | '%' ]      (suffix case-insensitive)
//! ```
//!
//! | Input      | Result                         |
//! |------------|--------------------------------|
//! | `50%`      | `Percent(50)`                  |
//! | `4M`       | `Bytes(4 MiB)`                 |
//! | `50`       | `Percent(50)` (≤ 100, no unit) |
//! | `500`      | `Bytes(1 MiB)` (clamped)       |
//! | `0`, empty | `Bytes(10 MiB)` (default)      |

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Move limit used when none is given or the input cannot be read.
pub const DEFAULT_MOVE_LIMIT: u64 = 10 * MIB;

/// Smallest byte limit accepted; smaller byte limits are raised to this.
pub const MINIMUM_MOVE_LIMIT: u64 = MIB;

/// Largest unitless value read as a percentage.
const MAX_UNITLESS_PERCENT: u64 = 100;

/// Space-based relocation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// Percentage of backend capacity. Never clamped.
    Percent(u64),
    /// Absolute byte count, at least [`MINIMUM_MOVE_LIMIT`] when user-supplied.
    Bytes(u64),
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Bytes(DEFAULT_MOVE_LIMIT)
    }
}

impl Threshold {
    /// Parse an optional `mlimit` value.
    ///
    /// Never fails: absent, empty, or unreadable input yields the default.
    pub fn parse_opt(input: Option<&str>) -> Self {
        input.map(Self::parse).unwrap_or_default()
    }

    /// Parse an `mlimit` value.
    ///
    /// Never fails: empty or unreadable input yields the default.
    ///
    /// # Example
    ///
    /// ```
    /// use multifs::config::Threshold;
    ///
    /// assert_eq!(Threshold::parse("50%"), Threshold::Percent(50));
    /// assert_eq!(Threshold::parse("4m"), Threshold::Bytes(4 * 1024 * 1024));
    /// assert_eq!(Threshold::parse("bogus"), Threshold::default());
    /// ```
    pub fn parse(input: &str) -> Self {
        let (number, multiplier) = match input.char_indices().last() {
            None => return Self::default(),
            Some((idx, c)) => match c.to_ascii_uppercase() {
                'K' => (&input[..idx], Some(KIB)),
                'M' => (&input[..idx], Some(MIB)),
                'G' => (&input[..idx], Some(GIB)),
                '%' => (&input[..idx], None),
                _ => (input, None),
            },
        };
        let percent_suffix = input.ends_with('%');

        let prefix = match leading_integer(number) {
            Some(0) | None => return Self::default(),
            Some(prefix) => prefix,
        };

        let threshold = match multiplier {
            Some(unit) => match prefix.checked_mul(unit) {
                Some(bytes) => Threshold::Bytes(bytes),
                None => return Self::default(),
            },
            None if percent_suffix => Threshold::Percent(prefix),
            None if prefix <= MAX_UNITLESS_PERCENT => Threshold::Percent(prefix),
            None => Threshold::Bytes(prefix),
        };

        threshold.clamped()
    }

    fn clamped(self) -> Self {
        match self {
            Threshold::Bytes(bytes) if bytes < MINIMUM_MOVE_LIMIT => {
                Threshold::Bytes(MINIMUM_MOVE_LIMIT)
            }
            other => other,
        }
    }

    /// Check if this is a percentage threshold.
    pub fn is_percent(&self) -> bool {
        matches!(self, Threshold::Percent(_))
    }

    /// The raw amount, percent or bytes depending on the mode.
    pub fn amount(&self) -> u64 {
        match *self {
            Threshold::Percent(amount) | Threshold::Bytes(amount) => amount,
        }
    }

    /// Resolve to a byte count for a backend of `capacity` bytes.
    pub fn bytes_for_capacity(&self, capacity: u64) -> u64 {
        match *self {
            Threshold::Percent(percent) => {
                let scaled = u128::from(capacity) * u128::from(percent) / 100;
                u64::try_from(scaled).unwrap_or(u64::MAX)
            }
            Threshold::Bytes(bytes) => bytes,
        }
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Threshold::Percent(percent) => write!(f, "{}%", percent),
            Threshold::Bytes(bytes) => write!(f, "{} bytes", bytes),
        }
    }
}

/// Read a leading unsigned integer the way `atoll` would.
///
/// Leading whitespace and a `+` sign are skipped and trailing characters after
/// the digits are ignored. Returns `None` if there are no digits, the number
/// is negative, or it does not fit in a `u64`.
fn leading_integer(input: &str) -> Option<u64> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
