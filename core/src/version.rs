//! Version strings and their ordering.
//!
//! A version is a sequence of numeric and alphabetic components separated by
//! `.`, `-` or `_` (a switch between digits and letters also separates, so
//! `1.0beta2` reads as `1 . 0 . beta . 2`). Alphabetic components are
//! qualifiers that rank below a plain release:
//!
//! `alpha < beta < milestone < rc < snapshot < (release) < sp < other`
//!
//! Unknown qualifiers rank after `sp` and compare case-insensitively by text.
//!
//! Parsing normalizes the components: release qualifiers (`ga`, `final`,
//! `release`) are dropped and zeros ending a numeric run are stripped, so
//! `1`, `1.0`, `1.ga` and `1.0.0` are all equal, as are `1-alpha` and
//! `1.0-alpha`. Normalized versions then compare component by component, a
//! missing component standing for the plain release.

use crate::error::VersionParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rank of a release without qualifier.
const RELEASE_RANK: u8 = 5;

const UNKNOWN_RANK: u8 = 7;

/// One normalized component.
///
/// Components order as qualifiers (by rank, then text) below numbers; a
/// missing component sits between `snapshot` and `sp`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    Number(u64),
    Qualifier(String),
}

impl Component {
    /// Build a qualifier, folding aliases onto their canonical spelling.
    fn qualifier(text: &str) -> Self {
        let lower = text.to_ascii_lowercase();
        let canonical = match lower.as_str() {
            "a" => "alpha",
            "b" => "beta",
            "m" => "milestone",
            "cr" => "rc",
            "final" | "release" => "ga",
            other => other,
        };
        Component::Qualifier(canonical.to_string())
    }

    fn is_release(&self) -> bool {
        matches!(self, Component::Qualifier(q) if q == "ga")
    }

    /// Ordering against a missing component.
    fn cmp_missing(&self) -> Ordering {
        match self {
            Component::Number(_) => Ordering::Greater,
            Component::Qualifier(q) => qualifier_rank(q).cmp(&RELEASE_RANK),
        }
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Component::Number(a), Component::Number(b)) => a.cmp(b),
            (Component::Number(_), Component::Qualifier(_)) => Ordering::Greater,
            (Component::Qualifier(_), Component::Number(_)) => Ordering::Less,
            (Component::Qualifier(a), Component::Qualifier(b)) => qualifier_rank(a)
                .cmp(&qualifier_rank(b))
                .then_with(|| a.cmp(b)),
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Qualifiers are stored lowercase, aliases already folded.
fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" => 0,
        "beta" => 1,
        "milestone" => 2,
        "rc" => 3,
        "snapshot" => 4,
        "ga" => RELEASE_RANK,
        "sp" => 6,
        _ => UNKNOWN_RANK,
    }
}

/// Drop release qualifiers and the zeros ending each numeric run.
fn normalize(components: Vec<Component>) -> Vec<Component> {
    fn strip_zeros(components: &mut Vec<Component>) {
        while components.last() == Some(&Component::Number(0)) {
            components.pop();
        }
    }

    let mut normalized = Vec::with_capacity(components.len());
    for component in components.into_iter().filter(|c| !c.is_release()) {
        if matches!(component, Component::Qualifier(_)) {
            strip_zeros(&mut normalized);
        }
        normalized.push(component);
    }
    strip_zeros(&mut normalized);
    normalized
}

/// A parsed version string.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    components: Vec<Component>,
}

impl Version {
    /// Parse a version string.
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let mut components = Vec::new();
        let mut current = String::new();
        let mut current_is_digit = false;
        let mut after_separator = false;

        let flush = |current: &mut String,
                     is_digit: bool,
                     offset: usize,
                     components: &mut Vec<Component>|
         -> Result<(), VersionParseError> {
            if current.is_empty() {
                return Ok(());
            }
            let component = if is_digit {
                let number = current.parse::<u64>().map_err(|_| {
                    VersionParseError::new(input, offset, "numeric component out of range")
                })?;
                Component::Number(number)
            } else {
                Component::qualifier(current)
            };
            components.push(component);
            current.clear();
            Ok(())
        };

        if input.is_empty() {
            return Err(VersionParseError::new(input, 0, "empty version"));
        }

        for (offset, ch) in input.char_indices() {
            match ch {
                '.' | '-' | '_' => {
                    if current.is_empty() {
                        return Err(VersionParseError::new(
                            input,
                            offset,
                            format!("unexpected separator '{}'", ch),
                        ));
                    }
                    flush(&mut current, current_is_digit, offset, &mut components)?;
                    after_separator = true;
                }
                c if c.is_ascii_digit() || c.is_ascii_alphabetic() => {
                    if components.is_empty() && current.is_empty() && !c.is_ascii_digit() {
                        return Err(VersionParseError::new(
                            input,
                            offset,
                            "version must start with a digit",
                        ));
                    }
                    let is_digit = c.is_ascii_digit();
                    if !current.is_empty() && is_digit != current_is_digit {
                        flush(&mut current, current_is_digit, offset, &mut components)?;
                    }
                    current_is_digit = is_digit;
                    current.push(c);
                    after_separator = false;
                }
                other => {
                    return Err(VersionParseError::new(
                        input,
                        offset,
                        format!("unexpected character '{}'", other),
                    ));
                }
            }
        }

        if after_separator {
            return Err(VersionParseError::new(
                input,
                input.len() - 1,
                "trailing separator",
            ));
        }
        flush(&mut current, current_is_digit, input.len(), &mut components)?;

        Ok(Self {
            raw: input.to_string(),
            components: normalize(components),
        })
    }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let ordering = match (self.components.get(i), other.components.get(i)) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(a), None) => a.cmp_missing(),
                (None, Some(b)) => b.cmp_missing().reverse(),
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Compares version strings.
///
/// Implementations report unparsable input as a typed error; callers decide
/// what a failure means.
pub trait VersionComparator: Send + Sync {
    fn compare(&self, left: &str, right: &str) -> Result<Ordering, VersionParseError>;
}

/// The default comparator, ordering versions as described in the module docs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalVersionComparator;

impl VersionComparator for NaturalVersionComparator {
    fn compare(&self, left: &str, right: &str) -> Result<Ordering, VersionParseError> {
        compare_versions(left, right)
    }
}

/// Compare two version strings with the natural ordering.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering, VersionParseError> {
    let left = Version::parse(left)?;
    let right = Version::parse(right)?;
    Ok(left.cmp(&right))
}
