use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{GeomotionError, GeomotionResult};

/// Life-like birth/survival rule over Moore-neighbourhood counts `0..=8`.
///
/// Serialized in `B3/S23` notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: u16,
    survival: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut m = 0u16;
    let mut i = 0;
    while i < counts.len() {
        m |= 1 << counts[i];
        i += 1;
    }
    m
}

const PRESETS: &[(&str, Rule)] = &[
    ("classic", Rule::CLASSIC),
    ("labyrinth", Rule::LABYRINTH),
    ("highlife", Rule::HIGH_LIFE),
    ("seeds", Rule::SEEDS),
    ("life34", Rule::LIFE_34),
    ("day_and_night", Rule::DAY_AND_NIGHT),
];

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub const CLASSIC: Self = Self::from_masks(mask(&[3]), mask(&[2, 3]));
    /// Maze-growing rule, B3/S12345.
    pub const LABYRINTH: Self = Self::from_masks(mask(&[3]), mask(&[1, 2, 3, 4, 5]));
    /// HighLife, B36/S23.
    pub const HIGH_LIFE: Self = Self::from_masks(mask(&[3, 6]), mask(&[2, 3]));
    /// Seeds, B2/S (no cell survives).
    pub const SEEDS: Self = Self::from_masks(mask(&[2]), 0);
    /// 34 Life, B34/S34.
    pub const LIFE_34: Self = Self::from_masks(mask(&[3, 4]), mask(&[3, 4]));
    /// Day & Night, B3678/S34678.
    pub const DAY_AND_NIGHT: Self =
        Self::from_masks(mask(&[3, 6, 7, 8]), mask(&[3, 4, 6, 7, 8]));

    const fn from_masks(birth: u16, survival: u16) -> Self {
        Self { birth, survival }
    }

    /// Rule from explicit neighbour counts.
    pub fn new(birth: &[u8], survival: &[u8]) -> GeomotionResult<Self> {
        if let Some(n) = birth.iter().chain(survival).find(|&&n| n > 8) {
            return Err(GeomotionError::automaton(format!(
                "neighbour count {n} is out of range 0..=8"
            )));
        }
        Ok(Self::from_masks(mask(birth), mask(survival)))
    }

    /// Whether a dead cell with `n` live neighbours comes alive.
    #[inline]
    pub fn births(&self, n: u8) -> bool {
        n <= 8 && self.birth & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbours stays alive.
    #[inline]
    pub fn survives(&self, n: u8) -> bool {
        n <= 8 && self.survival & (1 << n) != 0
    }

    /// Birth counts in ascending order.
    pub fn birth_counts(&self) -> Vec<u8> {
        counts(self.birth)
    }

    /// Survival counts in ascending order.
    pub fn survival_counts(&self) -> Vec<u8> {
        counts(self.survival)
    }

    /// Look up a named preset (`classic`, `labyrinth`, `highlife`, `seeds`, `life34`,
    /// `day_and_night`).
    pub fn preset(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        PRESETS
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, rule)| *rule)
    }

    /// Names accepted by [`Rule::preset`].
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(n, _)| *n)
    }

    /// Parse `B3/S23` notation (either part order, case-insensitive) or a preset name.
    pub fn parse(s: &str) -> GeomotionResult<Self> {
        if let Some(rule) = Self::preset(s) {
            return Ok(rule);
        }

        let mut birth = None;
        let mut survival = None;
        for part in s.trim().split('/') {
            let part = part.trim();
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('B' | 'b') => &mut birth,
                Some('S' | 's') => &mut survival,
                _ => {
                    return Err(GeomotionError::automaton(format!(
                        "cannot parse rule '{s}': expected B…/S…"
                    )));
                }
            };
            if slot.is_some() {
                return Err(GeomotionError::automaton(format!(
                    "cannot parse rule '{s}': duplicate section"
                )));
            }
            let digits = chars
                .map(|c| {
                    c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                        GeomotionError::automaton(format!(
                            "cannot parse rule '{s}': '{c}' is not a digit"
                        ))
                    })
                })
                .collect::<GeomotionResult<Vec<u8>>>()?;
            *slot = Some(digits);
        }

        match (birth, survival) {
            (Some(b), Some(s)) => Self::new(&b, &s),
            _ => Err(GeomotionError::automaton(format!(
                "cannot parse rule '{s}': both B and S sections are required"
            ))),
        }
    }
}

fn counts(m: u16) -> Vec<u8> {
    (0u8..=8).filter(|&n| m & (1 << n) != 0).collect()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = GeomotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rule {
    type Error = GeomotionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/rule.rs"]
mod tests;
