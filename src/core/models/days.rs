//! Meeting days of a section

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A teaching weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
}

impl Weekday {
    /// All teaching days in calendar order
    pub const ALL: [Self; 5] = [Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri];

    /// Compact catalog abbreviation (`M`, `T`, `W`, `Th`, `F`)
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Mon => "M",
            Self::Tue => "T",
            Self::Wed => "W",
            Self::Thu => "Th",
            Self::Fri => "F",
        }
    }

    /// Full English name of the day
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mon => "Monday",
            Self::Tue => "Tuesday",
            Self::Wed => "Wednesday",
            Self::Thu => "Thursday",
            Self::Fri => "Friday",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Match a day word such as `Mon`, `tues` or `Thursday` (at least three letters)
    fn from_word(word: &str) -> Option<Self> {
        let lower = word.to_ascii_lowercase();
        if lower.len() < 3 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|day| day.name().to_ascii_lowercase().starts_with(&lower))
    }
}

/// A set of meeting days, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set (days to be announced)
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a list of days
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::empty(), |set, &day| set.with(day))
    }

    /// Return a copy of this set with `day` added
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self(self.0 | day.bit())
    }

    /// Add a day in place
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    /// Whether `day` is in the set
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Days present in both sets
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Whether the sets share at least one day
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no day is set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in calendar order
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }

    /// Parse catalog day notation.
    ///
    /// Accepts compact codes (`MW`, `TTh`, `TuTh`, `TR`, `MWF`, `MTWR`), day words
    /// (`Mon`, `Tue Thu`, `Mon/Wed`, `Friday`) and mixtures separated by
    /// spaces, commas, slashes or dashes. `TBA` and the empty string give the
    /// empty set.
    ///
    /// # Errors
    /// Returns an error naming the first unrecognized token
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("tba") {
            return Ok(Self::empty());
        }

        let mut set = Self::empty();
        for token in trimmed
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '-'))
            .filter(|t| !t.is_empty())
        {
            if let Some(day) = Weekday::from_word(token) {
                set.insert(day);
            } else {
                set.0 |= Self::parse_compact(token)?.0;
            }
        }
        Ok(set)
    }

    fn parse_compact(token: &str) -> Result<Self, String> {
        let mut set = Self::empty();
        let mut chars = token.chars().peekable();
        while let Some(c) = chars.next() {
            let day = match c.to_ascii_uppercase() {
                'M' => Weekday::Mon,
                'T' => match chars.peek().map(char::to_ascii_lowercase) {
                    Some('h') => {
                        chars.next();
                        Weekday::Thu
                    }
                    Some('u') => {
                        chars.next();
                        Weekday::Tue
                    }
                    _ => Weekday::Tue,
                },
                'W' => Weekday::Wed,
                'R' => Weekday::Thu,
                'F' => Weekday::Fri,
                _ => return Err(format!("Unrecognized meeting days: '{token}'")),
            };
            set.insert(day);
        }
        Ok(set)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "TBA");
        }
        for day in self.iter() {
            write!(f, "{}", day.abbrev())?;
        }
        Ok(())
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
