//! Culture-specific spellings for custom-pattern parsing.
//!
//! chrono only understands English month names and `AM`/`PM`. A
//! [`FormatProvider`] rewrites an input written for some culture into that
//! spelling before the pattern is applied.

use crate::error::{DateTimeError, Result};
use std::borrow::Cow;

const INVARIANT_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const INVARIANT_ABBREVIATED_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rewrites culture-specific words in an input into chrono's spelling.
pub trait FormatProvider {
    fn to_invariant<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

/// Inputs already use the English spelling; nothing is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvariantCulture;

impl FormatProvider for InvariantCulture {
    fn to_invariant<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }
}

/// A named table of month names and time-of-day designators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    months: Vec<String>,
    abbreviated_months: Vec<String>,
    am_designator: String,
    pm_designator: String,
}

impl Culture {
    /// Build a culture table. Empty designators are ignored when rewriting.
    pub fn new(name: &str, months: [&str; 12], abbreviated_months: [&str; 12], am: &str, pm: &str) -> Self {
        Self {
            name: name.to_string(),
            months: months.iter().map(|m| m.to_lowercase()).collect(),
            abbreviated_months: abbreviated_months.iter().map(|m| m.to_lowercase()).collect(),
            am_designator: am.to_lowercase(),
            pm_designator: pm.to_lowercase(),
        }
    }

    pub fn invariant() -> Self {
        Self::new("invariant", INVARIANT_MONTHS, INVARIANT_ABBREVIATED_MONTHS, "AM", "PM")
    }

    pub fn french() -> Self {
        Self::new(
            "fr",
            [
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ],
            [
                "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov", "déc",
            ],
            "",
            "",
        )
    }

    pub fn german() -> Self {
        Self::new(
            "de",
            [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            [
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ],
            "",
            "",
        )
    }

    /// Look up a built-in culture by name (`invariant`, `en`, `fr`, `de`)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "" | "invariant" | "en" => Ok(Self::invariant()),
            "fr" | "french" => Ok(Self::french()),
            "de" | "german" => Ok(Self::german()),
            _ => Err(DateTimeError::UnknownCulture(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, word: &str) -> Option<&'static str> {
        let lower = word.to_lowercase();

        // Full names first: some cultures share a spelling between both tables
        if let Some(index) = self.months.iter().position(|m| *m == lower) {
            return Some(INVARIANT_MONTHS[index]);
        }
        if let Some(index) = self.abbreviated_months.iter().position(|m| *m == lower) {
            return Some(INVARIANT_ABBREVIATED_MONTHS[index]);
        }
        if !self.am_designator.is_empty() && self.am_designator == lower {
            return Some("AM");
        }
        if !self.pm_designator.is_empty() && self.pm_designator == lower {
            return Some("PM");
        }
        None
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl FormatProvider for Culture {
    fn to_invariant<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut output = String::with_capacity(input.len());
        let mut changed = false;
        let mut rest = input;

        while let Some(start) = rest.find(char::is_alphabetic) {
            output.push_str(&rest[..start]);
            let word_len = rest[start..]
                .find(|c: char| !c.is_alphabetic())
                .unwrap_or(rest.len() - start);
            let word = &rest[start..start + word_len];

            match self.translate(word) {
                Some(replacement) => {
                    changed |= replacement != word;
                    output.push_str(replacement);
                }
                None => output.push_str(word),
            }
            rest = &rest[start + word_len..];
        }

        if !changed {
            return Cow::Borrowed(input);
        }
        output.push_str(rest);
        Cow::Owned(output)
    }
}
