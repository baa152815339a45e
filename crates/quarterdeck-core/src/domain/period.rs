use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Validated fiscal quarter label in "Qn YYYY" form.
///
/// Ordering is chronological: by year, then quarter within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodLabel {
    year: u16,
    quarter: u8,
}

impl PeriodLabel {
    /// Parse a label such as "Q2 2024".
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPeriod);
        }

        let invalid = || ValidationError::InvalidPeriodFormat {
            value: trimmed.to_owned(),
        };

        let rest = trimmed.strip_prefix(['Q', 'q']).ok_or_else(invalid)?;
        let (quarter_part, year_part) = rest.split_once(' ').ok_or_else(invalid)?;

        if quarter_part.len() != 1 || year_part.len() != 4 {
            return Err(invalid());
        }

        let quarter = quarter_part.parse::<u8>().map_err(|_| invalid())?;
        if !(1..=4).contains(&quarter) {
            return Err(ValidationError::InvalidQuarter {
                value: trimmed.to_owned(),
            });
        }

        let year = year_part.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self { year, quarter })
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn quarter(self) -> u8 {
        self.quarter
    }
}

impl Display for PeriodLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

impl FromStr for PeriodLabel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PeriodLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for PeriodLabel {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PeriodLabel> for String {
    fn from(value: PeriodLabel) -> Self {
        value.to_string()
    }
}
