//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// ISO 8601 calendar date format (`YYYY-MM-DD`).
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without a time-of-day or timezone component.
#[derive(Clone, Copy, Debug, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Date(time::Date);

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .format(FORMAT)
            .map_err(|_| fmt::Error)
            .and_then(|s| f.write_str(&s))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT).map(Self).map_err(ParseError)
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("cannot parse `Date`: {_0}")]
pub struct ParseError(time::error::Parse);

#[cfg(feature = "serde")]
mod serde_integration {
    //! Module providing integration with [`serde`] crate.
    //!
    //! A [`Date`] is represented as an ISO 8601 `YYYY-MM-DD` string.

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Date;

    impl Serialize for Date {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            String::deserialize(deserializer)?
                .parse()
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn parses_iso_format() {
        let date: Date = "2024-03-07".parse().unwrap();
        assert_eq!(date.to_string(), "2024-03-07");

        assert!("07.03.2024".parse::<Date>().is_err());
        assert!("2024-13-01".parse::<Date>().is_err());
        assert!("not a date".parse::<Date>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let earlier: Date = "2023-12-31".parse().unwrap();
        let later: Date = "2024-01-01".parse().unwrap();
        assert!(earlier < later);
    }
}
