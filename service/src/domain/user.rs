//! [`User`] definitions.

use common::Date;
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Directory user record.
///
/// Immutable from the read path's perspective: its lifecycle is fully owned
/// by the relational store.
#[derive(Clone, Debug)]
pub struct User {
    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Company`] this [`User`] belongs to.
    pub company: Company,

    /// [`Age`] of this [`User`].
    pub age: Age,

    /// [`Date`] associated with this [`User`] record.
    pub date: Date,
}

/// Name of a [`User`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

/// Company a [`User`] belongs to.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Into, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Company(String);

/// Age of a [`User`], in full years.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Age(i32);
