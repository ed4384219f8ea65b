//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s table view definitions.

    use common::define_pagination;
    use strum::EnumString;

    use crate::domain::User;

    define_pagination!(Node, Filters);

    /// Node in a [`Page`].
    pub type Node = User;

    /// Slice of [`Node`]s selected by a [`Selector`].
    pub type Rows = Vec<Node>;

    /// Ordered sequence of [`Filter`]s applied to a [`Page`].
    pub type Filters = Vec<Filter>;

    /// Single column filter of the table view.
    ///
    /// Both the `field` and the `operator` are carried as their wire names:
    /// entries naming an unknown field or operator don't fail the request,
    /// but are silently ignored when the filter set is translated into
    /// predicates. The `value` always travels as text and is coerced to the
    /// column type by the store itself.
    #[derive(Clone, Debug)]
    pub struct Filter {
        /// Name of the [`Field`] to filter by.
        pub field: String,

        /// Name of the [`Operator`] to compare with.
        pub operator: String,

        /// Value to compare the [`Field`] against.
        pub value: String,
    }

    /// Filterable field of the table view.
    #[derive(Clone, Copy, Debug, EnumString, Eq, PartialEq)]
    #[strum(serialize_all = "lowercase")]
    pub enum Field {
        /// `name` column.
        Name,

        /// `company` column.
        Company,

        /// `age` column.
        Age,

        /// `date` column.
        Date,
    }

    /// Comparison operator of a [`Filter`].
    #[derive(Clone, Copy, Debug, EnumString, Eq, PartialEq)]
    #[strum(serialize_all = "camelCase")]
    pub enum Operator {
        /// Case-insensitive substring match.
        Contains,

        /// Exact equality.
        Equals,

        /// Case-insensitive prefix match.
        StartsWith,

        /// Case-insensitive suffix match.
        EndsWith,

        /// Strict less-than.
        Before,

        /// Strict greater-than.
        After,

        /// Strict greater-than.
        GreaterThan,

        /// Strict less-than.
        LessThan,
    }

    #[cfg(test)]
    mod spec {
        use super::{Field, Operator};

        #[test]
        fn parses_wire_names() {
            assert_eq!("name".parse(), Ok(Field::Name));
            assert_eq!("company".parse(), Ok(Field::Company));
            assert_eq!("age".parse(), Ok(Field::Age));
            assert_eq!("date".parse(), Ok(Field::Date));

            assert_eq!("contains".parse(), Ok(Operator::Contains));
            assert_eq!("startsWith".parse(), Ok(Operator::StartsWith));
            assert_eq!("endsWith".parse(), Ok(Operator::EndsWith));
            assert_eq!("equals".parse(), Ok(Operator::Equals));
            assert_eq!("before".parse(), Ok(Operator::Before));
            assert_eq!("after".parse(), Ok(Operator::After));
            assert_eq!("greaterThan".parse(), Ok(Operator::GreaterThan));
            assert_eq!("lessThan".parse(), Ok(Operator::LessThan));
        }

        #[test]
        fn rejects_unknown_wire_names() {
            assert!("id".parse::<Field>().is_err());
            assert!("Name".parse::<Field>().is_err());
            assert!("matches".parse::<Operator>().is_err());
            assert!("STARTSWITH".parse::<Operator>().is_err());
        }
    }
}
