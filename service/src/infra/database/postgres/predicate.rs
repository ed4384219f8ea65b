//! SQL predicate assembly for the table view filter grammar.

use itertools::Itertools as _;
use tokio_postgres::types::ToSql;

use crate::read::user::list::{Field, Filter, Operator};

/// Combined SQL predicate built from an ordered filter set.
///
/// Filters naming an unknown field or operator are silently discarded.
/// Every surviving filter contributes one `AND`ed clause and one `TEXT`
/// parameter: the value is cast to the column type inside SQL, so a value
/// the column type cannot represent fails at the store, not here.
#[derive(Clone, Debug)]
pub(crate) struct Predicate {
    /// Rendered SQL clauses with `$N` placeholders.
    clauses: Vec<String>,

    /// Parameter values, one per clause, in placeholder order.
    params: Vec<String>,
}

impl Predicate {
    /// Builds a new [`Predicate`] out of the provided filter set, numbering
    /// its placeholders from `first_param`.
    pub(crate) fn build(filters: &[Filter], first_param: usize) -> Self {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        for filter in filters {
            let Ok(field) = filter.field.parse::<Field>() else {
                continue;
            };
            let Ok(operator) = filter.operator.parse::<Operator>() else {
                continue;
            };

            let idx = first_param + params.len();
            let col = column(field);
            match operator {
                Operator::Contains => {
                    params.push(format!("%{}%", escape_like(&filter.value)));
                    clauses.push(format!("{col} ILIKE ${idx}::TEXT"));
                }
                Operator::StartsWith => {
                    params.push(format!("{}%", escape_like(&filter.value)));
                    clauses.push(format!("{col} ILIKE ${idx}::TEXT"));
                }
                Operator::EndsWith => {
                    params.push(format!("%{}", escape_like(&filter.value)));
                    clauses.push(format!("{col} ILIKE ${idx}::TEXT"));
                }
                Operator::Equals
                | Operator::Before
                | Operator::After
                | Operator::GreaterThan
                | Operator::LessThan => {
                    let op = comparison(operator);
                    let ty = cast(field);
                    params.push(filter.value.clone());
                    clauses
                        .push(format!("{col} {op} (${idx}::TEXT)::{ty}"));
                }
            }
        }

        Self { clauses, params }
    }

    /// Renders the `WHERE` clause of this [`Predicate`].
    ///
    /// An empty filter set yields an empty string, matching all records.
    pub(crate) fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.iter().format(" AND "))
        }
    }

    /// Returns parameter values of this [`Predicate`], in placeholder order.
    pub(crate) fn params(
        &self,
    ) -> impl Iterator<Item = &(dyn ToSql + Sync)> {
        self.params.iter().map(|v| {
            let v: &(dyn ToSql + Sync) = v;
            v
        })
    }
}

/// Returns the `users` table column the provided [`Field`] refers to.
const fn column(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Company => "company",
        Field::Age => "age",
        Field::Date => "date",
    }
}

/// Returns the SQL type the filter value is cast to for the provided
/// [`Field`].
const fn cast(field: Field) -> &'static str {
    match field {
        Field::Name | Field::Company => "VARCHAR",
        Field::Age => "INT4",
        Field::Date => "DATE",
    }
}

/// Returns the SQL comparison operator for the provided [`Operator`].
///
/// # Panics
///
/// On the pattern-matching [`Operator`]s, which never render as plain
/// comparisons.
const fn comparison(operator: Operator) -> &'static str {
    match operator {
        Operator::Equals => "=",
        Operator::Before | Operator::LessThan => "<",
        Operator::After | Operator::GreaterThan => ">",
        Operator::Contains | Operator::StartsWith | Operator::EndsWith => {
            panic!("not a comparison operator")
        }
    }
}

/// Escapes `LIKE` wildcard characters in the provided value, so it only
/// matches literally.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

#[cfg(test)]
mod spec {
    use crate::read::user::list::Filter;

    use super::Predicate;

    fn filter(field: &str, operator: &str, value: &str) -> Filter {
        Filter {
            field: field.to_owned(),
            operator: operator.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn empty_filter_set_matches_all_records() {
        let predicate = Predicate::build(&[], 1);
        assert_eq!(predicate.where_sql(), "");
        assert_eq!(predicate.params().count(), 0);
    }

    #[test]
    fn renders_pattern_matches_case_insensitively() {
        let predicate =
            Predicate::build(&[filter("name", "contains", "Ali")], 1);
        assert_eq!(predicate.where_sql(), "WHERE name ILIKE $1::TEXT");
        assert_eq!(predicate.params, ["%Ali%"]);

        let predicate =
            Predicate::build(&[filter("company", "startsWith", "Ini")], 1);
        assert_eq!(predicate.where_sql(), "WHERE company ILIKE $1::TEXT");
        assert_eq!(predicate.params, ["Ini%"]);

        let predicate =
            Predicate::build(&[filter("name", "endsWith", "son")], 1);
        assert_eq!(predicate.where_sql(), "WHERE name ILIKE $1::TEXT");
        assert_eq!(predicate.params, ["%son"]);
    }

    #[test]
    fn renders_comparisons_with_column_type_casts() {
        let predicate =
            Predicate::build(&[filter("age", "greaterThan", "30")], 1);
        assert_eq!(
            predicate.where_sql(),
            "WHERE age > ($1::TEXT)::INT4",
        );
        assert_eq!(predicate.params, ["30"]);

        let predicate =
            Predicate::build(&[filter("date", "before", "2024-01-01")], 1);
        assert_eq!(
            predicate.where_sql(),
            "WHERE date < ($1::TEXT)::DATE",
        );

        let predicate =
            Predicate::build(&[filter("name", "equals", "Alice")], 1);
        assert_eq!(
            predicate.where_sql(),
            "WHERE name = ($1::TEXT)::VARCHAR",
        );
    }

    #[test]
    fn before_and_less_than_render_identically() {
        let lhs = Predicate::build(&[filter("age", "lessThan", "30")], 1);
        let rhs = Predicate::build(&[filter("age", "before", "30")], 1);
        assert_eq!(lhs.where_sql(), rhs.where_sql());

        let lhs = Predicate::build(&[filter("date", "after", "2024-01-01")], 1);
        let rhs = Predicate::build(
            &[filter("date", "greaterThan", "2024-01-01")],
            1,
        );
        assert_eq!(lhs.where_sql(), rhs.where_sql());
    }

    #[test]
    fn drops_unknown_fields_and_operators_silently() {
        let predicate = Predicate::build(
            &[
                filter("salary", "equals", "100"),
                filter("name", "matches", "Ali"),
            ],
            1,
        );
        assert_eq!(predicate.where_sql(), "");
        assert_eq!(predicate.params().count(), 0);

        let predicate = Predicate::build(
            &[
                filter("salary", "equals", "100"),
                filter("age", "greaterThan", "30"),
            ],
            1,
        );
        assert_eq!(
            predicate.where_sql(),
            "WHERE age > ($1::TEXT)::INT4",
        );
    }

    #[test]
    fn combines_surviving_clauses_with_and() {
        let predicate = Predicate::build(
            &[
                filter("name", "contains", "Ali"),
                filter("skip", "me", "now"),
                filter("age", "lessThan", "65"),
            ],
            3,
        );
        assert_eq!(
            predicate.where_sql(),
            "WHERE name ILIKE $3::TEXT AND age < ($4::TEXT)::INT4",
        );
        assert_eq!(predicate.params, ["%Ali%", "65"]);
    }

    #[test]
    fn escapes_like_wildcards_in_values() {
        let predicate =
            Predicate::build(&[filter("company", "contains", "50%_a\\b")], 1);
        assert_eq!(predicate.params, [r"%50\%\_a\\b%"]);
    }
}
