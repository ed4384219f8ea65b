//! [`Query`] collection related to the multiple [`User`]s.
//!
//! [`User`]: crate::domain::User

use std::{convert::Infallible, fmt};

use common::{operations::By, pagination};

#[cfg(doc)]
use crate::domain::User;
use crate::{read::user::list, Service};

use super::{DatabaseQuery, Query};

/// Queries a slice of [`User`] rows.
pub type List = DatabaseQuery<By<list::Rows, list::Selector>>;

/// Queries total count of [`User`]s matching a filter set.
pub type TotalCount = DatabaseQuery<By<pagination::TotalCount, list::Filters>>;

/// Queries a single table view [`list::Page`]: the requested slice of
/// [`User`] rows together with the total count of all the matching ones.
///
/// This [`Query`] never errors: any failure of the underlying store (being
/// unreachable, a malformed filter value failing to coerce, etc.) is logged
/// for diagnostics and absorbed into an empty [`list::Page`] with a zero
/// total count. The caller cannot distinguish "no matches" from "query
/// error", deliberately.
#[derive(Clone, Debug)]
pub struct TableView {
    /// [`list::Selector`] of the [`list::Page`] to query.
    pub selector: list::Selector,
}

impl<Db> Query<TableView> for Service<Db>
where
    Self: Query<List, Ok = list::Rows>
        + Query<TotalCount, Ok = pagination::TotalCount>,
    <Self as Query<List>>::Err: fmt::Display,
    <Self as Query<TotalCount>>::Err: fmt::Display,
{
    type Ok = list::Page;
    type Err = Infallible;

    async fn execute(
        &self,
        TableView { selector }: TableView,
    ) -> Result<Self::Ok, Self::Err> {
        let total_count =
            match self.execute(TotalCount::by(selector.filter.clone())).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!("`User`s count query failed: {e}");
                    return Ok(list::Page::empty());
                }
            };

        let nodes = match self.execute(List::by(selector)).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("`User`s list query failed: {e}");
                return Ok(list::Page::empty());
            }
        };

        Ok(list::Page { nodes, total_count })
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        pagination::TotalCount,
        Handler,
    };

    use crate::{domain::User, read::user::list, Service};

    use super::TableView;

    /// In-memory stand-in for the relational store.
    #[derive(Clone, Debug)]
    struct InMemory {
        rows: Vec<User>,
        failing: bool,
    }

    impl Handler<Select<By<list::Rows, list::Selector>>> for InMemory {
        type Ok = list::Rows;
        type Err = &'static str;

        async fn execute(
            &self,
            Select(by): Select<By<list::Rows, list::Selector>>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.failing {
                return Err("store unreachable");
            }

            let selector = by.into_inner();
            let offset = usize::try_from(selector.arguments.offset()).unwrap();
            let limit = usize::try_from(selector.arguments.limit()).unwrap();

            let mut rows = self.rows.clone();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(rows.into_iter().skip(offset).take(limit).collect())
        }
    }

    impl Handler<Select<By<TotalCount, list::Filters>>> for InMemory {
        type Ok = TotalCount;
        type Err = &'static str;

        async fn execute(
            &self,
            _: Select<By<TotalCount, list::Filters>>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.failing {
                return Err("store unreachable");
            }
            Ok(i64::try_from(self.rows.len()).unwrap().into())
        }
    }

    fn user(name: &str, age: i32, date: &str) -> User {
        User {
            name: name.to_owned().into(),
            company: "Initech".to_owned().into(),
            age: age.into(),
            date: date.parse().unwrap(),
        }
    }

    fn store() -> InMemory {
        InMemory {
            rows: vec![
                user("Alice", 34, "2024-01-03"),
                user("Bob", 28, "2024-03-15"),
                user("Carol", 41, "2023-11-20"),
                user("Dave", 52, "2024-02-01"),
                user("Erin", 23, "2023-12-31"),
            ],
            failing: false,
        }
    }

    fn selector(page_index: u32, page_size: u32) -> list::Selector {
        list::Selector {
            arguments: list::Arguments::new(page_index, page_size).unwrap(),
            filter: Vec::new(),
        }
    }

    #[tokio::test]
    async fn counts_all_rows_regardless_of_page() {
        let service = Service::new(store());

        for page_index in 0..4 {
            let page = service
                .execute(TableView {
                    selector: selector(page_index, 2),
                })
                .await
                .unwrap();
            assert_eq!(i64::from(page.total_count), 5);
        }
    }

    #[tokio::test]
    async fn slices_pages_by_index_and_size() {
        let service = Service::new(store());

        let page = service
            .execute(TableView {
                selector: selector(0, 2),
            })
            .await
            .unwrap();
        assert_eq!(page.nodes.len(), 2);

        let page = service
            .execute(TableView {
                selector: selector(2, 2),
            })
            .await
            .unwrap();
        assert_eq!(page.nodes.len(), 1);

        let page = service
            .execute(TableView {
                selector: selector(3, 2),
            })
            .await
            .unwrap();
        assert!(page.nodes.is_empty());
        assert_eq!(i64::from(page.total_count), 5);
    }

    #[tokio::test]
    async fn orders_rows_by_date_descending() {
        let service = Service::new(store());

        let page = service
            .execute(TableView {
                selector: selector(0, 10),
            })
            .await
            .unwrap();

        let names = page
            .nodes
            .iter()
            .map(|u| u.name.as_ref())
            .collect::<Vec<&str>>();
        assert_eq!(names, ["Bob", "Dave", "Alice", "Erin", "Carol"]);
    }

    #[tokio::test]
    async fn absorbs_store_failures_into_an_empty_page() {
        let service = Service::new(InMemory {
            failing: true,
            ..store()
        });

        let page = service
            .execute(TableView {
                selector: selector(0, 10),
            })
            .await
            .unwrap();

        assert!(page.nodes.is_empty());
        assert_eq!(i64::from(page.total_count), 0);
    }
}
