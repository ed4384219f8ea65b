//! [`User`]-related [`Database`] implementations.

use common::{
    operations::{By, Select},
    pagination::TotalCount,
};
use tokio_postgres::types::ToSql;
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{
        database::{
            self,
            postgres::{predicate::Predicate, Connection},
            Postgres,
        },
        Database,
    },
    read::user::list,
};

impl<C> Database<Select<By<list::Rows, list::Selector>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = list::Rows;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Rows, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let list::Selector { arguments, filter } = by.into_inner();

        let limit = arguments.limit();
        let offset = arguments.offset();

        let predicate = Predicate::build(&filter, 3);
        let mut ps: Vec<&(dyn ToSql + Sync)> = vec![&limit, &offset];
        ps.extend(predicate.params());

        let sql = format!(
            "SELECT name, company, age, date \
             FROM users \
             {where_clause} \
             ORDER BY date DESC \
             LIMIT $1::INT8 \
             OFFSET $2::INT8",
            where_clause = predicate.where_sql(),
        );
        Ok(self
            .query(&sql, ps.as_slice())
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| User {
                name: row.get("name"),
                company: row.get("company"),
                age: row.get("age"),
                date: row.get("date"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<TotalCount, list::Filters>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<TotalCount, list::Filters>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filters = by.into_inner();

        let predicate = Predicate::build(&filters, 1);
        let ps = predicate.params().collect::<Vec<_>>();

        let sql = format!(
            "SELECT COUNT(*)::INT8 \
             FROM users \
             {where_clause}",
            where_clause = predicate.where_sql(),
        );
        self.query_opt(&sql, ps.as_slice())
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i64>(0).into())
    }
}
