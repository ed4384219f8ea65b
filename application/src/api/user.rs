//! `User` table view API definitions.

use axum::{Extension, Json};
use common::Date;
use serde::{Deserialize, Serialize};
use service::{query, read::user::list, Query as _};

use crate::{api::PaginationError, Error, Service};

/// Default number of rows on a table view page.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Handles one paginated, filtered table view listing request.
#[tracing::instrument(
    skip_all,
    fields(
        page_index = request.page_index,
        page_size = request.page_size,
        filters = request.filters.len(),
    ),
)]
pub async fn search(
    Extension(service): Extension<Service>,
    Json(request): Json<TableRequest>,
) -> Result<Json<TableResponse>, Error> {
    let TableRequest {
        page_index,
        page_size,
        filters,
    } = request;

    let arguments = list::Arguments::new(page_index, page_size)
        .ok_or(PaginationError::InvalidPageSize)?;

    let page = service
        .execute(query::users::TableView {
            selector: list::Selector {
                arguments,
                filter: filters.into_iter().map(Into::into).collect(),
            },
        })
        .await
        .unwrap_or_else(|e| match e {});

    Ok(Json(TableResponse {
        count: page.total_count.into(),
        data: page.nodes.into_iter().map(Into::into).collect(),
    }))
}

/// Request of one paginated, filtered table view listing.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableRequest {
    /// Zero-based index of the requested page.
    pub page_index: u32,

    /// Number of rows on a single page.
    pub page_size: u32,

    /// Ordered sequence of [`Filter`]s to apply.
    pub filters: Vec<Filter>,
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            filters: Vec::new(),
        }
    }
}

/// Single column filter of a [`TableRequest`].
#[derive(Debug, Deserialize)]
pub struct Filter {
    /// Name of the field to filter by.
    pub field: String,

    /// Name of the comparison operator.
    pub operator: String,

    /// [`Value`] to compare the field against.
    pub value: Value,
}

impl From<Filter> for list::Filter {
    fn from(filter: Filter) -> Self {
        let Filter {
            field,
            operator,
            value,
        } = filter;

        Self {
            field,
            operator,
            value: match value {
                Value::Integer(num) => num.to_string(),
                Value::Float(num) => num.to_string(),
                Value::Text(text) => text,
            },
        }
    }
}

/// Value of a [`Filter`]: a number, or a string (including dates in
/// `YYYY-MM-DD` format).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value.
    Integer(i64),

    /// Floating point value.
    Float(f64),

    /// Textual value.
    Text(String),
}

/// Response to a [`TableRequest`].
#[derive(Debug, Serialize)]
pub struct TableResponse {
    /// [`Row`]s of the requested page, ordered by date descending.
    pub data: Vec<Row>,

    /// Total count of the rows matching the filter set, ignoring
    /// pagination.
    pub count: i64,
}

/// Single row of a [`TableResponse`].
#[derive(Debug, Serialize)]
pub struct Row {
    /// Name of the user.
    pub name: String,

    /// Company the user belongs to.
    pub company: String,

    /// Age of the user, in full years.
    pub age: i32,

    /// Date associated with the user record.
    pub date: Date,
}

impl From<list::Node> for Row {
    fn from(node: list::Node) -> Self {
        Self {
            name: node.name.into(),
            company: node.company.into(),
            age: node.age.into(),
            date: node.date,
        }
    }
}
