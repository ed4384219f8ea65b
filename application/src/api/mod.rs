//! REST API definitions.

pub mod user;

use crate::define_error;

pub use self::user::{Filter, Row, TableRequest, TableResponse};

define_error! {
    enum PaginationError {
        #[code = "PAGE_SIZE_INVALID"]
        #[status = BAD_REQUEST]
        #[message = "`pageSize` must be a positive integer"]
        InvalidPageSize,
    }
}
