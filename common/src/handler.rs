//! [`Handler`] abstractions.

use std::future::Future;

/// Executor of a single operation.
///
/// Both queries and infrastructure operations are expressed as [`Handler`]
/// implementations over the operation's arguments type.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
