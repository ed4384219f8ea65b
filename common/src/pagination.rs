//! Abstractions for offset pagination.

use derive_more::{Display, From, Into};

/// A page of `N`odes selected by some [`Arguments`].
///
/// Invariant: [`Page::total_count`] reflects all the nodes matching the
/// selection regardless of the requested [`Arguments`], while the
/// [`Page::nodes`] length never exceeds the requested page size.
#[derive(Clone, Debug)]
pub struct Page<N> {
    /// Nodes of this [`Page`].
    pub nodes: Vec<N>,

    /// [`TotalCount`] of the nodes matching the selection, ignoring
    /// pagination.
    pub total_count: TotalCount,
}

impl<N> Page<N> {
    /// Creates a new empty [`Page`] with a zero [`TotalCount`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            total_count: TotalCount(0),
        }
    }
}

/// Total count of nodes matching a selection, ignoring pagination.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, PartialEq,
)]
pub struct TotalCount(i64);

/// Offset pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// Zero-based index of the requested page.
    page_index: u32,

    /// Number of nodes on a single page.
    page_size: u32,
}

impl Arguments {
    /// Creates new [`Arguments`] from the provided page index and size.
    ///
    /// [`None`] is returned if the `page_size` is zero.
    #[must_use]
    pub fn new(page_index: u32, page_size: u32) -> Option<Self> {
        (page_size > 0).then_some(Self {
            page_index,
            page_size,
        })
    }

    /// Returns the maximum number of nodes requested by these [`Arguments`].
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Returns the number of nodes to skip before the page requested by
    /// these [`Arguments`] begins.
    ///
    /// The product is computed in `u64` (which cannot overflow for `u32`
    /// inputs) and saturates to [`i64::MAX`] beyond the `i64` range.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::try_from(u64::from(self.page_index) * u64::from(self.page_size))
            .unwrap_or(i64::MAX)
    }
}

/// Pagination selector.
#[derive(Clone, Debug)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}

#[cfg(test)]
mod spec {
    use super::{Arguments, Page, TotalCount};

    #[test]
    fn rejects_zero_page_size() {
        assert!(Arguments::new(0, 0).is_none());
        assert!(Arguments::new(7, 0).is_none());
        assert!(Arguments::new(0, 1).is_some());
    }

    #[test]
    fn offset_is_page_index_times_page_size() {
        let args = Arguments::new(0, 10).unwrap();
        assert_eq!(args.limit(), 10);
        assert_eq!(args.offset(), 0);

        let args = Arguments::new(2, 25).unwrap();
        assert_eq!(args.limit(), 25);
        assert_eq!(args.offset(), 50);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        // In range: 2^31 * 2^31 = 2^62 fits into `i64`.
        let args = Arguments::new(1 << 31, 1 << 31).unwrap();
        assert_eq!(args.offset(), 1_i64 << 62);

        // Out of range: (2^32 - 1)^2 exceeds `i64::MAX`.
        let args = Arguments::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(args.offset(), i64::MAX);
    }

    #[test]
    fn empty_page_has_zero_total_count() {
        let page = Page::<()>::empty();
        assert!(page.nodes.is_empty());
        assert_eq!(page.total_count, TotalCount::from(0));
    }
}
