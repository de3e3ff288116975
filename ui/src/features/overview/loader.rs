//! Loader seam between the overview widget and whatever supplies its data.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;

use crate::utils::cancellation::CancellationToken;

use super::types::{PaginatedListType, PaginationInfo};

/// Asynchronous capability supplying one page of items.
///
/// Implementations resolve to `None` only when there is nothing to commit,
/// e.g. a failure they have already reported themselves. A query without
/// matches is a successful response with `total = 0`, `count = 0` and an
/// empty list.
#[async_trait(?Send)]
pub trait ItemLoader {
    async fn load(
        &self,
        page_info: &PaginationInfo,
        cancel: &CancellationToken,
    ) -> Option<PaginatedListType>;
}

/// Cloneable loader handle passed to the overview as a prop.
///
/// Equality is handle identity, so the component only re-runs work when it
/// is handed a genuinely different loader.
#[derive(Clone)]
pub struct Loader {
    inner: Rc<dyn ItemLoader>,
}

impl Loader {
    pub fn new(loader: impl ItemLoader + 'static) -> Self {
        Self {
            inner: Rc::new(loader),
        }
    }

    pub fn from_rc(loader: Rc<dyn ItemLoader>) -> Self {
        Self { inner: loader }
    }

    /// Wrap a plain async closure as a loader.
    pub fn from_fn<F>(load: F) -> Self
    where
        F: Fn(PaginationInfo, CancellationToken) -> LocalBoxFuture<'static, Option<PaginatedListType>>
            + 'static,
    {
        Self::new(FnLoader { load })
    }

    pub async fn load(
        &self,
        page_info: &PaginationInfo,
        cancel: &CancellationToken,
    ) -> Option<PaginatedListType> {
        self.inner.load(page_info, cancel).await
    }
}

impl PartialEq for Loader {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Loader")
    }
}

struct FnLoader<F> {
    load: F,
}

#[async_trait(?Send)]
impl<F> ItemLoader for FnLoader<F>
where
    F: Fn(PaginationInfo, CancellationToken) -> LocalBoxFuture<'static, Option<PaginatedListType>>
        + 'static,
{
    async fn load(
        &self,
        page_info: &PaginationInfo,
        cancel: &CancellationToken,
    ) -> Option<PaginatedListType> {
        (self.load)(page_info.clone(), cancel.clone()).await
    }
}
