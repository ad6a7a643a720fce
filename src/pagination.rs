//! Drive a cursor-paginated method to exhaustion as a stream of pages.

use crate::client::GongClient;
use crate::error::GongError;
use crate::gong_types::{Call, Deal, Email, User};
use crate::types::{
    ListCallsParams, ListDealsParams, ListEmailsParams, ListUsersParams, PaginatedResponse,
};

use futures_util::stream::{self, Stream};
use std::future::Future;

/// Where the next fetch starts.  `Start` carries whatever cursor the caller began with.
enum PageState {
    Start(Option<String>),
    Next(String),
    Done,
}

/// Call `fetch` with `first` and then with each returned cursor, verbatim, until a page comes
/// back without one.  An error is yielded and ends the stream.
pub fn pages<T, F, Fut>(
    first: Option<String>,
    mut fetch: F,
) -> impl Stream<Item = Result<PaginatedResponse<T>, GongError>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, GongError>>,
{
    stream::try_unfold(PageState::Start(first), move |state| {
        let fetching = match state {
            PageState::Start(cursor) => Some(fetch(cursor)),
            PageState::Next(cursor) => Some(fetch(Some(cursor))),
            PageState::Done => None,
        };
        async move {
            let Some(fetching) = fetching else {
                return Ok(None);
            };
            let page = fetching.await?;
            let next = match &page.cursor {
                Some(cursor) => PageState::Next(cursor.clone()),
                None => PageState::Done,
            };
            Ok(Some((page, next)))
        }
    })
}

impl GongClient {
    /// Every page of [`list_calls`](Self::list_calls), starting at `params.cursor`.
    pub fn calls_pages(
        &self,
        params: ListCallsParams,
    ) -> impl Stream<Item = Result<PaginatedResponse<Call>, GongError>> + '_ {
        let first = params.cursor.clone();
        pages(first, move |cursor| {
            let params = ListCallsParams {
                cursor,
                ..params.clone()
            };
            async move { self.list_calls(&params).await }
        })
    }

    /// Every page of [`list_users`](Self::list_users).  The cursor travels as a query parameter.
    pub fn users_pages(
        &self,
        params: ListUsersParams,
    ) -> impl Stream<Item = Result<PaginatedResponse<User>, GongError>> + '_ {
        let first = params.cursor.clone();
        pages(first, move |cursor| {
            let params = ListUsersParams {
                cursor,
                ..params.clone()
            };
            async move { self.list_users(&params).await }
        })
    }

    /// Every page of [`list_deals`](Self::list_deals).  The cursor is sent beside `filter` in the
    /// request body.
    pub fn deals_pages(
        &self,
        params: ListDealsParams,
    ) -> impl Stream<Item = Result<PaginatedResponse<Deal>, GongError>> + '_ {
        let first = params.cursor.clone();
        pages(first, move |cursor| {
            let params = ListDealsParams {
                cursor,
                ..params.clone()
            };
            async move { self.list_deals(&params).await }
        })
    }

    /// Every page of [`list_emails`](Self::list_emails), cursor in the body like `deals_pages`.
    pub fn emails_pages(
        &self,
        params: ListEmailsParams,
    ) -> impl Stream<Item = Result<PaginatedResponse<Email>, GongError>> + '_ {
        let first = params.cursor.clone();
        pages(first, move |cursor| {
            let params = ListEmailsParams {
                cursor,
                ..params.clone()
            };
            async move { self.list_emails(&params).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::{StreamExt, TryStreamExt};
    use std::cell::RefCell;

    fn page(records: Vec<u32>, cursor: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            records,
            cursor: cursor.map(str::to_string),
            total_records: Some(5),
        }
    }

    #[tokio::test]
    async fn follows_returned_cursors_until_none() {
        let seen = RefCell::new(Vec::new());
        let all: Vec<PaginatedResponse<u32>> = pages(None, |cursor: Option<String>| {
            seen.borrow_mut().push(cursor.clone());
            async move {
                Ok(match cursor.as_deref() {
                    None => page(vec![1, 2], Some("opaque-a")),
                    Some("opaque-a") => page(vec![3, 4], Some("opaque-b")),
                    _ => page(vec![5], None),
                })
            }
        })
        .try_collect()
        .await
        .unwrap();

        let records: Vec<u32> = all.into_iter().flat_map(|p| p.records).collect();
        assert_eq!(records, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *seen.borrow(),
            vec![
                None,
                Some("opaque-a".to_string()),
                Some("opaque-b".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn starts_from_caller_cursor() {
        let seen = RefCell::new(Vec::new());
        let count = pages(Some("resume".to_string()), |cursor: Option<String>| {
            seen.borrow_mut().push(cursor);
            async { Ok(page(vec![9], None)) }
        })
        .count()
        .await;
        assert_eq!(count, 1);
        assert_eq!(*seen.borrow(), vec![Some("resume".to_string())]);
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let results: Vec<Result<PaginatedResponse<u32>, GongError>> =
            pages(None, |cursor: Option<String>| async move {
                match cursor {
                    None => Ok(page(vec![1], Some("next"))),
                    Some(_) => Err(GongError::Api {
                        status: 500,
                        body: "boom".to_string(),
                    }),
                }
            })
            .collect()
            .await;
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().status(), Some(500));
    }
}
