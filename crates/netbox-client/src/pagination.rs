//! Cursor-based pagination over NetBox list endpoints
//!
//! NetBox answers list requests with `{"results": [...], "next": <url|null>}`.
//! `DevicePager` follows `next` one page at a time and only issues the next
//! request once every record of the current page has been handed out.

use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::models::DeviceRecord;
use crate::netbox_trait::HttpTransport;
use futures::Stream;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Lazy, finite, non-restartable sequence of devices
///
/// Any error ends the sequence: later calls to [`DevicePager::next_record`]
/// return `Ok(None)` without touching the network.
pub struct DevicePager<'a, T: HttpTransport + ?Sized> {
    transport: &'a T,
    next_path: Option<String>,
    query: Vec<(String, String)>,
    buffer: VecDeque<DeviceRecord>,
    pages_fetched: usize,
}

impl<T: HttpTransport + ?Sized> fmt::Debug for DevicePager<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevicePager")
            .field("base_url", &self.transport.base_url())
            .field("next_path", &self.next_path)
            .field("buffered", &self.buffer.len())
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}

impl<'a, T: HttpTransport + ?Sized> DevicePager<'a, T> {
    /// Start paginating at `entry_path`
    pub fn new(transport: &'a T, entry_path: impl Into<String>) -> Self {
        Self {
            transport,
            next_path: Some(entry_path.into()),
            query: Vec::new(),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Send `filters` with the first request.
    ///
    /// Subsequent pages follow the server cursor verbatim, which already
    /// carries the filters.
    #[must_use]
    pub fn with_query(mut self, filters: Vec<(String, String)>) -> Self {
        self.query = filters;
        self
    }

    /// Number of pages requested so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Whether the sequence has ended (cursor exhausted or an error occurred)
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_empty() && self.next_path.is_none()
    }

    /// Pull the next device, fetching a new page only when the buffer is empty
    pub async fn next_record(&mut self) -> Result<Option<DeviceRecord>, NetBoxError> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Ok(Some(record));
            }

            // Taken before the request so a failed page leaves nothing to resume.
            let Some(path) = self.next_path.take() else {
                return Ok(None);
            };
            let query = std::mem::take(&mut self.query);

            let page = self.fetch_page(&path, &query).await?;
            self.pages_fetched += 1;
            debug!(
                "Page {} from {}: {} devices, next: {:?}",
                self.pages_fetched,
                path,
                page.results.len(),
                page.next
            );

            self.buffer.extend(page.results);
            self.next_path = page.next.filter(|next| !next.is_empty());
        }
    }

    /// Fetch and decode one page; anything but `200 OK` is fatal
    async fn fetch_page(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<PaginatedResponse<DeviceRecord>, NetBoxError> {
        debug!("Fetching page: {}", path);
        let response = self.transport.get(path, query).await?;

        if response.status != 200 {
            return Err(NetBoxError::UnexpectedStatus {
                status: response.status,
                path: path.to_string(),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| NetBoxError::Decode {
            path: path.to_string(),
            message: format!(
                "{} - Response (first 500 chars): {}",
                e,
                response.body.chars().take(500).collect::<String>()
            ),
        })
    }

    /// Adapt the pager into a `Stream` of devices
    pub fn into_stream(self) -> impl Stream<Item = Result<DeviceRecord, NetBoxError>> + 'a {
        futures::stream::try_unfold(self, |mut pager| async move {
            let record = pager.next_record().await?;
            Ok::<_, NetBoxError>(record.map(|record| (record, pager)))
        })
    }
}
