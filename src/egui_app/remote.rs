//! Remote List Helper
//!
//! The registrar panels all follow the same fetch / show / reload
//! cycle, so the receiver bookkeeping lives here once: a list of
//! records, a loading flag and the channel the worker thread reports
//! back on. Failures keep the last-known-good items and are logged.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::shared::ApiError;

type FetchResult<T> = Result<Vec<T>, ApiError>;

/// A backend-owned list mirrored into the UI
pub struct RemoteList<T> {
    items: Vec<T>,
    loading: bool,
    pending: Option<Receiver<FetchResult<T>>>,
    /// True once at least one fetch finished (successfully or not)
    settled: bool,
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RemoteList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            pending: None,
            settled: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a first load has been started at some point
    pub fn started(&self) -> bool {
        self.settled || self.loading
    }

    /// Begin a fetch; the caller spawns the worker and sends on the
    /// returned channel. A newer fetch supersedes an older one by
    /// dropping its receiver.
    pub fn begin(&mut self) -> Sender<FetchResult<T>> {
        let (tx, rx) = channel();
        self.pending = Some(rx);
        self.loading = true;
        tx
    }

    /// Collect a finished fetch, if any; call once per frame
    pub fn poll(&mut self, what: &str) {
        let Some(rx) = &self.pending else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.pending = None;
        self.loading = false;
        self.settled = true;
        match result {
            Ok(items) => self.items = items,
            Err(e) => tracing::error!("failed to load {}: {}", what, e),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_poll_applies_items() {
        let mut list: RemoteList<i32> = RemoteList::new();
        let tx = list.begin();
        assert!(list.is_loading());

        tx.send(Ok(vec![1, 2, 3])).unwrap();
        list.poll("numbers");

        assert!(!list.is_loading());
        assert_eq!(list.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_error_keeps_previous_items() {
        let mut list: RemoteList<i32> = RemoteList::new();
        let tx = list.begin();
        tx.send(Ok(vec![1])).unwrap();
        list.poll("numbers");

        let tx = list.begin();
        tx.send(Err(ApiError::network("down"))).unwrap();
        list.poll("numbers");

        assert_eq!(list.items(), &[1]);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let mut list: RemoteList<i32> = RemoteList::new();
        let old_tx = list.begin();
        let new_tx = list.begin();

        // The old worker finishing cannot land anywhere.
        assert!(old_tx.send(Ok(vec![1])).is_err());

        new_tx.send(Ok(vec![2])).unwrap();
        list.poll("numbers");
        assert_eq!(list.items(), &[2]);
    }

    #[test]
    fn test_poll_without_pending_is_noop() {
        let mut list: RemoteList<i32> = RemoteList::new();
        list.poll("numbers");
        assert!(list.items().is_empty());
        assert!(!list.started());
    }
}
