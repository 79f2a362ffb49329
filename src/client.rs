// src/client.rs
//
// IndexClient: the one owner of client-side state.
//
// Holds the current word index, the last looked-up count and the request
// status. Index requests run on a worker thread; lookups are synchronous and
// never touch the network. Every request gets a generation number and only
// the newest issued request may write its result, so a slow old response
// can't overwrite a newer index.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread::{self, JoinHandle},
};

use crate::{
    core::{IndexService, WordIndex},
    error::ClientError,
    progress::Progress,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    /// Nothing requested yet, or the last request was cancelled
    #[default]
    Idle,
    /// A request is in flight
    Busy,
    /// The last request succeeded
    Ready,
    /// The last request failed; index left as it was
    Failed(String),
}

impl RequestStatus {
    #[inline]
    pub fn is_busy(&self) -> bool {
        matches!(self, RequestStatus::Busy)
    }
}

/// Copy of the client state for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSnapshot {
    pub status: RequestStatus,
    pub last_count: u64,
    /// URL of the index currently held
    pub last_url: Option<String>,
    /// Distinct words in the current index, if any
    pub indexed_words: Option<usize>,
}

/// How one index request ended.
#[derive(Debug)]
pub enum Outcome {
    Applied { words: usize },
    Failed(ClientError),
    /// A newer request was issued (or this one was cancelled); result dropped
    Superseded,
}

#[derive(Default)]
struct Shared {
    index: Option<WordIndex>,
    last_count: u64,
    last_url: Option<String>,
    status: RequestStatus,
    generation: u64,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct IndexClient<S> {
    service: Arc<S>,
    shared: Arc<Mutex<Shared>>,
}

impl<S: IndexService + 'static> IndexClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Ask the service to index `url`. Busy is set before this returns; the
    /// fetch itself runs on a worker thread.
    pub fn request_index(&self, url: &str, mut progress: Box<dyn Progress>) -> PendingRequest {
        let generation = {
            let mut st = lock(&self.shared);
            st.generation += 1;
            st.status = RequestStatus::Busy;
            st.generation
        };
        logf!("Index: request #{} url={}", generation, url);
        progress.begin(url);

        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.shared);
        let url = s!(url);

        let handle = thread::spawn(move || {
            // A panicking service is a failed request, not a stuck one
            let result = panic::catch_unwind(AssertUnwindSafe(|| service.fetch_index(&url)))
                .unwrap_or(Err(ClientError::WorkerPanicked));
            let outcome = apply(&shared, generation, &url, result);
            progress.finish(&outcome);
            outcome
        });

        PendingRequest { generation, handle }
    }

    /// Count for `word` in the current index (0 if absent or nothing indexed yet).
    /// Also becomes the last count.
    pub fn lookup_word(&self, word: &str) -> u64 {
        let mut st = lock(&self.shared);
        let n = st.index.as_ref().map_or(0, |idx| idx.count(word));
        st.last_count = n;
        logd!("Lookup: {:?} → {}", word, n);
        n
    }

    /// Drop the in-flight request, if any. Its response will be ignored.
    /// Returns whether anything was cancelled.
    pub fn cancel(&self) -> bool {
        let mut st = lock(&self.shared);
        if !st.status.is_busy() {
            return false;
        }
        st.generation += 1;
        st.status = RequestStatus::Idle;
        logf!("Index: cancelled (generation now {})", st.generation);
        true
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.shared).status.is_busy()
    }

    pub fn status(&self) -> RequestStatus {
        lock(&self.shared).status.clone()
    }

    pub fn last_count(&self) -> u64 {
        lock(&self.shared).last_count
    }

    pub fn snapshot(&self) -> ClientSnapshot {
        let st = lock(&self.shared);
        ClientSnapshot {
            status: st.status.clone(),
            last_count: st.last_count,
            last_url: st.last_url.clone(),
            indexed_words: st.index.as_ref().map(WordIndex::len),
        }
    }

    /// Most frequent words of the current index; empty when nothing is indexed.
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        let st = lock(&self.shared);
        match st.index.as_ref() {
            Some(idx) => idx.top(n).into_iter().map(|(w, c)| (s!(w), c)).collect(),
            None => Vec::new(),
        }
    }
}

// Runs on the worker: write the result only if this is still the newest request.
fn apply(
    shared: &Mutex<Shared>,
    generation: u64,
    url: &str,
    result: Result<WordIndex, ClientError>,
) -> Outcome {
    let mut st = lock(shared);

    if st.generation != generation {
        logd!("Index: dropping stale result #{} (current #{})", generation, st.generation);
        return Outcome::Superseded;
    }

    match result {
        Ok(index) => {
            let words = index.len();
            st.index = Some(index);
            st.last_url = Some(s!(url));
            st.status = RequestStatus::Ready;
            logf!("Index: #{} ok, {} words", generation, words);
            Outcome::Applied { words }
        }
        Err(e) => {
            loge!("Index: #{} failed for {}: {}", generation, url, e);
            st.status = RequestStatus::Failed(e.to_string());
            Outcome::Failed(e)
        }
    }
}

/// Handle to an issued request. Dropping it detaches the worker; the result
/// still lands in the client.
pub struct PendingRequest {
    generation: u64,
    handle: JoinHandle<Outcome>,
}

impl PendingRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker is done.
    pub fn wait(self) -> Outcome {
        self.handle
            .join()
            .unwrap_or(Outcome::Failed(ClientError::WorkerPanicked))
    }
}
