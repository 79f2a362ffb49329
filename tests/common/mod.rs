// tests/common/mod.rs
//
// Stand-ins for the indexing service.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;

use word_indexer::{ClientError, core::{IndexService, WordIndex}};

pub type Reply = Result<WordIndex, ClientError>;

pub fn index_of(pairs: &[(&str, u64)]) -> WordIndex {
    pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
}

/// Answers from a queue, in call order. Counts calls.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl IndexService for ScriptedService {
    fn fetch_index(&self, url: &str) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Malformed("no scripted reply left".into())))
    }
}

/// Blocks each fetch until the test sends its reply through the gate.
/// Open the gate before issuing the request.
pub struct GatedService {
    gates: Mutex<HashMap<String, mpsc::Receiver<Reply>>>,
}

impl GatedService {
    pub fn new() -> Self {
        Self { gates: Mutex::new(HashMap::new()) }
    }
    pub fn gate(&self, url: &str) -> Sender<Reply> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }
}

impl IndexService for GatedService {
    fn fetch_index(&self, url: &str) -> Reply {
        let rx = self.gates.lock().unwrap().remove(url).expect("no gate opened for url");
        rx.recv()
            .unwrap_or_else(|_| Err(ClientError::Malformed("gate dropped".into())))
    }
}
