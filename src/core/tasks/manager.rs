use std::{
    sync::{
        atomic::{
            AtomicU64,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::http,
    source::{
        self,
        api,
        Endpoint,
        SourceConfig,
    },
};

/// Runs network work off the GUI thread. Results come back over a channel the
/// app drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    load_seq: AtomicU64,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, load_seq: AtomicU64::new(0) }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Starts a deck load and returns its sequence number; the caller feeds
    /// that into its [`super::LoadTracker`] so stale responses get discarded.
    pub fn load_deck(&self, config: SourceConfig) -> u64 {
        let seq = self.load_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let client = match http::http_client() {
                Ok(client) => client,
                Err(e) => {
                    let _ = sender.send(TaskResult::DeckLoaded { seq, result: Err(e) });
                    return;
                }
            };

            let result = runtime.block_on(source::load_deck(&client, &config));
            let _ = sender.send(TaskResult::DeckLoaded { seq, result });
        });

        seq
    }

    pub fn draw_remote_card(&self, endpoint: Endpoint) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Drawing a card...".to_string()));

            let result = match http::http_client() {
                Ok(client) => runtime.block_on(api::fetch_random_card(&client, &endpoint)),
                Err(e) => Err(e),
            };

            let _ = sender.send(TaskResult::RandomCard(result));
        });
    }

    pub fn check_source(&self, endpoint: Endpoint) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let online = match http::http_client() {
                Ok(client) => runtime.block_on(api::check_source(&client, &endpoint)),
                Err(_) => false,
            };

            let _ = sender.send(TaskResult::SourceStatus(online));
        });
    }
}
