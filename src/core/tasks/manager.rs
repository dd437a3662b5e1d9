use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::expression::ExpressionProvider;

/// Runs async work off the UI thread and hands results back through a
/// channel that the egui update loop drains once per frame.
///
/// Overlapping fetches are allowed; results are applied in arrival
/// order, so the last one to resolve wins.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
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

    pub fn fetch_expression(&self, provider: ExpressionProvider) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let fetch = runtime.block_on(provider.fetch_expression());

            let _ = sender.send(TaskResult::ExpressionFetched(fetch));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
