use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use kanal::AsyncReceiver;
use lexi_config::fetch::FetchConfig;
use lexi_types::{FetchOutcome, FetchReport, LookupRequest, WordKey};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::dictionary::DictionaryBackend;
use crate::error::InvalidRequest;
use crate::plan::FetchPlan;
use crate::resolver::resolve;

type Outcomes = Arc<Mutex<Vec<(WordKey, FetchOutcome)>>>;

/// Fans word lookups out over a fixed pool of workers sharing one queue
pub struct FetchScheduler<B: ?Sized> {
    backend: Arc<B>,
}

impl<B> FetchScheduler<B>
where
    B: DictionaryBackend + ?Sized + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Resolve every word once.
    ///
    /// The config is validated before any lookup starts. Report order follows completion, not
    /// input order.
    pub async fn fetch_all(
        &self,
        words: &BTreeSet<WordKey>,
        config: &FetchConfig,
    ) -> Result<FetchReport, InvalidRequest> {
        self.fetch_all_with_cancel(words, config, CancellationToken::new())
            .await
    }

    /// Like [`fetch_all`](Self::fetch_all), words not resolved before `cancel` fires are reported
    /// as failed
    pub async fn fetch_all_with_cancel(
        &self,
        words: &BTreeSet<WordKey>,
        config: &FetchConfig,
        cancel: CancellationToken,
    ) -> Result<FetchReport, InvalidRequest> {
        let plan = FetchPlan::new(config, words.len())?;
        let started = Instant::now();

        tracing::info!(
            "Fetching definitions for {} words with {} workers",
            words.len(),
            plan.workers
        );

        let outcomes: Outcomes = Arc::new(Mutex::new(Vec::with_capacity(words.len())));

        // Queue holds every word up front, sends never wait
        let (queue_tx, queue_rx) = kanal::bounded_async(words.len());
        for word in words {
            let request = LookupRequest::new(word.clone(), Arc::clone(&plan.languages));
            if let Err(e) = queue_tx.send(request).await {
                tracing::error!("Work queue closed while filling: {}", e);
                break;
            }
        }
        // Closed: workers exit once it is drained
        drop(queue_tx);

        let mut workers = JoinSet::new();
        for id in 0..plan.workers {
            workers.spawn(worker(
                id,
                Arc::clone(&self.backend),
                queue_rx.clone(),
                Arc::clone(&outcomes),
                plan.clone(),
                cancel.clone(),
            ));
        }
        drop(queue_rx);

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Fetch worker stopped abnormally: {}", e);
            }
        }

        let mut outcomes = std::mem::take(&mut *outcomes.lock().await);

        // Words a dead worker or a cancellation left behind
        let unresolved: Vec<WordKey> = {
            let resolved: HashSet<&WordKey> = outcomes.iter().map(|(word, _)| word).collect();
            words
                .iter()
                .filter(|word| !resolved.contains(word))
                .cloned()
                .collect()
        };
        let reason = if cancel.is_cancelled() {
            "cancelled"
        } else {
            "worker stopped before resolving"
        };
        for word in unresolved {
            outcomes.push((word, FetchOutcome::Failed(reason.to_string())));
        }

        let report = FetchReport::from_outcomes(outcomes);
        tracing::info!(
            "Fetched {} definitions ({} not found, {} failed) in {:?}",
            report.found.len(),
            report.not_found.len(),
            report.failed.len(),
            started.elapsed()
        );

        Ok(report)
    }
}

async fn worker<B>(
    id: usize,
    backend: Arc<B>,
    queue: AsyncReceiver<LookupRequest>,
    outcomes: Outcomes,
    plan: FetchPlan,
    cancel: CancellationToken,
) where
    B: DictionaryBackend + ?Sized,
{
    tracing::debug!("Worker {} started", id);

    loop {
        let request = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = queue.recv() => match received {
                Ok(request) => request,
                // drained and closed
                Err(_) => break,
            },
        };

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => FetchOutcome::Failed("cancelled".to_string()),
            outcome = resolve(backend.as_ref(), &request, plan.timeout, plan.retry) => outcome,
        };

        outcomes.lock().await.push((request.word, outcome));
    }

    tracing::debug!("Worker {} finished", id);
}
