use crate::actors::EvaluationActor;
use crate::decision::DecisionEngine;
use crate::models::LoanApplication;
use crate::storage::{DecisionCache, DecisionStorage};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info};

const DEFAULT_BACKPRESSURE: usize = 256;
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(300);

/// Batch pipeline evaluating loan applications from a CSV file.
pub struct AsyncEngine {
    engine: Arc<DecisionEngine>,
    storage: Arc<DecisionStorage>,
    cache: Arc<DecisionCache>,
    cache_capacity: u64,
    cache_timeout: Duration,
    backpressure: usize,
    workers: usize
}

impl AsyncEngine {
    /// Creates a new pipeline writing decisions into the provided storage.
    pub fn new(storage: Arc<DecisionStorage>) -> Self {
        Self {
            engine: Arc::new(DecisionEngine::new()),
            storage,
            cache: Arc::new(DecisionCache::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TIMEOUT)),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            backpressure: DEFAULT_BACKPRESSURE,
            workers: available_parallelism().map(NonZeroUsize::get).unwrap_or(4)
        }
    }

    pub fn with_decision_engine(mut self, engine: DecisionEngine) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.cache = Arc::new(DecisionCache::new(self.cache_capacity, self.cache_timeout));
        self
    }

    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self.cache = Arc::new(DecisionCache::new(self.cache_capacity, self.cache_timeout));
        self
    }

    /// Orchestrates the end-to-end evaluation pipeline for a CSV file.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<LoanApplication>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_applications(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<LoanApplication>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<LoanApplication>() {
                match result {
                    Ok(application) => {
                        if sender.blocking_send(application).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_applications(&self, mut receiver: mpsc::Receiver<LoanApplication>) -> anyhow::Result<()> {
        let actors: Vec<EvaluationActor> = (0..self.workers)
            .map(|actor_id| EvaluationActor::new(actor_id, self.engine.clone(), self.cache.clone(), self.storage.clone()))
            .collect();

        let mut received = 0usize;

        // Partitioning by application id keeps a given application on a single actor.
        while let Some(application) = receiver.recv().await {
            let application_id = application.application_id;
            let actor = &actors[application_id as usize % actors.len()];

            if !actor.accept(application) {
                error!("Evaluation actor could not accept application [{application_id}]");
            }

            received += 1;
        }

        for actor in actors {
            if let Err(error) = actor.despawn().await {
                error!("An evaluation actor did not despawn gracefully: {error:?}");
            }
        }

        info!("Evaluated [{received}] applications on [{}] actors", self.workers);

        Ok(())
    }
}
