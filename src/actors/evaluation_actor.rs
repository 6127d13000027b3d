use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::decision::DecisionEngine;
use crate::models::{EvaluatedApplication, LoanApplication};
use crate::storage::{DecisionCache, Storage};

/// Worker owning one partition of the application stream.
pub struct EvaluationActor {
    actor_id: usize,
    sender: mpsc::UnboundedSender<LoanApplication>,
    handle: JoinHandle<()>
}

impl EvaluationActor {
    /// Spawns a new actor that evaluates applications until its queue is closed.
    pub fn new<S: Storage>(actor_id: usize, engine: Arc<DecisionEngine>, cache: Arc<DecisionCache>, storage: Arc<S>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<LoanApplication>();

        let handle = spawn(async move {
            let mut evaluated = 0usize;

            while let Some(application) = receiver.recv().await {
                let request = application.request();
                let decision = cache.get_or_evaluate(&engine, &request).await;

                debug!("Application [{}] on actor [{actor_id}] {decision}", application.application_id);

                storage.save(EvaluatedApplication::new(application, decision));
                evaluated += 1;
            }

            debug!("Actor [{actor_id}] drained after [{evaluated}] applications");
        });

        Self { actor_id, sender, handle }
    }

    /// Queues an application, returning `false` if the actor has already stopped.
    pub fn accept(&self, application: LoanApplication) -> bool {
        match self.sender.send(application) {
            Ok(()) => true,
            Err(error) => {
                warn!("Actor [{}] dropped application [{}]", self.actor_id, error.0.application_id);
                false
            }
        }
    }

    /// Closes the queue and waits for every queued application to be evaluated.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
