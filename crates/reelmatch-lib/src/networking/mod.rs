use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::trace;

pub mod cache;

pub use cache::{CacheConfig, ResolutionCache};

/// Networking errors for HTTP client setup and bounded task execution
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP client construction failed: {source}")]
    ClientBuildFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Task join error: {source}")]
    TaskJoinError {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("Semaphore acquire error: {source}")]
    SemaphoreError {
        #[from]
        source: tokio::sync::AcquireError,
    },

    #[error("Invalid job count: {count} (must be > 0)")]
    InvalidJobCount { count: u32 },

    #[error("Invalid timeout: must be > 0")]
    InvalidTimeout,

    #[error("No work items provided")]
    NoItemsProvided,
}

/// HTTP and concurrency configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// Maximum number of concurrent jobs
    pub max_jobs: u32,
    /// Per-request timeout
    pub timeout: Duration,
    /// Enable per-task tracing
    pub trace_requests: bool,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            max_jobs: 4,
            timeout: Duration::from_secs(10),
            trace_requests: false,
        }
    }
}

/// Shared HTTP client plus a concurrency limit for fan-out work
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
    semaphore: Arc<Semaphore>,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        trace!("Initializing networking manager");

        if config.max_jobs == 0 {
            return Err(NetworkingError::InvalidJobCount {
                count: config.max_jobs,
            });
        }
        if config.timeout.is_zero() {
            return Err(NetworkingError::InvalidTimeout);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("reelmatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let semaphore = Arc::new(Semaphore::new(config.max_jobs as usize));

        trace!(
            "Networking manager initialized with {} concurrent jobs, {:?} timeout",
            config.max_jobs, config.timeout
        );

        Ok(Self {
            client,
            config,
            semaphore,
        })
    }

    pub fn max_jobs(&self) -> u32 {
        self.config.max_jobs
    }

    /// Run `worker` over every item with at most `max_jobs` in flight
    ///
    /// Results come back in input order.
    pub async fn run_bounded<T, R, F, Fut>(
        &self,
        items: Vec<T>,
        worker: F,
    ) -> Result<Vec<R>, NetworkingError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = R> + Send + 'static,
    {
        if items.is_empty() {
            return Err(NetworkingError::NoItemsProvided);
        }

        trace!("Starting bounded run over {} items", items.len());

        let worker = Arc::new(worker);
        let mut tasks = Vec::with_capacity(items.len());

        for item in items {
            let semaphore = self.semaphore.clone();
            let worker = worker.clone();
            let trace_requests = self.config.trace_requests;

            tasks.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await?;

                if trace_requests {
                    trace!("Processing bounded task");
                }

                Ok::<R, NetworkingError>(worker(item).await)
            }));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.await??);
        }

        trace!("Completed bounded run over {} items", results.len());
        Ok(results)
    }

    /// Get HTTP client for manual requests
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
