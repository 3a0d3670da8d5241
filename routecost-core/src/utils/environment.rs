use crate::utils::{DefaultRandom, Random, ThreadPool};
use std::sync::Arc;

/// Specifies a logger type which is used to log meta information about the estimation process.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps data parallelism settings.
#[derive(Clone)]
pub struct Parallelism {
    available_cpus: usize,
    thread_pool: Arc<ThreadPool>,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with the given amount of cpus to be used.
    pub fn new_with_cpus(available_cpus: usize) -> Self {
        Self { available_cpus, thread_pool: Arc::new(ThreadPool::new(available_cpus)) }
    }

    /// Returns amount of cpus available for data parallelism.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }

    /// Executes given operation on the dedicated thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.thread_pool.execute(op)
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new_with_cpus(num_cpus::get())
    }
}

/// Keeps track of environment specific information which influences estimation behavior.
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,
    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,
    /// A logger interface.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates a new instance of `Environment` with the given fixed seed and default settings
    /// for everything else.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Parallelism::default(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
