//! Debounce, throttle, sleep, and timing helpers built on tokio's clock.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Wrapper returned by [`debounce`].
pub struct Debounced<A> {
    f: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Delays `f` until `wait` has passed without another call; only the last
/// call of a burst runs, with its own arguments.
///
/// [`Debounced::call`] must run inside a tokio runtime.
pub fn debounce<A, F>(f: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        f: Arc::new(f),
        wait,
        pending: Mutex::new(None),
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// Schedules `f(args)` after the wait, cancelling any call still pending.
    pub fn call(&self, args: A) {
        let mut pending = lock(&self.pending);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        let f = Arc::clone(&self.f);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f(args);
        }));
    }

    /// Drops the pending call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = lock(&self.pending).take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.pending)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Wrapper returned by [`throttle`].
pub struct Throttled<A> {
    f: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    last: Mutex<Option<Instant>>,
}

/// Runs `f` at most once per `wait`, immediately on the first call.
pub fn throttle<A, F>(f: F, wait: Duration) -> Throttled<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled {
        f: Box::new(f),
        wait,
        last: Mutex::new(None),
    }
}

impl<A> Throttled<A> {
    /// Runs `f(args)` if the window since the last accepted call has passed.
    /// Returns whether it ran.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut last = lock(&self.last);
            if last.is_some_and(|at| now.duration_since(at) < self.wait) {
                return false;
            }
            *last = Some(now);
        }
        (self.f)(args);
        true
    }
}

pub async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Awaits `fut`, logging how long it took under `label`.
pub async fn measure_performance<F: Future>(label: &str, fut: F) -> F::Output {
    let start = Instant::now();
    let output = fut.await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!("{label}: {elapsed_ms:.2}ms");
    output
}
