//! URL liveness probing with a HEAD-then-GET fallback.
//!
//! A probe walks a small fixed state machine:
//!
//! ```text
//! PENDING --HEAD--> LIVE            (status < 400)
//! PENDING --HEAD--> DEAD            (4xx/5xx response; no fallback)
//! PENDING --HEAD--> PRIMARY_FAILED  (transport error)
//! PRIMARY_FAILED --GET--> LIVE | DEAD
//! ```
//!
//! The fallback exists because some servers reject or mishandle HEAD; it
//! fires only on transport-level failures (refused connection, DNS,
//! timeout), never on an HTTP error status. There are no retries beyond the
//! one fallback: a URL that fails both probes is dead for this run and will
//! be re-probed the next time the pass runs.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::Result;

/// Default per-request timeout for a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default width of the probe worker pool.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Terminal state of a URL probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Some probe answered with a status below 400.
    Live,
    /// Both probes failed at the transport level, or a probe answered with
    /// a 4xx/5xx status.
    Dead,
}

/// HTTP client wrapper that checks URL reachability.
pub struct LinkChecker {
    client: reqwest::Client,
}

impl LinkChecker {
    /// Creates a checker with the default probe timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    /// Creates a checker with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("doctable/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Probes a single URL through the two-step state machine.
    pub async fn check(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => outcome_from_status(response.status()),
            Err(err) => {
                debug!("HEAD failed for {url}: {err}; falling back to GET");
                self.fallback(url).await
            },
        }
    }

    async fn fallback(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => outcome_from_status(response.status()),
            Err(err) => {
                debug!("GET fallback failed for {url}: {err}");
                ProbeOutcome::Dead
            },
        }
    }

    /// Probes every URL in `urls` exactly once across a worker pool of
    /// `concurrency` tasks and returns the liveness verdict per URL.
    ///
    /// Returns only after every dispatched probe has resolved, so callers
    /// never observe a partial result set.
    pub async fn check_all(
        &self,
        urls: &BTreeSet<String>,
        concurrency: usize,
    ) -> HashMap<String, bool> {
        let total = urls.len();
        let probes = urls.iter().map(|url| async move {
            let live = self.check(url).await == ProbeOutcome::Live;
            (url.clone(), live)
        });

        let mut completed = 0_usize;
        let mut results = HashMap::with_capacity(total);
        let mut probe_stream = stream::iter(probes).buffer_unordered(concurrency.max(1));
        while let Some((url, live)) = probe_stream.next().await {
            completed += 1;
            if live {
                info!("[{completed}/{total}] valid: {url}");
            } else {
                warn!("[{completed}/{total}] broken: {url}");
            }
            results.insert(url, live);
        }
        results
    }
}

fn outcome_from_status(status: reqwest::StatusCode) -> ProbeOutcome {
    if status.as_u16() < 400 {
        ProbeOutcome::Live
    } else {
        ProbeOutcome::Dead
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn head_success_is_live() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/docs/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let checker = LinkChecker::new().unwrap();
        let outcome = checker.check(&format!("{}/docs/", server.uri())).await;
        assert_eq!(outcome, ProbeOutcome::Live);
    }

    #[tokio::test]
    async fn head_4xx_is_dead_without_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        // A GET would also be answered, but the state machine must not
        // issue one for an HTTP-level failure.
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let checker = LinkChecker::new().unwrap();
        let outcome = checker.check(&format!("{}/gone", server.uri())).await;
        assert_eq!(outcome, ProbeOutcome::Dead);
    }

    #[tokio::test]
    async fn head_5xx_is_dead() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/err"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let checker = LinkChecker::new().unwrap();
        let outcome = checker.check(&format!("{}/err", server.uri())).await;
        assert_eq!(outcome, ProbeOutcome::Dead);
    }

    #[tokio::test]
    async fn unreachable_host_is_dead_after_fallback() {
        let checker = LinkChecker::with_timeout(Duration::from_millis(300)).unwrap();
        let outcome = checker.check("http://127.0.0.1:9/refused").await;
        assert_eq!(outcome, ProbeOutcome::Dead);
    }

    #[tokio::test]
    async fn check_all_probes_each_distinct_url_once() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/a"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/b"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let urls = BTreeSet::from([
            format!("{}/a", server.uri()),
            format!("{}/b", server.uri()),
        ]);

        let checker = LinkChecker::new().unwrap();
        let results = checker.check_all(&urls, DEFAULT_CONCURRENCY).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(&format!("{}/a", server.uri())), Some(&true));
        assert_eq!(results.get(&format!("{}/b", server.uri())), Some(&false));
    }
}
