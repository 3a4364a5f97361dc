//! Prometheus metrics for the HTTP surface.
//!
//! [`RpcMetrics`] owns a dedicated [`Registry`] that the `/metrics` endpoint
//! encodes into the Prometheus text exposition format.

use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry,
    register_int_gauge_with_registry, Encoder, Histogram, HistogramOpts, IntCounter, IntGauge,
    Opts, Registry, TextEncoder,
};

pub struct RpcMetrics {
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Agreements accepted into the pool.
    pub agreements_submitted: IntCounter,
    /// Agreements rejected as incomplete or malformed.
    pub agreements_rejected: IntCounter,
    /// Blocks sealed through the HTTP ingress.
    pub blocks_sealed: IntCounter,
    /// Valid submissions dropped because no proof was found.
    pub commits_failed: IntCounter,

    // ── Gauges ──────────────────────────────────────────────────────────
    pub chain_length: IntGauge,

    // ── Histograms ──────────────────────────────────────────────────────
    /// Wall time of the find-proof-and-seal step, in milliseconds.
    pub commit_time_ms: Histogram,
}

impl RpcMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let agreements_submitted = register_int_counter_with_registry!(
            Opts::new(
                "pactchain_agreements_submitted_total",
                "Agreements accepted into the transaction pool"
            ),
            registry
        )?;
        let agreements_rejected = register_int_counter_with_registry!(
            Opts::new(
                "pactchain_agreements_rejected_total",
                "Agreements rejected as incomplete or malformed"
            ),
            registry
        )?;
        let blocks_sealed = register_int_counter_with_registry!(
            Opts::new("pactchain_blocks_sealed_total", "Blocks sealed"),
            registry
        )?;
        let commits_failed = register_int_counter_with_registry!(
            Opts::new(
                "pactchain_commits_failed_total",
                "Submissions dropped because the proof search gave up"
            ),
            registry
        )?;
        let chain_length = register_int_gauge_with_registry!(
            Opts::new("pactchain_chain_length", "Blocks in the chain, genesis included"),
            registry
        )?;
        let commit_time_ms = register_histogram_with_registry!(
            HistogramOpts::new(
                "pactchain_proof_search_ms",
                "Time to find a proof and seal a block, in milliseconds"
            )
            .buckets(vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1_000.0, 5_000.0, 30_000.0]),
            registry
        )?;

        Ok(Self {
            registry,
            agreements_submitted,
            agreements_rejected,
            blocks_sealed,
            commits_failed,
            chain_length,
            commit_time_ms,
        })
    }

    /// Render every registered metric in the text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
