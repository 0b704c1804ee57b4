use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub orders_loaded_total: IntCounter,
    pub log_loads_total: IntCounterVec,
    pub orders_stored: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let orders_loaded_total =
            IntCounter::new("orders_loaded_total", "Orders appended by successful log loads")
                .expect("valid orders_loaded_total metric");

        let log_loads_total = IntCounterVec::new(
            Opts::new("log_loads_total", "Log loads by outcome"),
            &["outcome"],
        )
        .expect("valid log_loads_total metric");

        let orders_stored = IntGauge::new("orders_stored", "Orders currently held by the restaurant")
            .expect("valid orders_stored metric");

        registry
            .register(Box::new(orders_loaded_total.clone()))
            .expect("register orders_loaded_total");
        registry
            .register(Box::new(log_loads_total.clone()))
            .expect("register log_loads_total");
        registry
            .register(Box::new(orders_stored.clone()))
            .expect("register orders_stored");

        Self {
            registry,
            orders_loaded_total,
            log_loads_total,
            orders_stored,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
