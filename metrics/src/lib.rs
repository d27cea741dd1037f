use std::{env, sync::LazyLock};

use opentelemetry_sdk::metrics::SdkMeterProvider;
use strum_macros::EnumIter;

// metrics stay on the no-op meter unless a collector is configured
static CONNECTION_URI: LazyLock<Option<String>> = LazyLock::new(|| {
    let host = env::var("PROMETHEUS_HOST").ok()?;
    let port = env::var("PROMETHEUS_PORT").unwrap_or("9090".into());

    Some(format!("http://{host}:{port}/api/v1/otlp/v1/metrics"))
});

const SERVICE_NAME: &str = "price_checker";

#[derive(Debug, EnumIter, Hash, Eq, PartialEq)]
pub enum Metrics {
    /// Counter for prices served from a fresh cache row
    PriceCacheHit,
    /// Counter for first time a URL was priced
    PriceCacheInsert,
    /// Counter for stale rows that were re-scraped
    PriceCacheUpdate,
    /// Counter for pages that failed to load or had no price
    ExtractionFailed,
    /// Counter for URLs on a domain without an extractor
    UnsupportedRetailer,
}

impl Metrics {
    fn metric_name(&self) -> &'static str {
        match self {
            Metrics::PriceCacheHit => "PRICE_CACHE_HIT",
            Metrics::PriceCacheInsert => "PRICE_CACHE_INSERT",
            Metrics::PriceCacheUpdate => "PRICE_CACHE_UPDATE",
            Metrics::ExtractionFailed => "EXTRACTION_FAILED",
            Metrics::UnsupportedRetailer => "UNSUPPORTED_RETAILER",
        }
    }
}

/// Flushes pending counters, a no-op when no collector is configured
pub fn shutdown() {
    if let Some(provider) = _private::PROVIDER.as_ref() {
        flush_provider(provider);
    }
}

// no tracing dependency here, so failures go straight to stderr
fn flush_provider(provider: &SdkMeterProvider) -> bool {
    match provider.shutdown() {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Failed to flush metrics: {err}");
            false
        }
    }
}

pub mod _private {
    pub use opentelemetry::KeyValue;

    use std::{collections::HashMap, sync::LazyLock, time::Duration};

    use opentelemetry::{
        global,
        metrics::{Counter, Meter},
    };
    use opentelemetry_otlp::{MetricExporter, Protocol, WithExportConfig};
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
    };
    use strum::IntoEnumIterator;

    use crate::{CONNECTION_URI, Metrics, SERVICE_NAME};

    static OTEL_METER: LazyLock<Meter> = LazyLock::new(|| {
        if let Some(provider) = PROVIDER.as_ref() {
            global::set_meter_provider(provider.clone());
        }

        global::meter(SERVICE_NAME)
    });

    pub static PROVIDER: LazyLock<Option<SdkMeterProvider>> = LazyLock::new(|| {
        let endpoint = CONNECTION_URI.as_ref()?;

        let exporter = MetricExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(endpoint.to_string())
            .build()
            .ok()?;

        let reader = PeriodicReader::builder(exporter)
            .with_interval(Duration::from_secs(1))
            .build();

        let resource = Resource::builder().with_service_name(SERVICE_NAME).build();

        Some(
            SdkMeterProvider::builder()
                .with_reader(reader)
                .with_resource(resource)
                .build(),
        )
    });

    pub static COUNTERS: LazyLock<HashMap<Metrics, Counter<u64>>> = LazyLock::new(|| {
        let mut mapping: HashMap<Metrics, Counter<u64>> = HashMap::new();

        for metric in crate::Metrics::iter() {
            let metric_meter = OTEL_METER.u64_counter(metric.metric_name()).build();

            mapping.insert(metric, metric_meter);
        }

        mapping
    });
}

#[macro_export]
macro_rules! put_metric {
    ($metric_name:expr, $added_value:expr $(, $key:literal => $value:expr)* $(,)?) => {{
        use $crate::_private::{KeyValue, COUNTERS};

        let metric_name: $crate::Metrics = $metric_name;
        let added_value: u64 = $added_value;

        let attributes: &[KeyValue] = &[
            $(KeyValue::new($key, $value),)*
        ];

        if let Some(counter) = COUNTERS.get(&metric_name) {
            counter.add(added_value, attributes);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_flush_reports_failure() {
        let provider = SdkMeterProvider::builder().build();

        flush_provider(&provider);

        assert!(!flush_provider(&provider));
    }

    #[test]
    fn counters_accept_caller_imported_metrics() {
        put_metric!(Metrics::PriceCacheHit, 1, "retailer" => "microcenter");
        put_metric!(Metrics::UnsupportedRetailer, 2);

        // no collector configured, so this stays a no-op
        shutdown();
    }
}
