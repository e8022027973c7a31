mod metrics_gateway;

pub use metrics_gateway::MetricsGateway;

use const_format::concatcp;

const METRIC_PREFIX: &str = "duck_simulator";

pub(crate) const QUACKS: &str = concatcp!(METRIC_PREFIX, ".quacks");
