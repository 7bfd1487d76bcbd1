use std::sync::Arc;
use tracing::{debug, info};
use zonemux_application::middleware::{static_zone, QueryLogger, ServFailOnError};
use zonemux_application::ports::PacketCodec;
use zonemux_application::{Handler, Nameserver, Router};
use zonemux_domain::{Config, ConfigurationError};
use zonemux_infrastructure::dns::HickoryCodec;

pub struct DnsServices {
    pub nameserver: Arc<Nameserver>,
    pub codec: Arc<dyn PacketCodec>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(zones = config.zones.len(), "Building middleware tree");

        let root = Self::build_router(config)?;
        let nameserver = Nameserver::new(root).with_completion(|req, res, err| {
            debug!(
                qname = %req.qname(),
                qtype = %req.qtype(),
                rcode = %res.packet().rcode,
                answers = res.packet().answers.len(),
                unhandled_error = err.is_some(),
                "Query complete"
            );
        });

        Ok(Self {
            nameserver: Arc::new(nameserver),
            codec: Arc::new(HickoryCodec::new()),
        })
    }

    /// Root layout: query logging first, then one zone per configured zone
    /// in file order, then the optional SERVFAIL fallback.
    fn build_router(config: &Config) -> Result<Router, ConfigurationError> {
        let mut root = Router::new();

        if config.logging.log_queries {
            root.use_handler(Handler::normal(QueryLogger));
        }

        for zone in &config.zones {
            root.zone(&zone.name, static_zone(zone)?)?;
            info!(zone = %zone.name, records = zone.records.len(), "Zone mounted");
        }

        if config.dispatch.servfail_on_unhandled_error {
            root.use_handler(Handler::error(ServFailOnError));
        }

        Ok(root)
    }
}
