use super::{Handler, Route};
use std::str::FromStr;
use zonemux_domain::{ConfigurationError, MatchMode, Pattern, RecordType, RecordTypeFilter};

/// An ordered registry of middleware, error middleware and nested zones.
///
/// Registration order is evaluation order. A router is built once and then
/// shared read-only by every query it serves.
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
    merge_params: bool,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone routers built with `merge_params(true)` see the parameters
    /// captured by their ancestors; otherwise each zone starts empty.
    pub fn merge_params(mut self, merge: bool) -> Self {
        self.merge_params = merge;
        self
    }

    pub fn merges_params(&self) -> bool {
        self.merge_params
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Register `handler` for every query reaching this router.
    pub fn use_handler(&mut self, handler: Handler) -> &mut Self {
        self.routes.push(Route::new(Pattern::catch_all(), handler));
        self
    }

    /// Register `handler` for `name` and everything beneath it, any type.
    pub fn use_at(&mut self, name: &str, handler: Handler) -> Result<&mut Self, ConfigurationError> {
        self.register(name, RecordTypeFilter::Any, MatchMode::Prefix, handler)
    }

    /// Like [`use_at`](Self::use_at) with a record-type filter given by
    /// name (`"A"`, `"mx"`, `"TYPE65"`, `"*"` for any).
    pub fn use_typed(
        &mut self,
        name: &str,
        record_type: &str,
        handler: Handler,
    ) -> Result<&mut Self, ConfigurationError> {
        let filter = RecordTypeFilter::from_str(record_type)?;
        self.register(name, filter, MatchMode::Prefix, handler)
    }

    /// Register several catch-all handlers, in order.
    pub fn all<I>(&mut self, handlers: I) -> &mut Self
    where
        I: IntoIterator<Item = Handler>,
    {
        for handler in handlers {
            self.use_handler(handler);
        }
        self
    }

    /// Mount `zone` at `name`. Queries under `name` enter the zone with
    /// the matched labels consumed.
    pub fn zone(&mut self, name: &str, zone: Router) -> Result<&mut Self, ConfigurationError> {
        self.use_at(name, Handler::zone(zone))
    }

    /// Register `handler` for queries of `record_type` at exactly `name`.
    pub fn on(
        &mut self,
        record_type: RecordType,
        name: &str,
        handler: Handler,
    ) -> Result<&mut Self, ConfigurationError> {
        self.register(name, RecordTypeFilter::Only(record_type), MatchMode::Exact, handler)
    }

    /// Register `handler` for queries of any type at exactly `name`.
    pub fn on_any(&mut self, name: &str, handler: Handler) -> Result<&mut Self, ConfigurationError> {
        self.register(name, RecordTypeFilter::Any, MatchMode::Exact, handler)
    }

    fn register(
        &mut self,
        name: &str,
        filter: RecordTypeFilter,
        mode: MatchMode,
        handler: Handler,
    ) -> Result<&mut Self, ConfigurationError> {
        let pattern = Pattern::compile(name, filter, mode)?;
        self.routes.push(Route::new(pattern, handler));
        Ok(self)
    }
}

macro_rules! record_type_routes {
    ($($method:ident => $record_type:ident),* $(,)?) => {
        impl Router {
            $(
                #[doc = concat!("Shorthand for [`on`](Self::on) with `RecordType::", stringify!($record_type), "`.")]
                pub fn $method(
                    &mut self,
                    name: &str,
                    handler: Handler,
                ) -> Result<&mut Self, ConfigurationError> {
                    self.on(RecordType::$record_type, name, handler)
                }
            )*
        }
    };
}

record_type_routes! {
    a => A,
    ns => NS,
    cname => CNAME,
    soa => SOA,
    ptr => PTR,
    mx => MX,
    txt => TXT,
    aaaa => AAAA,
    srv => SRV,
    caa => CAA,
}
