use std::sync::{Arc, Mutex};
use zonemux_application::{
    error_middleware_fn, middleware_fn, Flow, Handler, HandlerError, Request,
};

/// Shared trace of which handlers ran, in order.
#[derive(Clone, Default)]
pub struct Trace(Arc<Mutex<Vec<String>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Normal handler that records `label` and returns `flow()`.
pub fn step<F>(trace: &Trace, label: &'static str, flow: F) -> Handler
where
    F: Fn() -> Flow + Send + Sync + 'static,
{
    let trace = trace.clone();
    middleware_fn(move |_req, _res| {
        trace.push(label);
        let flow = flow();
        Box::pin(async move { flow })
    })
}

/// Normal handler that records `label` and continues.
pub fn pass(trace: &Trace, label: &'static str) -> Handler {
    step(trace, label, Flow::next)
}

/// Normal handler that records `label` and fails with `message`.
pub fn fail(trace: &Trace, label: &'static str, message: &'static str) -> Handler {
    step(trace, label, move || Flow::fail(HandlerError::msg(message)))
}

/// Error handler that records `label:<error>` and returns `flow()`.
pub fn catch<F>(trace: &Trace, label: &'static str, flow: F) -> Handler
where
    F: Fn() -> Flow + Send + Sync + 'static,
{
    let trace = trace.clone();
    error_middleware_fn(move |err, _req, _res| {
        trace.push(format!("{label}:{err}"));
        let flow = flow();
        Box::pin(async move { flow })
    })
}

/// Normal handler that records `label` plus the params it saw, sorted.
pub fn params_probe(trace: &Trace, label: &'static str) -> Handler {
    let trace = trace.clone();
    middleware_fn(move |req, _res| {
        trace.push(format!("{label}{}", describe_params(req)));
        Box::pin(async { Flow::next() })
    })
}

pub fn describe_params(req: &Request) -> String {
    let mut pairs: Vec<_> = req
        .params()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    pairs.sort();
    format!("[{}]", pairs.join(","))
}
