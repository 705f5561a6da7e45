//! Dispatching incoming directives to request handlers.

use tracing::{debug, info};

use crate::discovery::{DiscoveryPayloadBuilder, DISCOVERY_NAMESPACE};
use crate::envelope::{Request, Response, DISCOVER};
use crate::error::{Error, Result};

/// A handler for one or more kinds of directives.
pub trait RequestHandler {
    fn can_handle(&self, request: &Request) -> bool;

    fn handle(&self, request: &Request) -> Result<Response>;
}

impl<T> RequestHandler for &T
where
    T: RequestHandler,
{
    fn can_handle(&self, request: &Request) -> bool {
        (**self).can_handle(request)
    }

    fn handle(&self, request: &Request) -> Result<Response> {
        (**self).handle(request)
    }
}

/// Answers `Alexa.Discovery` / `Discover` directives with the endpoints
/// populated by the provided closure.
pub struct DiscoveryHandler<F> {
    populate: F,
}

impl<F> DiscoveryHandler<F>
where
    F: Fn(&Request, &mut DiscoveryPayloadBuilder) -> Result<()>,
{
    pub const fn new(populate: F) -> Self {
        Self { populate }
    }
}

impl<F> RequestHandler for DiscoveryHandler<F>
where
    F: Fn(&Request, &mut DiscoveryPayloadBuilder) -> Result<()>,
{
    fn can_handle(&self, request: &Request) -> bool {
        request.is(DISCOVERY_NAMESPACE, DISCOVER)
    }

    fn handle(&self, request: &Request) -> Result<Response> {
        let mut builder = DiscoveryPayloadBuilder::new();
        (self.populate)(request, &mut builder)?;

        let payload = builder.build()?;
        Response::discover_reply(request, &payload)
    }
}

/// An ordered list of handlers; the first one accepting a request handles it.
#[derive(Default)]
pub struct Skill<'a> {
    handlers: Vec<Box<dyn RequestHandler + 'a>>,
}

impl<'a> Skill<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(mut self, handler: impl RequestHandler + 'a) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn invoke(&self, request: &Request) -> Result<Response> {
        let header = request.header();
        debug!(
            "Dispatching {}.{} ({})",
            header.namespace, header.name, header.message_id
        );

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.can_handle(request))
            .ok_or_else(|| Error::NoHandler {
                namespace: header.namespace.clone(),
                name: header.name.clone(),
            })?;

        let response = handler.handle(request)?;
        info!(
            "Handled {}.{} with {}.{}",
            header.namespace,
            header.name,
            response.event.header.namespace,
            response.event.header.name
        );

        Ok(response)
    }

    /// Parse a JSON directive, dispatch it and serialize the response.
    pub fn invoke_json(&self, json: &str) -> Result<String> {
        self.invoke(&Request::from_json(json)?)?.to_json()
    }
}
