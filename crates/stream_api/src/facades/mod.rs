//! Services that turn a stream request into the streams to offer.

mod stream_resolver;

pub use stream_resolver::StreamResolver;
