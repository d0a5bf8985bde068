//! Response bodies of the Stremio addon protocol.

mod manifest;
mod stream_response;

pub use manifest::AddonManifest;
pub use stream_response::{BehaviorHints, StremioStream, StreamResponse};
