//! Async actions run on behalf of an executor.
//!
//! An action receives a JSON payload, validates it into a typed shape and
//! forwards the result to a [`BidiEventsProtocol`]. The only registered
//! action is `bidi.session.subscribe`.

pub mod def;
pub mod registry;
pub mod subscribe;

pub use def::{ActionDef, BidiEventsProtocol, BoxFut};
pub use registry::{ActionId, action_name, dispatch_action, lookup_action, run_action};
pub use subscribe::SessionSubscribeAction;
