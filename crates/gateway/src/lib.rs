pub mod bridge;
pub mod port;
pub mod proxy;

pub use bridge::BridgeGateway;
pub use port::{MessagingGateway, SendOutcome};
pub use proxy::{ProxyError, StatusProxy};
