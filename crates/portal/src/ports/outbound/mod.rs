//! Outbound ports - what the portal needs from its host

pub mod platform;
pub mod platform_port;

pub use platform::{DocumentProvider, PageDataProvider, SleepProvider};
pub use platform_port::PlatformPort;

#[cfg(any(test, feature = "testing"))]
pub use platform::MockPageDataProvider;
