// Adapters layer: concrete implementations of the domain ports (clock, http notifier).

pub mod clock;
pub mod notifier;

pub use clock::{FixedClock, SystemClock};
pub use notifier::ServerChanNotifier;
