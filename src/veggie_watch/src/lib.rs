pub mod errors;
pub mod feed;
pub mod restaurant;

pub use errors::{FeedSetupError, ObserverSetupError};
pub use feed::{PriceObserver, VeggieFeed};
pub use restaurant::Restaurant;

pub fn init_logger() {
    let _ = env_logger::try_init();
}
