use crate::errors::ObserverSetupError;
use crate::feed::{PriceObserver, VeggieFeed};

/// A restaurant watching a vegetable price feed. It reports every price
/// change and additionally announces a purchase intent whenever the new
/// price drops strictly below its threshold.
#[derive(Debug)]
pub struct Restaurant {
    name: String,
    purchase_threshold: f64,
}

impl Restaurant {
    pub fn new(name: &str, purchase_threshold: f64) -> Result<Self, ObserverSetupError> {
        if name.trim().is_empty() {
            return Err(ObserverSetupError::EmptyName);
        }

        return Ok(Self {
            name: name.to_string(),
            purchase_threshold,
        });
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn purchase_threshold(&self) -> f64 {
        return self.purchase_threshold;
    }

    /// Plain threshold check, no hysteresis: holds every time the price sits
    /// below the threshold, not only on the crossing.
    pub fn wants_to_buy(&self, price_per_pound: f64) -> bool {
        return price_per_pound < self.purchase_threshold;
    }

    pub fn price_change_notice(&self, feed: &VeggieFeed) -> String {
        return format!(
            "Notified {} of {}'s price change to {} per pound.",
            self.name,
            feed.kind(),
            feed.formatted_price()
        );
    }

    pub fn purchase_notice(&self, feed: &VeggieFeed) -> String {
        return format!("{} wants to buy some {}!", self.name, feed.kind());
    }
}

impl PriceObserver for Restaurant {
    fn price_changed(&self, feed: &VeggieFeed) {
        println!("{}", self.price_change_notice(feed));

        if self.wants_to_buy(feed.price_per_pound()) {
            println!("{}", self.purchase_notice(feed));
        }
    }
}
