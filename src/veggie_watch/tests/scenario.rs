use std::sync::{Arc, Mutex};

use veggie_watch::feed::{PriceObserver, VeggieFeed};
use veggie_watch::restaurant::Restaurant;

/// Wraps a restaurant and records, per notification, whether it wanted to
/// buy at the quoted price.
#[derive(Debug)]
struct PurchaseLog {
    restaurant: Restaurant,
    decisions: Mutex<Vec<bool>>,
}

impl PurchaseLog {
    fn new(name: &str, purchase_threshold: f64) -> Arc<Self> {
        return Arc::new(Self {
            restaurant: Restaurant::new(name, purchase_threshold)
                .expect("Failed to create restaurant"),
            decisions: Mutex::new(Vec::new()),
        });
    }

    fn decisions(&self) -> Vec<bool> {
        return self
            .decisions
            .lock()
            .expect("Failed to lock decisions")
            .clone();
    }
}

impl PriceObserver for PurchaseLog {
    fn price_changed(&self, feed: &VeggieFeed) {
        let wants_to_buy = self.restaurant.wants_to_buy(feed.price_per_pound());

        self.decisions
            .lock()
            .expect("Failed to lock decisions")
            .push(wants_to_buy);
    }
}

#[test]
pub fn carrot_price_watch_scenario() {
    let mackays = PurchaseLog::new("Mackay's", 0.77);
    let johnnys = PurchaseLog::new("Johnny's Sports Bar", 0.74);
    let salad_kingdom = PurchaseLog::new("Salad Kingdom", 0.75);

    let mut carrots = VeggieFeed::new("Carrots", 0.82).expect("Failed to create feed");
    carrots.attach(mackays.clone());
    carrots.attach(johnnys.clone());
    carrots.attach(salad_kingdom.clone());

    carrots.set_price(0.79);
    carrots.set_price(0.76);
    carrots.set_price(0.74);
    carrots.set_price(0.81);

    // 0.79: above every threshold. 0.76: only Mackay's (0.77) buys.
    // 0.74: only Salad Kingdom (0.75) buys, the 0.74 threshold is not
    // strictly undercut. 0.81: above every threshold again.
    assert_eq!(mackays.decisions(), vec![false, true, false, false]);
    assert_eq!(johnnys.decisions(), vec![false, false, false, false]);
    assert_eq!(salad_kingdom.decisions(), vec![false, false, true, false]);

    assert_eq!(carrots.price_per_pound(), 0.81);
}
