use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::FeedSetupError;
use crate::init_logger;

pub trait PriceObserver: Send + Sync + Debug {
    fn price_changed(&self, feed: &VeggieFeed);
}

/// Price watch for a single vegetable. Attached observers are notified in
/// registration order whenever the price actually changes.
pub struct VeggieFeed {
    kind: String,
    price_per_pound: f64,
    observers: Vec<Arc<dyn PriceObserver>>,
}

impl VeggieFeed {
    pub fn new(kind: &str, price_per_pound: f64) -> Result<Self, FeedSetupError> {
        init_logger();

        if kind.trim().is_empty() {
            return Err(FeedSetupError::EmptyKind);
        }

        if !price_per_pound.is_finite() || price_per_pound <= 0.0 {
            return Err(FeedSetupError::InvalidInitialPrice {
                price: price_per_pound,
            });
        }

        return Ok(Self {
            kind: kind.to_string(),
            price_per_pound,
            observers: Vec::new(),
        });
    }

    pub fn kind(&self) -> &str {
        return &self.kind;
    }

    pub fn price_per_pound(&self) -> f64 {
        return self.price_per_pound;
    }

    pub fn formatted_price(&self) -> String {
        return format!("${:.2}", self.price_per_pound);
    }

    pub fn observer_count(&self) -> usize {
        return self.observers.len();
    }

    pub fn attach(&mut self, observer: Arc<dyn PriceObserver>) {
        log::debug!("Attaching observer to the {} feed", self.kind);
        self.observers.push(observer);
    }

    /// Removes the first occurrence of the given observer. Detaching an
    /// observer that was never attached is a silent no-op.
    pub fn detach(&mut self, observer: &Arc<dyn PriceObserver>) {
        let position = self
            .observers
            .iter()
            .position(|attached| Arc::ptr_eq(attached, observer));

        if let Some(index) = position {
            log::debug!("Detaching observer from the {} feed", self.kind);
            self.observers.remove(index);
        }
    }

    /// Exact comparison, no epsilon: quoting the current price again is a
    /// complete no-op and nobody gets notified.
    pub fn set_price(&mut self, new_price: f64) {
        if self.price_per_pound == new_price {
            return;
        }

        self.price_per_pound = new_price;
        self.notify();
    }

    pub fn notify(&self) {
        log::debug!(
            "Notifying {} observers of the {} price change",
            self.observers.len(),
            self.kind
        );

        for observer in &self.observers {
            observer.price_changed(self);
        }

        println!();
    }
}
