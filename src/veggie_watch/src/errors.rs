use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedSetupError {
    #[error("Vegetable kind must not be empty")]
    EmptyKind,

    #[error("Initial price must be a positive amount, got {price}")]
    InvalidInitialPrice { price: f64 },
}

#[derive(Error, Debug)]
pub enum ObserverSetupError {
    #[error("Restaurant name must not be empty")]
    EmptyName,
}
