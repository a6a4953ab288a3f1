use std::io::{self, BufRead};
use std::sync::Arc;

use veggie_watch::{Restaurant, VeggieFeed};

fn main() -> anyhow::Result<()> {
    veggie_watch::init_logger();

    // Price watch for carrots; these restaurants buy their carrots from suppliers.
    let mut carrots = VeggieFeed::new("Carrots", 0.82)?;

    carrots.attach(Arc::new(Restaurant::new("Mackay's", 0.77)?));
    carrots.attach(Arc::new(Restaurant::new("Johnny's Sports Bar", 0.74)?));
    carrots.attach(Arc::new(Restaurant::new("Salad Kingdom", 0.75)?));

    // Fluctuating carrot prices notify the subscribed restaurants.
    carrots.set_price(0.79);
    carrots.set_price(0.76);
    carrots.set_price(0.74);
    carrots.set_price(0.81);

    // Keep the console open until enter is pressed.
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    return Ok(());
}
