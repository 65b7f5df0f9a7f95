//! Thin production caller for the time facade.
//!
//! Stands in for a UI layer that would display the current time: reads
//! `now()` through the active clock source and prints it with its ±7-day
//! neighbors.

use log::info;
use tempo_clock::time;

fn main() {
    env_logger::init();

    let now = time::now();
    info!("active clock reports {now} ms since epoch");

    println!("now:          {}", time::to_iso8601(now));
    println!("a week ago:   {}", time::to_iso8601(time::before_days(7)));
    println!("a week ahead: {}", time::to_iso8601(time::after_days(7)));
}
