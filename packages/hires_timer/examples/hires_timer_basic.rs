//! Measures a short sleep with the high-resolution timer.

use std::thread;
use std::time::Duration;

use hires_timer::HighResTimer;

fn main() {
    let timer = match HighResTimer::new() {
        Ok(timer) => timer,
        Err(e) => {
            println!("Cannot measure: {e}");
            return;
        }
    };

    println!(
        "Counter runs at {} ticks per second ({} ticks per millisecond)",
        timer.ticks_per_second(),
        timer.scale_factor().ticks_per_millisecond()
    );

    let start = timer.now_millis();
    thread::sleep(Duration::from_millis(10));
    let elapsed = timer.elapsed_millis_since(start);

    println!("Sleeping for 10 ms took {elapsed:.4} ms");
}
