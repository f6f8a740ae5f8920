//! rTimesheet main entrypoint.

use rtimesheet::run;
use rtimesheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        // 2 = bad input, 1 = everything else
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
