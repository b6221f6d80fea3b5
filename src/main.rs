//! pickupwindow main entrypoint.

use pickupwindow::run;
use pickupwindow::ui::messages;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
