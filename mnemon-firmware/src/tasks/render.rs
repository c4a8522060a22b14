//! Dot-matrix render task
//!
//! Started once at init and never joined or cancelled: the matrix only
//! shows a picture while it is being scanned, so the scan must outlive
//! everything else. The task runs on its own core (see `main.rs`) since
//! the per-cell dwell is a busy-wait.

use defmt::*;
use embassy_time::Timer;

use mnemon_drivers::Matrix;
use mnemon_hal_rp2040::{BlockingDelay, RpOutput};

use crate::channels;

/// Continuously re-scan the published frame onto the matrix
#[embassy_executor::task]
pub async fn render_task(
    mut matrix: Matrix<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>, BlockingDelay>,
) -> ! {
    info!("matrix render task started");

    loop {
        let frame = channels::current_frame();
        matrix.scan(&frame);
        // Brief yield so the task is a good citizen if anything else
        // ever lands on this core; a blank frame scans in microseconds
        Timer::after_micros(50).await;
    }
}
