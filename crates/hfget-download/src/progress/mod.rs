//! Transfer progress: ETA math, redraw throttling and rendering.

mod eta;
mod observer;
mod terminal;
mod throttle;

pub use eta::{ProgressSnapshot, format_bytes};
pub use observer::{DownloadObserver, NoopObserver};
pub use terminal::{TerminalObserver, print_interrupt_notice};
pub use throttle::RedrawThrottle;
