//! Weight sources: everything that implements [`ScalePort`](crate::app::ports::ScalePort).
//!
//! | Source        | Reads from                         |
//! |---------------|------------------------------------|
//! | `HidScale`    | USB HID scale via `/dev/hidrawN`   |
//! | `LineScale`   | one reading per line (stdin, file) |
//! | `ReplayScale` | in-memory list (tests, simulation) |

pub mod replay;
pub mod scale;

pub use replay::{LineScale, ReplayScale};
pub use scale::{HidScale, decode_report};
