//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a subsystem against
//! mock adapters.  Everything runs on the host with no scale attached.

mod config_tests;
mod pipeline_tests;
mod scenario_tests;
