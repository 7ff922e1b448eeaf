//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use portfolio_sky::{init_logging, start};

fn main() {
	init_logging();
	start();
}
