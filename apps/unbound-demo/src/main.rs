//! Unbound 8-way movement demo
//!
//! Moves a player across the ground plane with WASD/arrow keys (plus
//! `Q`/`E`/`Z`/`C` for diagonals) while a third-person camera follows.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p unbound-demo -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--speed <N>`: Movement speed in pixels per second (default: 240)
//! - `--sprite <PATH>`: Use the image's size as the occupant size
//! - `--occupant <WxH>`: Occupant size in pixels (overrides `--sprite`)
//! - `--no-clamp`: Let the player leave the window
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;
mod params;
mod scene;

use unbound_app::{run_app, AppConfig};

use crate::app::Demo;
use crate::params::DemoParams;

const WIDTH: u32 = 1240;
const HEIGHT: u32 = 780;
const TARGET_FPS: u32 = 60;

fn main() -> anyhow::Result<()> {
    // Validate arguments before opening a window
    if DemoParams::from_args()?.help {
        print_help();
        return Ok(());
    }

    run_app::<Demo>(
        AppConfig::new("Unbound - Movement Demo")
            .with_size(WIDTH, HEIGHT)
            .with_target_fps(TARGET_FPS),
    )
}

fn print_help() {
    eprintln!(
        "Unbound 8-way movement demo

USAGE:
    cargo run -p unbound-demo -- [OPTIONS]

OPTIONS:
    --speed <N>             Movement speed in pixels per second (default: 240)
    --sprite <PATH>         Use the image's size as the occupant size
    --occupant <WxH>        Occupant size in pixels, e.g. 32x48 (overrides --sprite)
    --no-clamp              Let the player leave the window
    -h, --help              Print this help message

CONTROLS:
    W/A/S/D, arrow keys     Move (opposite keys cancel)
    Q / E / Z / C           Force NW / NE / SW / SE (Q wins over E over Z over C)
    Escape                  Quit

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
