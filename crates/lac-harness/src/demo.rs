#![forbid(unsafe_code)]

//! The reference dashboard layout.
//!
//! ```text
//! back (vstack)
//! ├── header (hstack, weight 1): label1..label4
//! ├── controllers (hstack, weight 4)
//! │   ├── motors (vstack): m1, m2
//! │   └── states (4x3 grid, row-major): s1..s4
//! └── plots (2x2 grid, weight 10): p1..p4
//! ```

use lac_layout::{Container, Direction, GridParams, LayoutError, StackParams};

/// Padding applied around the dashboard root.
pub const DEFAULT_PADDING: f64 = 20.0;

/// Gap as a fraction of the window width, reapplied every frame.
pub const DEFAULT_GAP_FRACTION: f64 = 0.02;

/// Build the dashboard tree; size it and call `update` before reading it.
pub fn dashboard(padding: f64, gap: f64) -> Result<Container, LayoutError> {
    let stack = |id: &str, direction| {
        Container::stack_with(id, direction, &StackParams::new().gap(gap))
    };
    let leaves = |parent: &mut Container, prefix: &str, n: usize| {
        for i in 1..=n {
            parent.add_child(Container::leaf(format!("{prefix}{i}")));
        }
    };

    let mut header = stack("header", Direction::Horizontal);
    leaves(&mut header, "label", 4);

    let mut plots = Container::grid_with("plots", 2, 2, &GridParams::new().gap(gap))?;
    plots.set_gaps(gap, gap);
    leaves(&mut plots, "p", 4);

    let mut motors = stack("motors", Direction::Vertical);
    leaves(&mut motors, "m", 2);

    let mut states = Container::grid_with(
        "states",
        4,
        3,
        &GridParams::new().gap(gap).row_first(false),
    )?;
    leaves(&mut states, "s", 4);

    let mut controllers = stack("controllers", Direction::Horizontal);
    controllers.add_child(motors);
    controllers.add_child(states);

    let mut back = Container::stack_with(
        "back",
        Direction::Vertical,
        &StackParams::new().gap(gap).padding(padding),
    );
    back.add(header, 1);
    back.add(controllers, 4);
    back.add(plots, 10);
    Ok(back)
}
