//! Interactive inventory console.
//!
//! The menu loop only collects text, hands it to the product model and the
//! product store, and prints what comes back. It runs over any
//! `BufRead`/`Write` pair so it can be driven by scripted input.

pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::MenuOption;
pub use session::run;
