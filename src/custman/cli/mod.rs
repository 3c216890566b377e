//! # CLI Behavior
//!
//! This is **one possible front end** for custman. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Session
//!
//! Running `custman` starts an interactive menu:
//!
//! ```text
//! === Customer Management ===
//! 1.Add Regular 2.Add Premium 3.View 4.Search 5.Update 6.Delete 7.Sort 8.Exit
//! ```
//!
//! Each choice prompts for its inputs one line at a time, calls the API, and
//! renders the resulting customers and messages. Input may be piped; end of
//! input ends the session like a confirmed exit.
//!
//! Unless `--no-seed` is given (or `seed_samples` is off in the config), the
//! session starts with a set of sample customers.
//!
//! ## Input Errors
//!
//! Ids and reward points must be integers. Anything else is reported as
//! malformed input and the current operation is abandoned; the menu comes back.

mod commands;
mod logging;
mod prompt;
mod render;
mod samples;
mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
