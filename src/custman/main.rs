//! # Custman CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/custman/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + logging (commands.rs)                   │
//! │  - Menu loop and prompts (shell.rs, prompt.rs)              │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) → Commands → Store                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rule violations (duplicate ids, a full list, unknown customers) are shown to
//! the user and the session carries on. Only infrastructure failures reach
//! `main` and end the process with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
