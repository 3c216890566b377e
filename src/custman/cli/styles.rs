//! Styles for the custman CLI.
//!
//! Templates refer to styles by semantic name (`id`, `premium`, `error`...)
//! through the `style` filter; the names are mapped to `console` styles once,
//! in [`CUSTMAN_THEME`]. Changing the look means editing this file only.
//!
//! Whether styles are applied is decided by the renderer (`--no-color`, piped
//! output), so every style here forces ANSI output when it is used. Unknown
//! style names are flagged by `outstanding` with its `(!?)` indicator.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

pub mod names {
    pub const HEADER: &str = "header";
    pub const MENU_KEY: &str = "menu_key";
    pub const RULE: &str = "rule";
    pub const LABEL: &str = "label";
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const PREMIUM: &str = "premium";
    pub const REWARD: &str = "reward";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static CUSTMAN_THEME: Lazy<Theme> = Lazy::new(|| {
    let forced = || Style::new().force_styling(true);
    Theme::new()
        .add(names::HEADER, forced().bold().cyan())
        .add(names::MENU_KEY, forced().yellow())
        .add(names::RULE, forced().dim())
        .add(names::LABEL, forced().dim())
        .add(names::ID, forced().yellow())
        .add(names::NAME, forced().bold())
        .add(names::PREMIUM, forced().magenta().bold())
        .add(names::REWARD, forced().magenta())
        .add(names::INFO, forced().dim())
        .add(names::SUCCESS, forced().green())
        .add(names::WARNING, forced().yellow())
        .add(names::ERROR, forced().red())
});
