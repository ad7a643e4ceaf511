// src/cli/menu.rs

use colored::Colorize;

/// Top-level menu: authenticated setup, anonymous setup, removal, or quit.
pub fn show_main_menu() {
    println!("{}", t!("menu.main.title").bold().yellow());
    println!("{}", t!("menu.main.authenticated"));
    println!("{}", t!("menu.main.unauthenticated"));
    println!("{}", t!("menu.main.remove_all"));
    println!("{}", t!("menu.quit"));
}

/// Which tool the collected proxy should be applied to.
pub fn show_target_menu() {
    println!("{}", t!("menu.target.title").bold().yellow());
    println!("{}", t!("menu.target.build_tool"));
    println!("{}", t!("menu.target.version_control"));
    println!("{}", t!("menu.target.package_manager"));
    println!("{}", t!("menu.quit"));
}
