pub mod check;
pub mod definition;
pub mod lang_resolver;
pub mod langs;
pub mod outline;
pub mod source_loader;
pub mod tree;


use std::fmt::Display;

/// Reports `message` the way every command does and exits with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// Serializes `value` as pretty JSON on stdout.
pub fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => fail(format!("failed to serialize output: {err}")),
    }
}
