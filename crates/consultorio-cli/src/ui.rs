//! Console primitives: centered output, screen clearing, prompts.

use std::io::{self, BufRead, Write};

/// Fixed display width for centering.
const WIDTH: usize = 80;

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

/// Center a line within the fixed width.
pub fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    let pad = (WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Print one centered line.
pub fn say(text: &str) {
    println!("{}", center(text));
}

pub fn blank() {
    println!();
}

/// Centered prompt; returns the trimmed input line.
pub fn prompt(text: &str) -> String {
    print!("{}", center(text));
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

pub fn pause() {
    let _ = prompt("Presione Enter para continuar...");
}

/// `s`/`n` confirmation.
pub fn confirm(text: &str) -> bool {
    prompt(text).to_lowercase() == "s"
}

/// Numeric prompt. `None` means the user backed out with `0` or typed
/// something unparseable (reported, flow aborts either way).
pub fn prompt_number(text: &str) -> Option<u32> {
    let input = prompt(text);
    if input == "0" {
        return None;
    }
    match input.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            say("❌ Ingrese un número válido");
            pause();
            None
        }
    }
}
