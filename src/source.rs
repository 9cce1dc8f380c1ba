//! # Text Sources
//!
//! Where the raw text comes from. Only plain text is understood here;
//! anything else (PDF, EPUB, ...) has to be converted before it reaches
//! the reader.

use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Shown when no file is given.
pub const DEMO_TEXT: &str = "
Welcome to the RSVP Reader demo.
This tool shows one word at a time, keeping your eyes focused on the most important letter.
This letter is called the Optimal Recognition Point, or ORP.
It is the letter that helps your brain recognize the word fastest.
The key is that the ORP letter stays in the same spot, while the rest of the word moves around it.

By keeping your eyes fixed on the ORP, you don't need to scan across lines of text.
This lets you read much faster and with less effort.

Press Space to start reading.
Use Up and Down to change the speed, from slow practice to hundreds of words per minute.
You can also pass a text file to read your own content.
";

pub const DEMO_NAME: &str = "demo";

/// Text to read plus a short name for the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub name: String,
    pub text: String,
}

impl LoadedText {
    pub fn demo() -> Self {
        Self {
            name: DEMO_NAME.to_string(),
            text: DEMO_TEXT.to_string(),
        }
    }
}

/// Reads `path` as UTF-8 text. `-` reads stdin.
pub fn read_text(path: &Path) -> io::Result<LoadedText> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        info!("Read {} bytes from stdin", text.len());
        return Ok(LoadedText {
            name: "stdin".to_string(),
            text,
        });
    }

    let text = fs::read_to_string(path)?;
    info!("Read {} bytes from {}", text.len(), path.display());
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(LoadedText { name, text })
}
