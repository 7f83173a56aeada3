//! Checks the moderation verdict of a streamed tool-call response before the
//! rest of the payload has arrived, then builds the full document tree.
//!
//! The response arrives in small, irregular chunks. A first pass pulls
//! tokens one by one and stops reading as soon as `"decision"` is known, so
//! a blocked response costs one chunk instead of the whole payload. If the
//! response is allowed, a second pass parses it into an [`Element`] and
//! reads fields by path.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsontree --example tool_call
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use std::io;

use jsontree::{Element, TokenKind, Tokenizer, TokenizerOptions};

// In real life this would come from the network.
const SIMULATED_STREAM: [&str; 10] = [
    r#"{"moderation":{"decision":"al"#,
    r#"lo"#,
    r#"w","reason":null},"#,
    r#""filename":"example.rs","#,
    r#""language":"rust","#,
    r#""code":"use jsontree::Tokenizer;\n"#,
    r#"fn main() {\n"#,
    r#"    let root = jsontree::from_str(\"[]\").unwrap();\n"#,
    r#"    println!(\"{root:?}\");\n}\n"#,
    r#""}"#,
];

/// Serves one chunk per read, like a socket delivering packets.
struct Chunks<'a> {
    chunks: std::slice::Iter<'a, &'a str>,
    pending: &'a [u8],
}

impl<'a> Chunks<'a> {
    fn new(chunks: &'a [&'a str]) -> Self {
        Self {
            chunks: chunks.iter(),
            pending: &[],
        }
    }
}

impl io::Read for Chunks<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.chunks.next() {
                Some(chunk) => self.pending = chunk.as_bytes(),
                None => return Ok(0),
            }
        }
        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending = &self.pending[n..];
        Ok(n)
    }
}

/// Pulls tokens until the value after the `"decision"` key is read.
fn moderation_decision<R: io::Read>(tokenizer: &mut Tokenizer<R>) -> Option<String> {
    let mut after_key = false;
    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::String if after_key => return Some(token.text.into_owned()),
            TokenKind::String => after_key = token.text == "decision",
            TokenKind::Colon => {}
            TokenKind::Done | TokenKind::Invalid | TokenKind::Error => return None,
            _ => after_key = false,
        }
    }
}

fn print_request(root: &Element) {
    println!("file:     {}", root.string(["filename"]));
    println!("language: {}", root.string(["language"]));
    println!("reason:   {:?}", root.get(["moderation", "reason"]));
    println!("--- code ({} bytes) ---", root.get(["code"]).map_or(0, Element::size));
    print!("{}", root.string(["code"]));
}

fn main() {
    let options = TokenizerOptions {
        buffer_size: 16,
        ..TokenizerOptions::default()
    };

    let mut tokenizer = Tokenizer::with_options(Chunks::new(&SIMULATED_STREAM), options);
    match moderation_decision(&mut tokenizer).as_deref() {
        Some("allow") => println!("moderation: allow (after {} tokens)", tokenizer.sequence()),
        Some(other) => {
            eprintln!("moderation blocked the content ({other}), aborting");
            return;
        }
        None => {
            eprintln!("no moderation decision in the response");
            return;
        }
    }

    tokenizer.read(Chunks::new(&SIMULATED_STREAM));
    match tokenizer.parse() {
        Ok(root) => print_request(&root),
        Err(err) => eprintln!("malformed response: {err}"),
    }
}
