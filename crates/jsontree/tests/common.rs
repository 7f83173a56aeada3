#![allow(missing_docs, dead_code)]
#![expect(clippy::needless_raw_string_hashes)]

use std::io;

pub const ORIGINAL: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": 2,
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main"
        },
        {
            "type": "macro",
            "name": "println"
        }
    ],
    "matrix": [
        [
            "a"
        ]
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        "t",
        [
            "u"
        ],
        "end"
    ],
    "escapes": "tab\tquote\"euro€",
    "flags": [true, false, null],
    "nested_objects": {
        "outer": {
            "inner": -1.5e3
        }
    }
}"#;

// The compact form of `ORIGINAL`, cut on token seams and inside tokens
// (strings, escapes, numbers and literals) so that every read boundary
// case is hit when the chunks are served one per read.
#[rustfmt::skip]
pub const STREAM: [&str; 22] = [
    r#"{"moderation":{"decision":"al"#,                 // inside a string
    r#"lo"#,
    r#"w","reason":nu"#,                                // inside a literal
    r#"ll},"request":{"filename":"example.rs""#,
    r#","language":"rust","#,
    r#""options":{"opt_level":2,"features":["serde""#,
    r#","tokio"]}"#,
    r#"}"#,                                             // '}}' across reads
    r#","snippets":["#,
    r#""fn main() {}","#,
    r#""println!(\"#,                                   // between '\' and its escape
    r#""hi\")"]"#,
    r#","entities":[{"type":"function","name":"main"},{"type":"macro","name":"println"}]"#,
    r#","matrix":[["a"]]"#,
    r#","mixed":["s",{"k":"v"}"#,
    r#","t",["u"],"end"]"#,
    r#","escapes":"tab\tquote\"euro\u20"#,              // inside a \u escape
    r#"ac","flags":[tr"#,
    r#"ue,false,null]"#,
    r#","nested_objects":{"outer":{"inner":-1."#,       // inside a number
    r#"5e3}}"#,
    r#"}"#,
];

/// Serves one chunk per call to `read`, splitting a chunk only when the
/// caller's buffer is smaller.
pub struct ChunkedReader<'a> {
    chunks: &'a [&'a str],
    offset: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(chunks: &'a [&'a str]) -> Self {
        Self { chunks, offset: 0 }
    }
}

impl io::Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some((chunk, rest)) = self.chunks.split_first() else {
            return Ok(0);
        };
        let pending = &chunk.as_bytes()[self.offset..];
        let n = pending.len().min(buf.len());
        buf[..n].copy_from_slice(&pending[..n]);
        self.offset += n;
        if self.offset == chunk.len() {
            self.chunks = rest;
            self.offset = 0;
        }
        Ok(n)
    }
}

#[test]
fn stream_is_the_compact_original() {
    let streamed = STREAM.join("");

    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&streamed).unwrap();
    assert_eq!(reparsed, value);
}
