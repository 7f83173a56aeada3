#![no_main]
use std::cell::RefCell;
use std::io::{self, Read};

use arbitrary::Arbitrary;
use jsontree::{ParserOptions, Tokenizer, TokenizerOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag byte + 4-byte read-split seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    // not JSON whitespace; must be rejected cleanly
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        let limit = max_size - prefix;
        prefix += append_document(&mut data[prefix..], size.max(16), limit);
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends 0‒8 whitespace code points, never exceeding `limit` bytes.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let n_codepoints = rng.random_range(0..=limit.min(8));
        let mut written = 0;
        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

/// Appends a serialized arbitrary document, truncated to `limit` bytes.
fn append_document(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::from(u.arbitrary::<i64>()?),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Serves `data` in reads whose sizes are derived from `split_seed`.
struct SplitReader<'a> {
    data: &'a [u8],
    split_seed: u64,
}

impl Read for SplitReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        let size = (self.split_seed as usize % self.data.len()) + 1;
        self.split_seed = self.split_seed.rotate_left(7) ^ 0x9E37_79B9;
        let n = size.min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u64::from(u32::from_le_bytes(data[1..5].try_into().unwrap()));
    let data = &data[HEADER..];

    let allow_scalar_root = flags & 0x80 != 0;
    let buffer_size = usize::from(flags & 0x7F) + 1;

    let reader = SplitReader { data, split_seed };
    let mut tokenizer = Tokenizer::with_options(
        reader,
        TokenizerOptions {
            buffer_size,
            ..Default::default()
        },
    );
    let parsed = tokenizer.parse_with(ParserOptions {
        allow_scalar_root,
        ..Default::default()
    });

    // Everything serde_json accepts is a valid document here too, as long
    // as scalar roots are allowed.
    if allow_scalar_root && serde_json::from_slice::<Value>(data).is_ok() {
        if let Err(err) = parsed {
            panic!("rejected a valid document: {err}");
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
