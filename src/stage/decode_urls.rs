//! stage/decode_urls.rs
//! Percent-decode URL-looking tokens in place, with `decodeURI` semantics:
//! escapes for the URI reserved set stay encoded, multi-byte sequences
//! must form valid UTF-8, and a malformed escape leaves the whole token
//! untouched rather than failing the pipeline.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// The repeated scheme group is inherited as-is; `wwwhttp:x` is one token.
static URL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(www|http:|https:)+\S+").expect("valid pattern"));

// Escapes decoding to these bytes are kept encoded (URI reserved set).
const RESERVED: &[u8] = b";/?:@&=+$,#";

pub struct DecodeUrls;

impl Stage for DecodeUrls {
    fn name(&self) -> &'static str {
        "decode_urls"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.contains("www") || text.contains("http:") || text.contains("https:"))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let out = URL_TOKEN.replace_all(&text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            decode_uri(token).unwrap_or_else(|| token.to_string())
        });
        Ok(Cow::Owned(out.into_owned()))
    }
}

#[inline]
fn hex_pair(bytes: &[u8], at: usize) -> Option<u8> {
    let hi = *bytes.get(at)?;
    let lo = *bytes.get(at + 1)?;
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

// Expected sequence length from a UTF-8 leading byte; None for a bare
// continuation byte.
#[inline]
fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Percent-decode one token. `None` on any malformed escape: bad hex, a
/// truncated sequence, or bytes that do not form valid UTF-8.
pub fn decode_uri(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let escape_start = i;
        let first = hex_pair(bytes, i + 1)?;
        i += 3;

        if first < 0x80 {
            if RESERVED.contains(&first) {
                // decodeURI keeps reserved-set escapes verbatim.
                out.extend_from_slice(&bytes[escape_start..i]);
            } else {
                out.push(first);
            }
            continue;
        }

        let len = utf8_len(first)?;
        let mut buf = [0u8; 4];
        buf[0] = first;
        for slot in buf.iter_mut().take(len).skip(1) {
            if bytes.get(i) != Some(&b'%') {
                return None;
            }
            let cont = hex_pair(bytes, i + 1)?;
            if cont & 0xC0 != 0x80 {
                return None;
            }
            *slot = cont;
            i += 3;
        }
        // Rejects overlong forms and surrogates.
        std::str::from_utf8(&buf[..len]).ok()?;
        out.extend_from_slice(&buf[..len]);
    }

    // Unescaped bytes came from a valid &str, so this only fails if a
    // decoded sequence was bad, and those were validated above.
    String::from_utf8(out).ok()
}
