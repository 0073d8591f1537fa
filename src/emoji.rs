//! Emoji shortcode substitution for message bodies.
//!
//! Two forms are recognised:
//! - `:shortcode:` anywhere in the text (`:smile:`, `:+1:`, `:tada:`)
//! - ASCII emoticons standing alone as a word (`:)`, `<3`)
//!
//! Anything not in the tables is left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SHORTCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([a-z0-9_+\-]+):").expect("shortcode regex pattern is valid"));

const SHORTCODES: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("-1", "👎"),
    ("100", "💯"),
    ("clap", "👏"),
    ("cry", "😢"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("grin", "😁"),
    ("heart", "❤️"),
    ("joy", "😂"),
    ("laughing", "😆"),
    ("ok_hand", "👌"),
    ("pray", "🙏"),
    ("rocket", "🚀"),
    ("smile", "😄"),
    ("smiley", "😃"),
    ("sob", "😭"),
    ("sparkles", "✨"),
    ("sunglasses", "😎"),
    ("tada", "🎉"),
    ("thinking", "🤔"),
    ("thumbsdown", "👎"),
    ("thumbsup", "👍"),
    ("wave", "👋"),
    ("wink", "😉"),
];

const EMOTICONS: &[(&str, &str)] = &[
    (":)", "🙂"),
    (":-)", "🙂"),
    (":(", "🙁"),
    (":-(", "🙁"),
    (";)", "😉"),
    (";-)", "😉"),
    (":D", "😃"),
    (":-D", "😃"),
    (":P", "😛"),
    (":p", "😛"),
    (":o", "😮"),
    (":O", "😮"),
    (":'(", "😢"),
    ("<3", "❤️"),
    ("</3", "💔"),
];

/// Glyph for a shortcode name (without colons).
pub fn lookup_shortcode(name: &str) -> Option<&'static str> {
    SHORTCODES
        .iter()
        .find(|(code, _)| *code == name)
        .map(|(_, glyph)| *glyph)
}

fn lookup_emoticon(word: &str) -> Option<&'static str> {
    EMOTICONS
        .iter()
        .find(|(emoticon, _)| *emoticon == word)
        .map(|(_, glyph)| *glyph)
}

/// Split a word into an emoticon glyph and the trailing text to keep.
/// Sentence punctuation after the emoticon (`:).`, `<3!`) stays in place.
fn split_emoticon(word: &str) -> Option<(&'static str, &str)> {
    if let Some(glyph) = lookup_emoticon(word) {
        return Some((glyph, ""));
    }
    let core = word.trim_end_matches(|c| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'));
    if core.is_empty() || core.len() == word.len() {
        return None;
    }
    lookup_emoticon(core).map(|glyph| (glyph, &word[core.len()..]))
}

/// Substitute shortcodes and standalone emoticons in `text`.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let with_codes = SHORTCODE_RE.replace_all(text, |caps: &Captures<'_>| {
        match lookup_shortcode(&caps[1]) {
            Some(glyph) => glyph.to_string(),
            None => caps[0].to_string(),
        }
    });

    let mut out = String::with_capacity(with_codes.len());
    for word in with_codes.split_inclusive(char::is_whitespace) {
        let trimmed = word.trim_end();
        match split_emoticon(trimmed) {
            Some((glyph, punctuation)) => {
                out.push_str(glyph);
                out.push_str(punctuation);
                out.push_str(&word[trimmed.len()..]);
            }
            None => out.push_str(word),
        }
    }
    out
}
