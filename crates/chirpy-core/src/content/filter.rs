//! Profanity filter over a fixed denylist.
//!
//! Tokens are produced by splitting on a single ASCII space and re-joined the
//! same way, so runs of spaces survive as empty tokens and other whitespace is
//! treated as part of a token.

/// Words that are masked wherever they appear as a whole token.
pub const DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a denylisted token.
pub const MASK: &str = "****";

/// Return `text` with every denylisted token replaced by [`MASK`].
///
/// Matching uses Unicode simple case folding; punctuation is part of the token, so
/// `"Sharbert!"` is left alone.
pub fn clean(text: &str) -> String {
    text.split(' ')
        .map(|token| if is_denied(token) { MASK } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_denied(token: &str) -> bool {
    DENYLIST
        .iter()
        .any(|bad| token.chars().map(simple_fold).eq(bad.chars()))
}

/// Simple case folding onto lowercase ASCII. The denylist is ASCII, so the
/// only non-ASCII letters that can match are the two whose fold orbit
/// contains an ASCII letter.
fn simple_fold(c: char) -> char {
    match c {
        '\u{017F}' => 's', // LATIN SMALL LETTER LONG S
        '\u{212A}' => 'k', // KELVIN SIGN
        _ => c.to_ascii_lowercase(),
    }
}
