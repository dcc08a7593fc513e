//! Structural properties of the filter and validator over a fixed corpus.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chirpy_core::content::filter::{clean, DENYLIST, MASK};
use chirpy_core::content::{validate_chirp, MAX_CHIRP_LEN};
use chirpy_core::error::ClientCode;

const CORPUS: &[&str] = &[
    "",
    " ",
    "kerfuffle",
    "hello  world",
    "Fornax fornax FORNAX fornaxes",
    "tabs\tand\nnewlines sharbert",
    "ünïcödé sharbert ✨",
    "a b c d e f g",
];

#[test]
fn token_count_is_preserved() {
    for s in CORPUS {
        let out = clean(s);
        assert_eq!(out.split(' ').count(), s.split(' ').count(), "input={s:?}");
    }
}

#[test]
fn only_denylisted_tokens_change() {
    for s in CORPUS {
        let out = clean(s);
        for (before, after) in s.split(' ').zip(out.split(' ')) {
            let denied = DENYLIST.iter().any(|d| before.to_lowercase() == *d);
            if denied {
                assert_eq!(after, MASK, "input={s:?}");
            } else {
                assert_eq!(after, before, "input={s:?}");
            }
        }
    }
}

#[test]
fn clean_is_stable_on_its_own_output() {
    for s in CORPUS {
        let once = clean(s);
        assert_eq!(clean(&once), once);
    }
}

#[test]
fn oversized_text_is_always_rejected() {
    for filler in ["a", "kerfuffle ", " ", "✨"] {
        let mut s = String::new();
        while s.len() <= MAX_CHIRP_LEN {
            s.push_str(filler);
        }
        let err = validate_chirp(&s).expect_err("must reject");
        assert_eq!(err.client_code(), ClientCode::ContentTooLong);
        assert_eq!(err.client_message(), "Chirp is too long");
    }
}

#[test]
fn clean_short_text_passes_through() {
    for s in CORPUS.iter().filter(|s| !s.to_lowercase().split(' ').any(|t| DENYLIST.contains(&t))) {
        assert_eq!(validate_chirp(s).unwrap(), *s);
    }
}
