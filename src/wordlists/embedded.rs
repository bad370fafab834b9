//! Embedded vocabulary
//!
//! Compiled into the binary at build time from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
