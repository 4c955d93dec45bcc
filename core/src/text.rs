//! text.rs
//! Message normalization, grouping, and padding.
//!
//! The pipeline itself never normalizes: it consumes whatever these helpers
//! (or any other formatter) hand it. Symbols the engines do not know simply
//! pass through, so stripping or keeping non-alphabetic characters is
//! decided here.

use std::fmt;

use crate::constants::{DEFAULT_GROUP_SIZE, DEFAULT_PAD_SYMBOL};

/// Lightweight text wrapper for cipher input and output.
///
/// ```
/// use cipher_core::text::MessageBit;
///
/// let bit = MessageBit::new("ATTACKATDAWN");
/// assert_eq!(bit.group(5), "ATTAC KATDA WN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBit {
    text: String,
}

impl MessageBit {
    pub fn new(text: impl Into<String>) -> Self {
        MessageBit { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in symbols, not bytes.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Render in space-separated groups of `size` symbols. A zero size
    /// leaves the text ungrouped.
    pub fn group(&self, size: usize) -> String {
        if size == 0 {
            return self.text.clone();
        }
        let mut grouped = String::with_capacity(self.text.len() + self.len() / size);
        for (index, symbol) in self.chars().enumerate() {
            if index > 0 && index % size == 0 {
                grouped.push(' ');
            }
            grouped.push(symbol);
        }
        grouped
    }

    /// Pad on the right with `pad_symbol` up to `target_length` symbols.
    pub fn pad(&self, target_length: usize, pad_symbol: char) -> MessageBit {
        let mut padded = self.text.clone();
        for _ in self.len()..target_length {
            padded.push(pad_symbol);
        }
        MessageBit::new(padded)
    }

    /// Strip every whitespace symbol.
    pub fn without_spaces(&self) -> MessageBit {
        MessageBit::new(
            self.chars()
                .filter(|symbol| !symbol.is_whitespace())
                .collect::<String>(),
        )
    }
}

impl fmt::Display for MessageBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Formatting switches for [`format_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Strip whitespace after normalization.
    pub remove_spaces: bool,
    /// Keep the original case instead of folding to uppercase.
    pub keep_case: bool,
    /// Keep non-alphabetic symbols instead of stripping them.
    pub allow_nonalpha: bool,
    /// Pad the result to a multiple of `group_size`.
    pub pad: bool,
    pub group_size: usize,
    pub pad_symbol: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            remove_spaces: false,
            keep_case: false,
            allow_nonalpha: false,
            pad: false,
            group_size: DEFAULT_GROUP_SIZE,
            pad_symbol: DEFAULT_PAD_SYMBOL,
        }
    }
}

/// Uppercase (unless `keep_case`) and strip non-alphabetic symbols (unless
/// `allow_nonalpha`).
pub fn normalize(text: &str, keep_case: bool, allow_nonalpha: bool) -> MessageBit {
    let cased: String = if keep_case {
        text.to_owned()
    } else {
        text.chars().flat_map(char::to_uppercase).collect()
    };
    let restricted: String = if allow_nonalpha {
        cased
    } else {
        cased.chars().filter(|symbol| symbol.is_alphabetic()).collect()
    };
    MessageBit::new(restricted)
}

/// Full preprocessing pass: normalize, optionally strip spaces, optionally
/// pad to a multiple of the group size.
pub fn format_text(text: &str, options: &FormatOptions) -> MessageBit {
    let mut bit = normalize(text, options.keep_case, options.allow_nonalpha);
    if options.remove_spaces {
        bit = bit.without_spaces();
    }
    if options.pad && options.group_size > 0 {
        let remainder = bit.len() % options.group_size;
        if remainder != 0 {
            let target = bit.len() + options.group_size - remainder;
            bit = bit.pad(target, options.pad_symbol);
        }
    }
    bit
}
