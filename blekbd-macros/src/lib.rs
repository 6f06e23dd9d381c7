use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, LitStr};

macro_rules! key {
    ($n:tt, $i:ident) => {
        ($n, stringify!($i))
    };
    ($i:ident) => {
        (stringify!($i), stringify!($i))
    };
}

/// Physical keys, named by their US legend.
const KEYS: &[(&str, &str)] = &[
    key!(A),
    key!(B),
    key!(C),
    key!(D),
    key!(E),
    key!(F),
    key!(G),
    key!(H),
    key!(I),
    key!(J),
    key!(K),
    key!(L),
    key!(M),
    key!(N),
    key!(O),
    key!(P),
    key!(Q),
    key!(R),
    key!(S),
    key!(T),
    key!(U),
    key!(V),
    key!(W),
    key!(X),
    key!(Y),
    key!(Z),
    key!("1", Digit1),
    key!("2", Digit2),
    key!("3", Digit3),
    key!("4", Digit4),
    key!("5", Digit5),
    key!("6", Digit6),
    key!("7", Digit7),
    key!("8", Digit8),
    key!("9", Digit9),
    key!("0", Digit0),
    key!(Enter),
    key!(Tab),
    key!(Space),
    key!("-", Minus),
    key!("=", Equal),
    key!("[", LeftBracket),
    key!("]", RightBracket),
    key!("\\", Backslash),
    key!("NonUs#", NonUsHash),
    key!(";", Semicolon),
    key!("'", Apostrophe),
    key!("`", Grave),
    key!(",", Comma),
    key!(".", Period),
    key!("/", Slash),
    key!("NonUs\\", NonUsBackslash),
];

/// Symbols that cannot be written as themselves inside a table cell.
const SYMBOLS: &[(&str, char)] = &[
    ("Space", ' '),
    ("Enter", '\n'),
    ("Tab", '\t'),
    ("Pipe", '|'),
];

const LEFT_SHIFT: u8 = 0x02;
const RIGHT_ALT: u8 = 0x40;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    symbol: char,
    key: &'static str,
    modifiers: u8,
}

fn tier(header: &str) -> Result<u8, String> {
    match header {
        "Base" => Ok(0),
        "Shift" => Ok(LEFT_SHIFT),
        "AltGr" => Ok(RIGHT_ALT),
        "Shift+AltGr" => Ok(LEFT_SHIFT | RIGHT_ALT),
        _ => Err(format!("keymap: Unknown column: {header}")),
    }
}

fn symbol(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c);
    }
    if let Some((_, c)) = SYMBOLS.iter().find(|(name, _)| *name == text) {
        return Ok(*c);
    }
    text.strip_prefix("U+")
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .and_then(char::from_u32)
        .ok_or_else(|| format!("keymap: Unknown symbol: {text}"))
}

fn cells(line: &str) -> Vec<&str> {
    // Leading and trailing `|` produce empty first/last fields
    line.split('|')
        .map(str::trim)
        .skip(1)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .skip(1)
        .rev()
        .collect()
}

fn parse(input: &str) -> Result<Vec<Entry>, String> {
    let keys = KEYS.iter().copied().collect::<HashMap<_, _>>();
    let mut lines = input
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("|-"));

    let header = lines.next().ok_or("keymap: Empty table")?;
    let header = cells(header);
    if header.first() != Some(&"Key") {
        return Err("keymap: First column must be `Key`".into());
    }
    let tiers = header[1..]
        .iter()
        .map(|h| tier(h))
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries: Vec<Entry> = Vec::new();
    for line in lines {
        let row = cells(line);
        let (name, columns) = row.split_first().ok_or("keymap: Empty row")?;
        let key = *keys
            .get(*name)
            .ok_or_else(|| format!("keymap: Unknown key: {name}"))?;
        if columns.len() > tiers.len() {
            return Err(format!("keymap: Too many columns for key {name}"));
        }
        for (cell, modifiers) in columns.iter().zip(tiers.iter()) {
            for text in cell.split_whitespace() {
                let symbol = symbol(text)?;
                if entries.iter().any(|e| e.symbol == symbol) {
                    return Err(format!("keymap: Duplicate symbol: {symbol:?}"));
                }
                entries.push(Entry {
                    symbol,
                    key,
                    modifiers: *modifiers,
                });
            }
        }
    }
    entries.sort_by_key(|e| e.symbol);
    Ok(entries)
}

/// Builds a `[(char, KeyEvent); N]` sorted by character from a table with
/// one row per physical key and one column per modifier tier.
///
/// ```ignore
/// static KEYMAP: &[(char, KeyEvent)] = &keymap!(r"
///     | Key | Base | Shift | AltGr |
///     | 2   | 2    | "     | @     |
/// ");
/// ```
///
/// Expands to paths under `crate::keyboard`, so it is meant for use inside `blekbd`.
#[proc_macro]
pub fn keymap(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LitStr).value();

    let expanded = match parse(&input) {
        Ok(entries) => {
            let array = entries
                .iter()
                .map(|Entry { symbol, key, modifiers }| {
                    let key = format_ident!("{}", key);
                    quote! {
                        (
                            #symbol,
                            crate::keyboard::KeyEvent::new(
                                crate::keyboard::Key::#key,
                                crate::keyboard::Modifiers::from_bits(#modifiers),
                            ),
                        ),
                    }
                })
                .collect::<TokenStream>();
            quote! {
                [#array]
            }
        }
        Err(message) => quote!(compile_error!(#message)),
    };

    proc_macro::TokenStream::from(expanded)
}
