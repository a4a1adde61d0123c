//! Natural-order name comparison for product display sorting.
//!
//! Case-insensitive and numeric-aware: digit runs compare as integers,
//! so "Item 2" sorts before "Item 10". Common Latin diacritics fold to
//! their base letter, which approximates base-sensitivity collation well
//! enough for a catalog of ASCII model codes.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two names in natural order.
///
/// Total: strings that are equal under folding fall back to exact byte
/// order, so sorting with this comparator is deterministic and
/// idempotent.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ia);
                    let run_b = take_digit_run(&mut ib);
                    let ord = cmp_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let fa = fold(ca);
                    let fb = fold(cb);
                    if fa != fb {
                        return fa.cmp(&fb);
                    }
                    ia.next();
                    ib.next();
                }
            }
        }
    }
}

fn take_digit_run(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

/// Compare digit runs as integers, ignoring leading zeros
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Case fold plus Latin diacritic fold (covers Latin-1 and Vietnamese đ)
fn fold(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'đ' | 'ď' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ĩ' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ş' | 'š' | 'ś' => 's',
        'ù'..='ü' | 'ũ' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}
