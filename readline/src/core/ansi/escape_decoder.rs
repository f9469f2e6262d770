// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoding of the bytes that follow an ESC (0x1B) keystroke byte.
//!
//! Only arrow keys mean anything to the line editor, so the decoder recognizes:
//!
//! - `ESC [ A` / `B` / `C` / `D` → Up / Down / Right / Left (also `ESC O A` etc, the
//!   "application cursor" variant some terminals send)
//! - `ESC [ 1 ; 5 D` and friends (arrow with Shift/Alt/Ctrl held) → same four events,
//!   the modifier parameter is skipped, not interpreted
//!
//! Everything else (function keys, `Delete` as `ESC [ 3 ~`, Alt+letter, a lone ESC) is
//! swallowed without an event. The decoder never fails; it only reports how many bytes
//! it looked at so the caller never inserts them as printable text.

/// The byte that starts every escape sequence.
pub const ESC: u8 = 0x1B;

/// Upper bound on the bytes after ESC that the decoder inspects: the byte right after
/// ESC plus up to 4 more, enough for `[ 1 ; 5 D`.
pub const MAX_ESCAPE_LOOKAHEAD: usize = 5;

/// Logical movement produced by one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeEvent {
    None,
    Up,
    Down,
    Right,
    Left,
}

/// Result of [`decode_escape_sequence`]. `consumed` counts bytes after the ESC byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeDecode {
    pub event: EscapeEvent,
    pub consumed: usize,
}

impl EscapeDecode {
    fn none(consumed: usize) -> Self {
        Self {
            event: EscapeEvent::None,
            consumed,
        }
    }
}

/// Decode the lookahead `window` that follows an ESC byte. At most
/// [`MAX_ESCAPE_LOOKAHEAD`] bytes are inspected; `consumed` is never larger than the
/// window.
#[must_use]
pub fn decode_escape_sequence(window: &[u8]) -> EscapeDecode {
    let window = &window[..window.len().min(MAX_ESCAPE_LOOKAHEAD)];

    // Incomplete: consume what is there, produce nothing.
    let [intro, second, ..] = window else {
        return EscapeDecode::none(window.len());
    };

    let arrow = arrow_from_final_byte(*second);
    if arrow != EscapeEvent::None {
        return EscapeDecode {
            event: arrow,
            consumed: 2,
        };
    }

    if *intro == b'[' {
        return decode_csi_parameters(window);
    }

    EscapeDecode::none(2)
}

/// True when `window` is a proper prefix of a sequence the decoder recognizes, i.e. the
/// rest of the sequence may still be in flight. A lone ESC (empty window) is complete.
#[must_use]
pub fn is_incomplete_escape_sequence(window: &[u8]) -> bool {
    if window.len() >= MAX_ESCAPE_LOOKAHEAD {
        return false;
    }
    match window {
        [b'[' | b'O'] => true,
        [b'[', params @ ..] => params
            .iter()
            .all(|byte| byte.is_ascii_digit() || *byte == b';'),
        _ => false,
    }
}

fn arrow_from_final_byte(byte: u8) -> EscapeEvent {
    match byte {
        b'A' => EscapeEvent::Up,
        b'B' => EscapeEvent::Down,
        b'C' => EscapeEvent::Right,
        b'D' => EscapeEvent::Left,
        _ => EscapeEvent::None,
    }
}

/// `window` starts with `[` and its second byte is not an arrow letter. Skip the
/// digit/semicolon parameter run, then consume the final byte if it is in view.
fn decode_csi_parameters(window: &[u8]) -> EscapeDecode {
    let params_end = 1 + window[1..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit() || **byte == b';')
        .count();

    match window.get(params_end) {
        Some(&final_byte) if is_csi_final_byte(final_byte) => {
            let params = &window[1..params_end];
            let event = if is_modified_arrow_params(params) {
                arrow_from_final_byte(final_byte)
            } else {
                EscapeEvent::None
            };
            EscapeDecode {
                event,
                consumed: params_end + 1,
            }
        }
        // Truncated, or not a CSI sequence after all: stop at what was inspected.
        _ => EscapeDecode::none(params_end),
    }
}

fn is_csi_final_byte(byte: u8) -> bool { (0x40..=0x7E).contains(&byte) }

/// `<digit>? ; <digit>`
fn is_modified_arrow_params(params: &[u8]) -> bool {
    match params {
        [b';', modifier] => modifier.is_ascii_digit(),
        [base, b';', modifier] => base.is_ascii_digit() && modifier.is_ascii_digit(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"[A", EscapeEvent::Up, 2)]
    #[test_case(b"[B", EscapeEvent::Down, 2)]
    #[test_case(b"[C", EscapeEvent::Right, 2)]
    #[test_case(b"[D", EscapeEvent::Left, 2)]
    #[test_case(b"OD", EscapeEvent::Left, 2)]
    #[test_case(b"[Dxyz", EscapeEvent::Left, 2)]
    fn test_plain_arrows(window: &[u8], event: EscapeEvent, consumed: usize) {
        assert_eq!(
            decode_escape_sequence(window),
            EscapeDecode { event, consumed }
        );
    }

    #[test_case(b"[1;5D", EscapeEvent::Left, 5)]
    #[test_case(b"[1;5C", EscapeEvent::Right, 5)]
    #[test_case(b"[1;3A", EscapeEvent::Up, 5)]
    #[test_case(b"[;5B", EscapeEvent::Down, 4)]
    fn test_modified_arrows(window: &[u8], event: EscapeEvent, consumed: usize) {
        assert_eq!(
            decode_escape_sequence(window),
            EscapeDecode { event, consumed }
        );
    }

    #[test_case(b"", 0; "nothing after esc")]
    #[test_case(b"[", 1; "only the bracket")]
    #[test_case(b"b", 1; "alt letter without lookahead")]
    #[test_case(b"bc", 2; "alt letter with lookahead")]
    #[test_case(b"[3~", 3; "delete key")]
    #[test_case(b"[1;5", 4; "modified arrow cut short")]
    #[test_case(b"[15~", 4; "function key")]
    #[test_case(b"[1;", 3; "semicolon at the end")]
    #[test_case(b"[1 x", 2; "parameter run interrupted")]
    fn test_no_event_still_reports_consumed(window: &[u8], consumed: usize) {
        assert_eq!(
            decode_escape_sequence(window),
            EscapeDecode {
                event: EscapeEvent::None,
                consumed
            }
        );
    }

    #[test_case(b"", false; "lone esc")]
    #[test_case(b"[", true)]
    #[test_case(b"O", true)]
    #[test_case(b"[1;5", true)]
    #[test_case(b"[1;", true)]
    #[test_case(b"[D", false)]
    #[test_case(b"b", false; "alt letter")]
    #[test_case(b"[1234", false; "at lookahead limit")]
    fn test_is_incomplete_escape_sequence(window: &[u8], expected: bool) {
        assert_eq!(is_incomplete_escape_sequence(window), expected);
    }

    #[test]
    fn test_never_inspects_past_lookahead_limit() {
        // A parameter run longer than the lookahead: stop at the limit.
        let decoded = decode_escape_sequence(b"[1234567D");
        assert_eq!(decoded.event, EscapeEvent::None);
        assert_eq!(decoded.consumed, MAX_ESCAPE_LOOKAHEAD);
    }
}
