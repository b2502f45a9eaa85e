// ABOUTME: Hand-written recursive-descent reader: turns a character buffer
// ABOUTME: into a Value tree. No parser-combinator crate, no regex engine,
// ABOUTME: just a byte string and a mutable position, per the language spec.

use crate::error::EvalError;
use crate::value::Value;

const END_OF_TOP_LEVEL: char = '\0';

fn is_lispy_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b')
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '+' | '-' | '*' | '/' | '\\' | '=' | '<' | '>' | '!' | '&'
        )
}

/// Reads the whole input as a sequence of top-level forms, returned as a
/// single SExpr whose elements are those forms (or an Error, if reading any
/// one of them failed).
pub fn read_all(input: &str) -> Value {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0usize;
    read_expr(&chars, &mut pos, END_OF_TOP_LEVEL)
}

/// Reads forms until `end` is seen (consuming it) or, at the top level
/// (`end == '\0'`), until the input is exhausted. `end` of `)` or `}` means
/// EOF first is an error, since we are inside an unterminated list.
fn read_expr(chars: &[char], pos: &mut usize, end: char) -> Value {
    let mut result = if end == '}' {
        Value::QExpr(Vec::new())
    } else {
        Value::SExpr(Vec::new())
    };
    loop {
        skip_ws_and_comments(chars, pos);
        match chars.get(*pos) {
            None => {
                if end == END_OF_TOP_LEVEL {
                    return result;
                }
                return EvalError::UnexpectedEof.into_value();
            }
            Some(&c) if c == end => {
                *pos += 1;
                return result;
            }
            Some(_) => {
                let form = read_form(chars, pos);
                if form.is_error() {
                    return form;
                }
                result.push(form);
            }
        }
    }
}

fn read_form(chars: &[char], pos: &mut usize) -> Value {
    match chars.get(*pos) {
        None => EvalError::UnexpectedEof.into_value(),
        Some(&'(') => {
            *pos += 1;
            read_expr(chars, pos, ')')
        }
        Some(&'{') => {
            *pos += 1;
            read_expr(chars, pos, '}')
        }
        Some(&'"') => read_string(chars, pos),
        Some(&c) if is_symbol_char(c) => read_symbol(chars, pos),
        Some(&c) => {
            *pos += 1;
            EvalError::UnexpectedChar(c).into_value()
        }
    }
}

fn read_symbol(chars: &[char], pos: &mut usize) -> Value {
    let start = *pos;
    while matches!(chars.get(*pos), Some(&c) if is_symbol_char(c)) {
        *pos += 1;
    }
    let token: String = chars[start..*pos].iter().collect();
    if looks_like_integer(&token) {
        match token.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => EvalError::InvalidNumber.into_value(),
        }
    } else {
        Value::Symbol(token)
    }
}

fn looks_like_integer(token: &str) -> bool {
    if token == "-" {
        return false;
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn read_string(chars: &[char], pos: &mut usize) -> Value {
    *pos += 1; // opening quote
    let mut out = String::new();
    loop {
        match chars.get(*pos) {
            None => return EvalError::UnexpectedEof.into_value(),
            Some(&'"') => {
                *pos += 1;
                return Value::String(out);
            }
            Some(&'\\') => {
                *pos += 1;
                match chars.get(*pos) {
                    None => return EvalError::UnexpectedEof.into_value(),
                    Some(&c) => match unescape(c) {
                        Some(unescaped) => {
                            out.push(unescaped);
                            *pos += 1;
                        }
                        None => return EvalError::InvalidEscape(c).into_value(),
                    },
                }
            }
            Some(&c) => {
                out.push(c);
                *pos += 1;
            }
        }
    }
}

fn unescape(c: char) -> Option<char> {
    Some(match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

fn skip_ws_and_comments(chars: &[char], pos: &mut usize) {
    loop {
        match chars.get(*pos) {
            Some(&c) if is_lispy_whitespace(c) => {
                *pos += 1;
            }
            Some(&';') => {
                while !matches!(chars.get(*pos), None | Some(&'\n')) {
                    *pos += 1;
                }
            }
            _ => return,
        }
    }
}
