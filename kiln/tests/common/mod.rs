//! Minimal reader used to check written documents.
//!
//! Only understands what the tests need: literal strings, fixed width xref
//! tables, `startxref` and `N G obj` headers.
#![allow(dead_code)]

use nom::{branch, bytes, character, combinator, error::ErrorKind, IResult};

const STARTXREF: &[u8] = b"startxref";
const END_OBJECT: &[u8] = b"endobj";

fn fail<T>(input: &[u8], kind: ErrorKind) -> IResult<&[u8], T> {
    Err(nom::Err::Error(nom::error::Error::new(input, kind)))
}

fn octal(digits: &[u8]) -> u8 {
    // high order overflow is ignored
    let value = digits.iter().fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
    (value & 0xff) as u8
}

/// Everything after a backslash. `None` for line continuations.
fn escape_sequence(input: &[u8]) -> IResult<&[u8], Option<u8>> {
    branch::alt((
        combinator::map(
            bytes::complete::take_while_m_n(1, 3, |c: u8| (b'0'..=b'7').contains(&c)),
            |digits: &[u8]| Some(octal(digits)),
        ),
        combinator::value(None, character::complete::line_ending),
        combinator::value(None, character::complete::char('\r')),
        combinator::map(bytes::complete::take(1usize), |c: &[u8]| {
            Some(match c[0] {
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                b'b' => 0x08,
                b'f' => 0x0c,
                other => other,
            })
        }),
    ))(input)
}

/// Parse a literal string including its outer parentheses.
pub fn literal_string(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let (mut remainder, _) = character::complete::char('(')(input)?;
    let mut out = Vec::new();
    let mut open_parenthesis = 0usize;

    loop {
        let (&c, rest) = match remainder.split_first() {
            Some(split) => split,
            None => return fail(remainder, ErrorKind::Eof),
        };
        remainder = rest;
        match c {
            b'\\' => {
                let (rest, decoded) = escape_sequence(remainder)?;
                remainder = rest;
                out.extend(decoded);
            }
            b'(' => {
                open_parenthesis += 1;
                out.push(c);
            }
            b')' if open_parenthesis == 0 => return Ok((remainder, out)),
            b')' => {
                open_parenthesis -= 1;
                out.push(c);
            }
            // unescaped CR and CRLF are read as LF
            b'\r' => {
                if remainder.first() == Some(&b'\n') {
                    remainder = &remainder[1..];
                }
                out.push(b'\n');
            }
            _ => out.push(c),
        }
    }
}

fn eol(input: &[u8]) -> IResult<&[u8], &[u8]> {
    branch::alt((character::complete::line_ending, bytes::complete::tag(&b"\r"[..])))(input)
}

fn fixed_digits(input: &[u8], width: usize) -> IResult<&[u8], u64> {
    let (remainder, digits) = bytes::complete::take(width)(input)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return fail(input, ErrorKind::Digit);
    }
    let value = digits.iter().fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
    Ok((remainder, value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefRow {
    pub number: u32,
    /// Byte offset for objects in use, next free object otherwise.
    pub value: u64,
    pub generation: u32,
    pub in_use: bool,
}

/// Entry lines end in exactly two bytes.
fn entry_eol(input: &[u8]) -> IResult<&[u8], &[u8]> {
    branch::alt((
        bytes::complete::tag(&b" \n"[..]),
        bytes::complete::tag(&b" \r"[..]),
        bytes::complete::tag(&b"\r\n"[..]),
    ))(input)
}

/// One `nnnnnnnnnn ggggg n` line, the columns have to be exactly as wide as
/// the format demands and the whole line is 20 bytes.
fn xref_row(input: &[u8]) -> IResult<&[u8], (u64, u32, bool)> {
    let (remainder, value) = fixed_digits(input, 10)?;
    let (remainder, _) = character::complete::char(' ')(remainder)?;
    let (remainder, generation) = fixed_digits(remainder, 5)?;
    let (remainder, _) = character::complete::char(' ')(remainder)?;
    let (remainder, in_use) = branch::alt((
        combinator::value(true, character::complete::char('n')),
        combinator::value(false, character::complete::char('f')),
    ))(remainder)?;
    let (remainder, _) = entry_eol(remainder)?;
    Ok((remainder, (value, generation as u32, in_use)))
}

fn xref_subsection(input: &[u8]) -> IResult<&[u8], Vec<XrefRow>> {
    let (remainder, first) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::char(' ')(remainder)?;
    let (remainder, count) = character::complete::u32(remainder)?;
    let (mut remainder, _) = eol(remainder)?;

    let mut rows = Vec::new();
    for i in 0..count {
        let (rest, (value, generation, in_use)) = xref_row(remainder)?;
        rows.push(XrefRow {
            number: first + i,
            value,
            generation,
            in_use,
        });
        remainder = rest;
    }
    Ok((remainder, rows))
}

/// `xref` keyword followed by any number of subsections.
pub fn xref_table(input: &[u8]) -> IResult<&[u8], Vec<Vec<XrefRow>>> {
    let (remainder, _) = bytes::complete::tag(&b"xref"[..])(input)?;
    let (remainder, _) = eol(remainder)?;
    nom::multi::many0(xref_subsection)(remainder)
}

/// Offset behind the last `startxref` keyword of the document.
pub fn startxref_tail(input: &[u8]) -> IResult<&[u8], usize> {
    let position = match input.windows(STARTXREF.len()).rposition(|w| w == STARTXREF) {
        Some(position) => position,
        None => return fail(input, ErrorKind::TakeUntil),
    };
    let (remainder, _) = eol(&input[position + STARTXREF.len()..])?;
    let (remainder, offset) = character::complete::u64(remainder)?;
    Ok((remainder, offset as usize))
}

/// `N G obj` header and the body up to `endobj`, without the surrounding line
/// endings.
pub fn indirect_object(input: &[u8]) -> IResult<&[u8], (u32, u32, &[u8])> {
    let (remainder, number) = character::complete::u32(input)?;
    let (remainder, _) = character::complete::char(' ')(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = bytes::complete::tag(&b" obj"[..])(remainder)?;
    let (remainder, _) = eol(remainder)?;
    let (remainder, body) = bytes::complete::take_until(END_OBJECT)(remainder)?;
    let (remainder, _) = bytes::complete::tag(END_OBJECT)(remainder)?;

    let body = body
        .strip_suffix(b"\r\n")
        .or_else(|| body.strip_suffix(b"\n"))
        .or_else(|| body.strip_suffix(b"\r"))
        .unwrap_or(body);
    Ok((remainder, (number, generation, body)))
}

/// Read the last xref table of `document`.
pub fn read_xref(document: &[u8]) -> Vec<XrefRow> {
    let (_, startxref) = startxref_tail(document).expect("startxref");
    let (_, subsections) = xref_table(&document[startxref..]).expect("xref table");
    subsections.into_iter().flatten().collect()
}
