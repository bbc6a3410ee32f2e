//! The `:spec` part of a placeholder.
//!
//! Grammar, after the colon:
//!
//! ```text
//! [[fill]align][sign]["#"]["0"][width]["." precision][type]
//!
//! align     := "<" | ">" | "^"
//! sign      := "+" | "-" | " "
//! type      := "d" | "x" | "X" | "b" | "B" | "o"     integers
//!            | "e" | "E" | "f" | "F" | "g" | "G"     floats
//!            | "s"                                   text, booleans
//!            | "c"                                   characters
//! ```
//!
//! Floats without a type print in the shortest round-trip form, switching to
//! exponent notation (`1e+20`, `1e-07`) when the decimal exponent is below
//! -4 or at least 16.

use crate::arg::Arg;

/// Upper bound on width and precision, so a template cannot request an
/// arbitrarily large allocation.
pub const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Only negative numbers carry a sign.
    #[default]
    Minus,
    Plus,
    Space,
}

/// Parsed placeholder options. The default renders like a bare `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub fill: Option<char>,
    pub align: Option<Align>,
    pub sign: Sign,
    pub alternate: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub kind: Option<char>,
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

/// Reads a run of decimal digits starting at `*pos`.
fn take_number(chars: &[char], pos: &mut usize) -> Option<Option<usize>> {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if start == *pos {
        return Some(None);
    }
    let digits: String = chars[start..*pos].iter().collect();
    match digits.parse::<usize>() {
        Ok(n) if n <= MAX_WIDTH => Some(Some(n)),
        _ => None,
    }
}

impl FormatSpec {
    /// Parses the text after `:`. Returns `None` if it does not follow the
    /// grammar.
    pub fn parse(text: &str) -> Option<Self> {
        let chars: Vec<char> = text.chars().collect();
        let mut spec = FormatSpec::default();
        let mut pos = 0;

        if let Some(align) = chars.get(1).copied().and_then(align_of) {
            spec.fill = Some(chars[0]);
            spec.align = Some(align);
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_of) {
            spec.align = Some(align);
            pos = 1;
        }

        let sign = match chars.get(pos) {
            Some('+') => Some(Sign::Plus),
            Some(' ') => Some(Sign::Space),
            Some('-') => Some(Sign::Minus),
            _ => None,
        };
        if let Some(sign) = sign {
            spec.sign = sign;
            pos += 1;
        }

        if chars.get(pos) == Some(&'#') {
            spec.alternate = true;
            pos += 1;
        }
        if chars.get(pos) == Some(&'0') {
            spec.zero_pad = true;
            pos += 1;
        }

        spec.width = take_number(&chars, &mut pos)?;

        if chars.get(pos) == Some(&'.') {
            pos += 1;
            spec.precision = Some(take_number(&chars, &mut pos)??);
        }

        if let Some(&kind) = chars.get(pos) {
            if !"dxXbBoeEfFgGsc".contains(kind) {
                return None;
            }
            spec.kind = Some(kind);
            pos += 1;
        }

        (pos == chars.len()).then_some(spec)
    }

    fn is_plain_text(&self) -> bool {
        self.sign == Sign::Minus && !self.alternate && !self.zero_pad
    }

    /// Renders `arg` under this spec, or `None` when the spec does not apply
    /// to the argument's kind.
    pub fn apply(&self, arg: &Arg) -> Option<String> {
        match arg {
            Arg::Int(v) => self.integer(*v < 0, v.unsigned_abs()),
            Arg::UInt(v) => self.integer(false, *v),
            Arg::Float(v) => self.float(*v),
            Arg::Bool(v) => self.text(&v.to_string(), &['s']),
            Arg::Char(v) => self.text(&v.to_string(), &['c']),
            Arg::Text(v) => self.text(v, &['s']),
        }
    }

    fn sign_for(&self, negative: bool) -> &'static str {
        match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        }
    }

    fn integer(&self, negative: bool, magnitude: u64) -> Option<String> {
        if self.precision.is_some() {
            return None;
        }
        let (digits, prefix) = match self.kind {
            None | Some('d') => (magnitude.to_string(), ""),
            Some('x') => (format!("{:x}", magnitude), "0x"),
            Some('X') => (format!("{:X}", magnitude), "0X"),
            Some('b') => (format!("{:b}", magnitude), "0b"),
            Some('B') => (format!("{:b}", magnitude), "0B"),
            Some('o') => (format!("{:o}", magnitude), "0"),
            _ => return None,
        };
        let prefix = if self.alternate { prefix } else { "" };
        Some(self.pad_number(self.sign_for(negative), prefix, &digits))
    }

    fn float(&self, value: f64) -> Option<String> {
        if self.alternate {
            return None;
        }
        let upper = matches!(self.kind, Some('E' | 'F' | 'G'));
        let magnitude = value.abs();
        let body = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            "inf".to_string()
        } else {
            match (self.kind, self.precision) {
                (None, None) => shortest(magnitude),
                (None, Some(p)) => general(magnitude, p),
                (Some('g' | 'G'), p) => general(magnitude, p.unwrap_or(6)),
                (Some('e' | 'E'), p) => exponent(magnitude, p.unwrap_or(6)),
                (Some('f' | 'F'), p) => format!("{:.*}", p.unwrap_or(6), magnitude),
                _ => return None,
            }
        };
        let body = if upper { body.to_uppercase() } else { body };
        let negative = value.is_sign_negative() && !value.is_nan();
        Some(self.pad_number(self.sign_for(negative), "", &body))
    }

    fn text(&self, value: &str, kinds: &[char]) -> Option<String> {
        if !self.is_plain_text() {
            return None;
        }
        if let Some(kind) = self.kind {
            if !kinds.contains(&kind) {
                return None;
            }
        }
        let value: String = match self.precision {
            Some(p) if kinds.contains(&'s') => value.chars().take(p).collect(),
            Some(_) => return None,
            None => value.to_string(),
        };
        Some(self.pad(&value, Align::Left))
    }

    fn pad_number(&self, sign: &str, prefix: &str, body: &str) -> String {
        let len = sign.chars().count() + prefix.chars().count() + body.chars().count();
        match self.width {
            Some(width) if self.zero_pad && self.align.is_none() && width > len => {
                format!("{}{}{}{}", sign, prefix, "0".repeat(width - len), body)
            }
            _ => self.pad(&format!("{}{}{}", sign, prefix, body), Align::Right),
        }
    }

    fn pad(&self, value: &str, default_align: Align) -> String {
        let len = value.chars().count();
        let Some(width) = self.width.filter(|&w| w > len) else {
            return value.to_string();
        };
        let fill = self.fill.unwrap_or(' ');
        let total = width - len;
        let (left, right) = match self.align.unwrap_or(default_align) {
            Align::Left => (0, total),
            Align::Right => (total, 0),
            Align::Center => (total / 2, total - total / 2),
        };
        let mut out = String::with_capacity(value.len() + total * fill.len_utf8());
        out.extend(std::iter::repeat_n(fill, left));
        out.push_str(value);
        out.extend(std::iter::repeat_n(fill, right));
        out
    }
}

/// Splits Rust's `{:e}` output (`1.5e-7`) into mantissa and exponent.
fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

/// Exponent in the C style: explicit sign, at least two digits.
fn c_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// What a bare `{}` produces for a float.
pub(crate) fn canonical_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let body = if value.is_infinite() {
        "inf".to_string()
    } else {
        shortest(value.abs())
    };
    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

fn shortest(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exp) = split_exponent(&scientific);
    if (-4..16).contains(&exp) {
        value.to_string()
    } else {
        c_exponent(mantissa, exp)
    }
}

fn exponent(value: f64, precision: usize) -> String {
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exp) = split_exponent(&scientific);
    c_exponent(mantissa, exp)
}

/// `%g`: `precision` significant digits, trailing zeros removed.
fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = split_exponent(&scientific);
    if exp < -4 || exp >= precision as i32 {
        c_exponent(trim_fraction(mantissa), exp)
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}
