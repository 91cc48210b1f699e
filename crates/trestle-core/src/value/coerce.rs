use super::{ColumnType, Value};

impl Value {
    /// Coerces this value into the given storage class, following SQLite's
    /// column affinity rules.
    ///
    /// Numbers truncate toward zero (saturating at the i64 range) when
    /// narrowed to `Integer` and widen losslessly to `Real`. Text converts to
    /// a number by parsing its longest leading numeric prefix, with `0` when
    /// no prefix exists. Numbers render to text with Rust's `Display`
    /// (integral floats keep a trailing `.0`). Text and blobs reinterpret
    /// each other's bytes, lossy UTF-8 when materializing text.
    ///
    /// `Null` is never coerced.
    pub fn coerce(self, ty: ColumnType) -> Value {
        match ty {
            ColumnType::Integer => self.coerce_integer(),
            ColumnType::Real => self.coerce_real(),
            ColumnType::Text => self.coerce_text(),
            ColumnType::Blob => self.coerce_blob(),
        }
    }

    fn coerce_integer(self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Integer(v) => Value::Integer(v),
            // `as` on floats truncates toward zero, saturates, and maps NaN
            // to zero, matching CAST(REAL AS INTEGER)
            Value::Real(v) => Value::Integer(v as i64),
            Value::Text(v) => Value::Integer(integer_prefix(&v)),
            Value::Blob(v) => Value::Integer(integer_prefix(&String::from_utf8_lossy(&v))),
        }
    }

    fn coerce_real(self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Integer(v) => Value::Real(v as f64),
            Value::Real(v) => Value::Real(v),
            Value::Text(v) => Value::Real(real_prefix(&v)),
            Value::Blob(v) => Value::Real(real_prefix(&String::from_utf8_lossy(&v))),
        }
    }

    fn coerce_text(self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Integer(v) => Value::Text(v.to_string()),
            Value::Real(v) => Value::Text(real_to_text(v)),
            Value::Text(v) => Value::Text(v),
            Value::Blob(v) => Value::Text(String::from_utf8_lossy(&v).into_owned()),
        }
    }

    fn coerce_blob(self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Integer(v) => Value::Blob(v.to_string().into_bytes()),
            Value::Real(v) => Value::Blob(real_to_text(v).into_bytes()),
            Value::Text(v) => Value::Blob(v.into_bytes()),
            Value::Blob(v) => Value::Blob(v),
        }
    }
}

/// Parses the longest leading integer prefix of `text`, SQLite `atoi` style:
/// optional whitespace, optional sign, then digits. Returns 0 when no digit
/// follows; saturates on overflow.
fn integer_prefix(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as i64))
        {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }

    if negative {
        // The magnitude fits: overflow above already returned i64::MIN
        -value
    } else {
        value
    }
}

/// Parses the longest leading float prefix of `text`, SQLite `atof` style:
/// optional whitespace, optional sign, digits with an optional fraction and
/// exponent. Returns 0.0 when no numeric prefix exists.
fn real_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut valid = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || valid {
            end = frac_end;
            valid = valid || frac_end > frac_start;
        }
    }

    if valid && end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    if !valid {
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Formats a float the way SQLite renders REAL as text: integral finite
/// values keep a trailing `.0`.
fn real_to_text(v: f64) -> String {
    let mut text = v.to_string();
    if v.is_finite() && !text.contains('.') && !text.contains('e') && !text.contains('E') {
        text.push_str(".0");
    }
    text
}
