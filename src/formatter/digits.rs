//! Decimal digits of a finite `f64`

/// Unsigned decimal number as ASCII digit strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecimalDigits {
    /// Integer digits without leading zeros, "0" for values below one
    integer: String,
    /// Fraction digits
    fraction: String,
}

impl DecimalDigits {
    /// Shortest round-trip decimal digits of `|value|`; `value` must be finite
    pub(crate) fn from_f64(value: f64) -> Self {
        // `{:e}` prints the shortest digits that read back as the same value
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i64 = exponent.parse().unwrap_or(0);
        let mut significand: String = mantissa.chars().filter(char::is_ascii_digit).collect();

        // Position of the decimal point inside `significand`
        let point = exponent + 1;
        let (integer, fraction) = if point <= 0 {
            let leading = usize::try_from(-point).unwrap_or(0);
            let mut fraction = "0".repeat(leading);
            fraction.push_str(&significand);
            ("0".to_string(), fraction)
        } else {
            let point = usize::try_from(point).unwrap_or(0);
            if significand.len() < point {
                let padding = point - significand.len();
                significand.extend(std::iter::repeat_n('0', padding));
            }
            let fraction = significand.split_off(point);
            (significand, fraction)
        };

        let mut digits = Self {
            integer,
            fraction: fraction.trim_end_matches('0').to_string(),
        };
        digits.normalize_integer();
        digits
    }

    pub(crate) fn integer(&self) -> &str {
        &self.integer
    }

    pub(crate) fn fraction(&self) -> &str {
        &self.fraction
    }

    /// Multiply by `10^exponent` by moving the decimal point
    pub(crate) fn scale_pow10(&mut self, exponent: usize) {
        let moved = exponent.min(self.fraction.len());
        self.integer.push_str(&self.fraction[..moved]);
        self.fraction.drain(..moved);
        self.integer.extend(std::iter::repeat_n('0', exponent - moved));
        self.normalize_integer();
    }

    /// Round to `max_fraction` digits, ties away from zero
    pub(crate) fn round(&mut self, max_fraction: usize) {
        if self.fraction.len() <= max_fraction {
            return;
        }

        let round_up = self.fraction.as_bytes()[max_fraction] >= b'5';
        self.fraction.truncate(max_fraction);
        if !round_up {
            return;
        }

        let mut digits: Vec<u8> = self
            .integer
            .bytes()
            .chain(self.fraction.bytes())
            .collect();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }

        let integer_len = digits.len() - self.fraction.len();
        // Only ASCII digits were pushed
        self.fraction = digits[integer_len..].iter().map(|&b| b as char).collect();
        self.integer = digits[..integer_len].iter().map(|&b| b as char).collect();
    }

    /// Drop trailing fraction zeros beyond `min`, then pad with zeros up to `min`
    pub(crate) fn set_minimum_fraction(&mut self, min: usize) {
        while self.fraction.len() > min && self.fraction.ends_with('0') {
            self.fraction.pop();
        }
        if self.fraction.len() < min {
            let padding = min - self.fraction.len();
            self.fraction.extend(std::iter::repeat_n('0', padding));
        }
    }

    fn normalize_integer(&mut self) {
        let trimmed = self.integer.trim_start_matches('0');
        self.integer = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
    }
}
