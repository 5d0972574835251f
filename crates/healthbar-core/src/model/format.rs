/// Number formatting for value labels.
///
/// Patterns use the familiar decimal-pattern notation:
///
/// - `0`: a digit that is always shown (minimum digit count).
/// - `#`: a digit that is shown only when significant.
/// - `.`: decimal separator.
/// - `,`: grouping separator (integer part only).
/// - `%` / `‰`: multiply by 100 / 1000 and show the sign.
/// - `'...'`: quoted literal text; `''` is a literal quote.
///
/// Anything else before or after the digit run is copied verbatim as a
/// prefix or suffix; pattern characters inside the suffix must be quoted.
/// A negative subpattern after `;` is accepted and ignored.
/// Rounding is half-to-even.
use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "0";

/// A compiled number pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    min_int: usize,
    min_frac: usize,
    max_frac: usize,
    grouping: Option<usize>,
    multiplier: u32,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Prefix,
    Number,
    Suffix,
}

impl NumberFormat {
    /// Compile a pattern such as `"0"`, `"0.0"` or `"#,##0.## pts"`.
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        if pattern.is_empty() {
            return Err(FormatError::Empty);
        }

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut number = String::new();
        let mut multiplier = 1u32;
        let mut section = Section::Prefix;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    let mut literal = String::new();
                    let mut closed = false;
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                        closed = true;
                    } else {
                        while let Some(q) = chars.next() {
                            if q != '\'' {
                                literal.push(q);
                            } else if chars.peek() == Some(&'\'') {
                                chars.next();
                                literal.push('\'');
                            } else {
                                closed = true;
                                break;
                            }
                        }
                    }
                    if !closed {
                        return Err(FormatError::UnterminatedQuote {
                            pattern: pattern.to_string(),
                        });
                    }
                    if section == Section::Number {
                        section = Section::Suffix;
                    }
                    affix_for(section, &mut prefix, &mut suffix).push_str(&literal);
                }
                // Negative subpattern: the positive one fully describes us.
                ';' => break,
                '0' | '#' | ',' | '.' => {
                    if section == Section::Suffix {
                        return Err(FormatError::PlaceholderInSuffix {
                            pattern: pattern.to_string(),
                        });
                    }
                    section = Section::Number;
                    number.push(c);
                }
                '%' | '‰' => {
                    if multiplier != 1 {
                        return Err(FormatError::MultipleMultipliers {
                            pattern: pattern.to_string(),
                        });
                    }
                    multiplier = if c == '%' { 100 } else { 1000 };
                    if section == Section::Number {
                        section = Section::Suffix;
                    }
                    affix_for(section, &mut prefix, &mut suffix).push(c);
                }
                other => {
                    if section == Section::Number {
                        section = Section::Suffix;
                    }
                    affix_for(section, &mut prefix, &mut suffix).push(other);
                }
            }
        }

        if !number.chars().any(|c| c == '0' || c == '#') {
            return Err(FormatError::NoDigits(pattern.to_string()));
        }

        let (int_part, frac_part) = number.split_once('.').unwrap_or((number.as_str(), ""));
        if frac_part.contains('.') {
            return Err(FormatError::MultipleDecimalSeparators {
                pattern: pattern.to_string(),
            });
        }
        if frac_part.contains(',') {
            return Err(FormatError::GroupingInFraction {
                pattern: pattern.to_string(),
            });
        }

        let min_int = int_part.chars().filter(|&c| c == '0').count();
        let grouping = int_part
            .rfind(',')
            .map(|pos| int_part[pos + 1..].chars().filter(|&c| c != ',').count())
            .filter(|&size| size > 0);

        let mut min_frac = 0;
        let mut seen_optional = false;
        for c in frac_part.chars() {
            match c {
                '0' if seen_optional => {
                    return Err(FormatError::MisplacedFractionZero {
                        pattern: pattern.to_string(),
                    });
                }
                '0' => min_frac += 1,
                _ => seen_optional = true,
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            prefix,
            suffix,
            min_int,
            min_frac,
            max_frac: frac_part.chars().count(),
            grouping,
            multiplier,
        })
    }

    /// The source pattern this format was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format `value` according to the pattern.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let negative = value < 0.0;
        let sign = if negative { "-" } else { "" };
        if value.is_infinite() {
            return format!("{sign}{}∞{}", self.prefix, self.suffix);
        }

        let scaled = value.abs() * f64::from(self.multiplier);
        let rendered = format!("{:.*}", self.max_frac, scaled);
        let (int_raw, frac_raw) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let mut frac = frac_raw.to_string();
        while frac.len() > self.min_frac && frac.ends_with('0') {
            frac.pop();
        }

        let significant = int_raw.trim_start_matches('0');
        let mut int_digits = format!("{:0>width$}", significant, width = self.min_int);
        if int_digits.is_empty() && frac.is_empty() {
            int_digits.push('0');
        }

        let is_zero = int_digits.chars().all(|c| c == '0') && frac.chars().all(|c| c == '0');
        let sign = if is_zero { "" } else { sign };

        let int_text = match self.grouping {
            Some(size) => group_digits(&int_digits, size),
            None => int_digits,
        };

        let mut out = String::with_capacity(
            sign.len() + self.prefix.len() + int_text.len() + frac.len() + self.suffix.len() + 1,
        );
        out.push_str(sign);
        out.push_str(&self.prefix);
        out.push_str(&int_text);
        if !frac.is_empty() {
            out.push('.');
            out.push_str(&frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            min_int: 1,
            min_frac: 0,
            max_frac: 0,
            grouping: None,
            multiplier: 1,
        }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn affix_for<'a>(section: Section, prefix: &'a mut String, suffix: &'a mut String) -> &'a mut String {
    match section {
        Section::Prefix => prefix,
        Section::Number | Section::Suffix => suffix,
    }
}

/// Insert a `,` between every `size` digits counting from the right.
fn group_digits(digits: &str, size: usize) -> String {
    if digits.len() <= size {
        return digits.to_string();
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / size);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % size == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
