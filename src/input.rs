use crate::error::{GameError, Rejection};
use std::io::{BufRead, Write};
use tracing::debug;

/// Blocking line reader that only hands back integers in a requested range.
///
/// Bad lines are answered with a message on the writer and the read
/// is retried with no limit.
#[derive(Debug)]
pub struct InputReader<I, W> {
    input: I,
    out: W,
    line: String,
}

impl<I: BufRead, W: Write> InputReader<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self {
            input,
            out,
            line: String::new(),
        }
    }

    /// Writer shared with the presenter
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.out)
    }

    pub fn read_int_in(&mut self, low: i64, high: i64) -> Result<i64, GameError> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match check(&self.line, low, high) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(?rejection, "rejected input");
                    writeln!(self.out, "{rejection}")?;
                    self.out.flush()?;
                }
            }
        }
    }

    pub fn read_int_up_to(&mut self, high: i64) -> Result<i64, GameError> {
        self.read_int_in(1, high)
    }

    pub fn read_int(&mut self) -> Result<i64, GameError> {
        self.read_int_in(i64::MIN, i64::MAX)
    }
}

/// Parse one line and check it against the closed range `[low, high]`.
pub fn check(line: &str, low: i64, high: i64) -> Result<i64, Rejection> {
    let trimmed = line.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| Rejection::NotAnInteger {
            input: trimmed.to_string(),
            low,
            high,
        })?;
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(Rejection::OutOfRange { value, low, high })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn reader(script: &str) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(r: InputReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(r.into_parts().1).unwrap()
    }

    #[test]
    fn retries_until_value_in_range() {
        let mut r = reader("abc\n999\n5\n");
        assert_eq!(r.read_int_in(1, 5).unwrap(), 5);

        let out = output(r);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Invalid input: \"abc\" is not an integer. Enter an integer between 1 and 5 inclusive"
        );
        assert_eq!(
            lines[1],
            "Invalid input: 999 is out of range. Enter an integer between 1 and 5 inclusive"
        );
    }

    #[test]
    fn accepts_both_bounds() {
        let mut r = reader("0\n5\n");
        assert_eq!(r.read_int_in(0, 5).unwrap(), 0);
        assert_eq!(r.read_int_in(0, 5).unwrap(), 5);
        assert!(output(r).is_empty());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut r = reader("  3 \r\n");
        assert_eq!(r.read_int_up_to(3).unwrap(), 3);
    }

    #[test]
    fn read_int_up_to_starts_at_one() {
        let mut r = reader("0\n1\n");
        assert_eq!(r.read_int_up_to(2).unwrap(), 1);
        assert!(output(r).contains("between 1 and 2"));
    }

    #[test]
    fn unbounded_read_takes_negative_numbers() {
        let mut r = reader("-42\n");
        assert_eq!(r.read_int().unwrap(), -42);
    }

    #[test]
    fn unbounded_read_rejects_overflow() {
        let mut r = reader("99999999999999999999\n7\n");
        assert_eq!(r.read_int().unwrap(), 7);
        assert!(output(r).contains("is not an integer"));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut r = reader("nope\n");
        assert_matches!(r.read_int_in(1, 5), Err(GameError::InputClosed));
    }

    #[test]
    fn never_returns_out_of_range_values() {
        let script = "x\n-1\n11\n\n4.5\n10\n";
        let mut r = reader(script);
        let v = r.read_int_in(0, 10).unwrap();
        assert_eq!(v, 10);
        assert_eq!(output(r).lines().count(), 5);
    }

    #[test]
    fn check_classifies_rejections() {
        assert_matches!(check("12", 1, 10), Err(Rejection::OutOfRange { value: 12, .. }));
        assert_matches!(check("", 1, 10), Err(Rejection::NotAnInteger { .. }));
        assert_eq!(check("+7", 1, 10), Ok(7));
    }
}
