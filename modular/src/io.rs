//! Decimal text input and output.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::{Modular, ModularError, Residue};

impl<const P: Residue> fmt::Display for Modular<P> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl<const P: Residue> fmt::Debug for Modular<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modular<{}>({})", P, self.value())
    }
}

impl<const P: Residue> FromStr for Modular<P> {
    type Err = ModularError;

    /// Parses a signed decimal integer and reduces it modulo `P`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Residue = s.trim().parse()?;
        Ok(Self::new(value))
    }
}

impl<const P: Residue> Modular<P> {
    /// Reads one whitespace-delimited signed decimal integer from `reader` and reduces it
    /// modulo `P`.
    ///
    /// Leading whitespace is skipped. The whitespace byte ending the token is left in the
    /// reader.
    ///
    /// # Errors
    ///
    /// - [`ModularError::UnexpectedEof`] if the input ends before any token.
    /// - [`ModularError::Parse`] if the token is not a signed decimal integer.
    /// - [`ModularError::Io`] if reading fails.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Self, ModularError> {
        let mut token = Vec::new();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut finished = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        finished = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            reader.consume(used);

            if finished {
                break;
            }
        }

        if token.is_empty() {
            return Err(ModularError::UnexpectedEof);
        }
        String::from_utf8_lossy(&token).parse()
    }

    /// Writes the representative of `self` as decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::Io`] if writing fails.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), ModularError> {
        write!(writer, "{}", self.value())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    type M7 = Modular<7>;

    #[test]
    fn test_display_and_debug() {
        let b = M7::new(-8);
        assert_eq!(b.to_string(), "6");
        assert_eq!(format!("{b:>3}"), "  6");
        assert_eq!(format!("{b:?}"), "Modular<7>(6)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("  -8 ".parse::<M7>().unwrap().value(), 6);
        assert_eq!("+13".parse::<M7>().unwrap().value(), 6);
        assert!(matches!("six".parse::<M7>(), Err(ModularError::Parse(_))));
        assert!(matches!("".parse::<M7>(), Err(ModularError::Parse(_))));
    }

    #[test]
    fn test_read_tokens() {
        let mut input = Cursor::new("  45\n-8\t100  ");
        let a = Modular::<5>::read_from(&mut input).unwrap();
        let b = M7::read_from(&mut input).unwrap();
        let c = M7::read_from(&mut input).unwrap();
        assert_eq!(a.value(), 0);
        assert_eq!(b.value(), 6);
        assert_eq!(c.value(), 2);
        assert!(matches!(
            M7::read_from(&mut input),
            Err(ModularError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_read_bad_token() {
        let mut input = Cursor::new("12x 3");
        assert!(matches!(
            M7::read_from(&mut input),
            Err(ModularError::Parse(_))
        ));
        assert_eq!(M7::read_from(&mut input).unwrap().value(), 3);
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        M7::new(-8).write_to(&mut out).unwrap();
        out.push(b' ');
        Modular::<5>::new(45).write_to(&mut out).unwrap();
        assert_eq!(out, b"6 0");
    }
}
