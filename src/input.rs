//! Parsing requests from text.
//!
//! A request is written as whitespace-separated decimal integers: the
//! capacity, followed by one period per consumer.

use crate::eta::Request;
use failure::Error;
use std::str::FromStr;

impl FromStr for Request {
    type Err = Error;
    fn from_str(s: &str) -> Result<Request, Error> {
        let numbers = s
            .split_whitespace()
            .map(|token| {
                i64::from_str(token).map_err(|e| format_err!("bad number {:?}: {}", token, e))
            })
            .collect::<Result<Vec<i64>, Error>>()?;

        let (&capacity, periods) = numbers
            .split_first()
            .ok_or_else(|| format_err!("empty request: {:?}", s))?;

        Ok(Request::new(capacity, periods)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::eta::InvalidInput;

    #[test]
    #[rustfmt::skip]
    fn test_request_fromstr() -> Result<(), Error> {
        assert_eq!(Request::from_str("4 3 7")?, Request::new(4, &[3, 7])?);
        assert_eq!(Request::from_str("  16\t2 4  3 6\n")?, Request::new(16, &[2, 4, 3, 6])?);
        assert_eq!(Request::from_str("0 5")?.eta(), 0);
        assert_eq!(Request::from_str("15 2 4 3 6")?.eta(), 12);

        assert!(Request::from_str("").is_err());
        assert!(Request::from_str("   ").is_err());
        assert!(Request::from_str("4 three").is_err());
        assert!(Request::from_str("4 3.5").is_err());
        assert!(Request::from_str("99999999999999999999 1").is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_input_survives() {
        let err = Request::from_str("5").unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidInput>(), Some(&InvalidInput::NoPeriods));

        let err = Request::from_str("-2 1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::NegativeCapacity(-2))
        );

        let err = Request::from_str("5 1 0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::NonPositivePeriod { index: 1, period: 0 })
        );
    }

    #[test]
    fn test_bad_token_message() {
        let err = Request::from_str("4 x").unwrap_err();
        assert!(err.to_string().starts_with("bad number \"x\""));
    }
}
