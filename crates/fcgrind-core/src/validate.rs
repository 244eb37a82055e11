use crate::error::{GrindError, Result};
use crate::params::SearchParams;

pub fn validate_params(p: &SearchParams) -> Result<()> {
    if p.min_bits == 0 {
        return Err(GrindError::Config("min_bits must be >= 1".into()));
    }
    if p.min_bits >= p.max_bits {
        return Err(GrindError::Config(format!(
            "min_bits must be < max_bits (got {} >= {})",
            p.min_bits, p.max_bits
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(validate_params(&SearchParams::default()).is_ok());
    }

    #[test]
    fn inverted_window_range_rejected() {
        let p = SearchParams {
            min_bits: 35,
            max_bits: 32,
            ..SearchParams::default()
        };
        assert!(validate_params(&p).is_err());

        let p = SearchParams {
            min_bits: 32,
            max_bits: 32,
            ..SearchParams::default()
        };
        assert!(validate_params(&p).is_err());
    }

    #[test]
    fn zero_min_bits_rejected() {
        let p = SearchParams {
            min_bits: 0,
            max_bits: 8,
            ..SearchParams::default()
        };
        assert!(validate_params(&p).is_err());
    }
}
