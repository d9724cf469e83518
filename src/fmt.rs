use std::fmt::{Debug, Display, Formatter};

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Breakeven year, or a dash when the EV never catches up.
pub struct FormattedYear(pub Option<u32>);

impl Display for FormattedYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(year) => write!(f, "year {year}"),
            None => write!(f, "–"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(FormattedPercentage(0.04).to_string(), "4.0%");
    }

    #[test]
    fn test_year() {
        assert_eq!(FormattedYear(Some(3)).to_string(), "year 3");
        assert_eq!(FormattedYear(None).to_string(), "–");
    }
}
