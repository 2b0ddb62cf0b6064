/// The budget brackets offered by the work inquiry form. Anything outside
/// these four literal options is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBucket {
    UpTo2K,
    From2KTo5K,
    From5KTo10K,
    MoreThan10K,
}

impl BudgetBucket {
    pub fn parse(s: String) -> Result<BudgetBucket, String> {
        match s.as_str() {
            "$1K – $2K" => Ok(Self::UpTo2K),
            "$2K – $5K" => Ok(Self::From2KTo5K),
            "$5K – $10K" => Ok(Self::From5KTo10K),
            "More than $10K" => Ok(Self::MoreThan10K),
            other => Err(format!("{other} is not a known budget range.")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo2K => "$1K – $2K",
            Self::From2KTo5K => "$2K – $5K",
            Self::From5KTo10K => "$5K – $10K",
            Self::MoreThan10K => "More than $10K",
        }
    }
}

impl AsRef<str> for BudgetBucket {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
