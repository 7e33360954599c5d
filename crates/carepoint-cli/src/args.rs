use carepoint_models::UserType;
use std::convert::Infallible;
use std::str::FromStr;

/// A role given on the command line.
///
/// Parsing never fails: unknown names become an absent role, which the
/// evaluator treats as least privileged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleArg {
    pub raw: String,
    pub role: Option<UserType>,
}

impl RoleArg {
    pub fn is_recognised(&self) -> bool {
        self.role.is_some()
    }
}

impl FromStr for RoleArg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            raw: s.to_string(),
            role: UserType::parse_lenient(s),
        })
    }
}
