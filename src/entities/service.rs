use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CabService {
    Uber,
    Ola,
}

impl CabService {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uber => "Uber",
            Self::Ola => "Ola",
        }
    }
}

impl fmt::Display for CabService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceSelection {
    #[default]
    Uber,
    Ola,
    Both,
}

impl ServiceSelection {
    pub fn services(&self) -> Vec<CabService> {
        match self {
            Self::Uber => vec![CabService::Uber],
            Self::Ola => vec![CabService::Ola],
            Self::Both => vec![CabService::Uber, CabService::Ola],
        }
    }
}

impl FromStr for ServiceSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uber" => Ok(Self::Uber),
            "ola" => Ok(Self::Ola),
            "both" => Ok(Self::Both),
            _ => Err(Error::invalid_input_error()),
        }
    }
}

#[test]
fn selection_expands_to_services() {
    assert_eq!(ServiceSelection::default().services(), vec![CabService::Uber]);
    assert_eq!(
        "Both".parse::<ServiceSelection>().unwrap().services(),
        vec![CabService::Uber, CabService::Ola]
    );
    assert!("lyft".parse::<ServiceSelection>().is_err());
}
