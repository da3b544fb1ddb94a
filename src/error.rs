use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        Error::env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization_error(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn invalid_state_error() -> Self {
        Self {
            code: 100,
            message: "invalid state".into(),
        }
    }

    pub fn invalid_input_error() -> Self {
        Self {
            code: 101,
            message: "invalid input".into(),
        }
    }

    pub fn missing_fields_error() -> Self {
        Self {
            code: 102,
            message: "Please fill all fields.".into(),
        }
    }

    pub fn malformed_coordinates_error() -> Self {
        Self {
            code: 103,
            message: "Coordinates must be in the format lat,lng (numbers).".into(),
        }
    }

    pub fn app_not_installed_error(app: &str) -> Self {
        Self {
            code: 104,
            message: format!("{}: Please install the app to use this shortcut.", app),
        }
    }

    pub fn env_var_error(_: env::VarError) -> Self {
        Self {
            code: 1,
            message: "environment variable error".into(),
        }
    }

    pub fn database_error<T: Debug>(err: T) -> Self {
        tracing::error!("database error: {:?}", err);

        Self {
            code: 2,
            message: "database error".into(),
        }
    }

    pub fn reqwest_error(err: reqwest::Error) -> Self {
        tracing::debug!("reqwest error: {:?}", err);

        Self {
            code: 3,
            message: "reqwest error".into(),
        }
    }

    pub fn upstream_error() -> Self {
        Self {
            code: 4,
            message: "upstream error".into(),
        }
    }

    pub fn serialization_error(err: serde_json::Error) -> Self {
        tracing::error!("serialization error: {:?}", err);

        Self {
            code: 5,
            message: "serialization error".into(),
        }
    }

    pub fn config_error(key: &str) -> Self {
        Self {
            code: 6,
            message: format!("invalid configuration value for {}", key),
        }
    }

    pub fn unexpected_error() -> Self {
        Self {
            code: 7,
            message: "unexpected error".into(),
        }
    }

    pub fn is_invalid_state_error(&self) -> bool {
        self.code == 100
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_validation_error(&self) -> bool {
        self.code == 102 || self.code == 103
    }

    pub fn is_app_not_installed_error(&self) -> bool {
        self.code == 104
    }

    /// Database and serialization failures on the shortcut list.
    pub fn is_persistence_error(&self) -> bool {
        self.code == 2 || self.code == 5
    }

    /// Title of the alert shown to the user for this error. Persistence
    /// errors are titled for a failed write; startup load failures are
    /// retitled by the control loop.
    pub fn title(&self) -> &'static str {
        match self.code {
            104 => "Cab service App not found",
            2 | 5 => "Could not save shortcuts",
            _ => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_alert_text() {
        let err = Error::missing_fields_error();
        assert!(err.is_validation_error());
        assert_eq!(err.title(), "Error");
        assert_eq!(err.to_string(), "Please fill all fields.");

        let err = Error::malformed_coordinates_error();
        assert!(err.is_validation_error());
    }

    #[test]
    fn launch_errors_name_the_app() {
        let err = Error::app_not_installed_error("Ola");
        assert!(err.is_app_not_installed_error());
        assert_eq!(err.title(), "Cab service App not found");
        assert!(err.message.starts_with("Ola"));
    }

    #[test]
    fn persistence_errors_are_classified() {
        let err = Error::database_error("disk full");
        assert!(err.is_persistence_error());
        assert_eq!(err.title(), "Could not save shortcuts");
        assert!(!Error::upstream_error().is_persistence_error());
    }
}
