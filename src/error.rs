use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload missing or lacking the flags a command needs. Holds the usage hint.
    #[error("Invalid format. {0}")]
    InvalidFormat(&'static str),

    #[error("You must at least write an amount of an expense!")]
    MissingAmount,

    #[error("You can't add an expense with a negative number or that equals to zero!")]
    NonPositiveAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid value for --{flag}: {value}")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("Expense with ID {0} not found!")]
    NotFound(u64),

    #[error("You can't see a total for non existing month. Try entering month in range 1-12!")]
    MonthOutOfRange(u32),

    #[error("Unknown command. See help for more information.")]
    UnknownCommand,

    #[error("No expense IDs left after {0}.")]
    IdsExhausted(u64),

    #[error("Error writing to {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: Box<EtrackerError>,
    },
}

impl EtrackerError {
    /// Mistakes in what the user typed, as opposed to failures of the machine.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_)
                | Self::MissingAmount
                | Self::NonPositiveAmount
                | Self::InvalidAmount(_)
                | Self::InvalidNumber { .. }
                | Self::NotFound(_)
                | Self::MonthOutOfRange(_)
                | Self::UnknownCommand
        )
    }

    pub fn write(file: &str, source: impl Into<EtrackerError>) -> Self {
        Self::Write {
            file: file.to_string(),
            source: Box::new(source.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtrackerError>;
