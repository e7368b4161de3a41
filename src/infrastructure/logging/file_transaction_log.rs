use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::errors::PaymentError;
use crate::domain::transaction_log::TransactionLog;

#[derive(Debug, Clone)]
pub struct FileTransactionLog {
	path: PathBuf,
}

impl FileTransactionLog {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

/// `[2024-03-01T12:00:00Z] MESSAGE`
pub fn format_log_line(
	at: OffsetDateTime,
	message: &str,
) -> Result<String, PaymentError> {
	let timestamp = at.format(&Rfc3339).map_err(|e| PaymentError::Log {
		source: io::Error::new(io::ErrorKind::InvalidData, e),
	})?;
	Ok(format!("[{timestamp}] {message}"))
}

impl TransactionLog for FileTransactionLog {
	fn append(&self, message: &str) -> Result<(), PaymentError> {
		let line = format_log_line(OffsetDateTime::now_utc(), message)?;
		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)
			.map_err(|source| PaymentError::Log { source })?;

		writeln!(file, "{line}").map_err(|source| PaymentError::Log { source })
	}
}
