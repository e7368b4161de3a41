use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use log::info;

use crate::domain::errors::PaymentError;
use crate::domain::notifier::Notifier;

/// Prints notifications instead of emailing them.
pub struct ConsoleNotifier<W: Write + Send + 'static = Stdout> {
	out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}
}

impl<W: Write + Send + 'static> ConsoleNotifier<W> {
	pub fn new(out: W) -> Self {
		Self {
			out: Mutex::new(out),
		}
	}

	pub fn into_inner(self) -> W {
		self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
	}
}

impl<W: Write + Send + 'static> Notifier for ConsoleNotifier<W> {
	fn notify(&self, recipient: &str, message: &str) -> Result<(), PaymentError> {
		info!("Sending notification to {recipient}");
		let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
		writeln!(out, "Notification to {recipient}: {message}")
			.and_then(|_| out.flush())
			.map_err(|source| PaymentError::Notification { source })
	}
}
