//! Boletin Notifier
//!
//! Composes and delivers the per-run email digest. The digest names only the
//! references processed in the current run, never the whole corpus.
//!
//! Delivery is deliberately non-fatal: incomplete transport configuration is
//! a configuration choice (skipped with a logged notice by the caller), and
//! a send failure is logged without affecting the run outcome.

#![warn(missing_docs)]

mod digest;
mod mailer;

pub use digest::{compose_digest, Digest, SUMMARY_SNIPPET_CHARS};
pub use mailer::{Mailer, MailerConfig, NotifyError, SmtpMailer, SmtpSettings};
