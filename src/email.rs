//! Outbound SMTP relay using lettre

use std::time::Duration;

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::{config::MailConfig, error::AppError, quote::QuoteRequest};

/// Bound on connect/read so a stalled mail server cannot hang a worker.
const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Implicit-TLS submission port; every other port gets STARTTLS.
const SMTPS_PORT: u16 = 465;

/// Email relay for quote request notifications
///
/// Built per submission: the transport and any connection it opens live
/// for exactly one send and are released when the service drops.
#[derive(Debug)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl EmailService {
    /// Create a new email relay from configuration
    ///
    /// Fails with `Configuration` when any required mail setting is
    /// absent, before any network operation.
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        if !config.is_configured() {
            return Err(AppError::Configuration);
        }

        let creds = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        // Port 465 speaks TLS from the first byte; everything else opens
        // in plaintext and upgrades with STARTTLS before authenticating
        let builder = if config.smtp_port == SMTPS_PORT {
            SmtpTransport::relay(&config.smtp_host)
        } else {
            SmtpTransport::starttls_relay(&config.smtp_host)
        };

        let mailer = builder?
            .port(config.smtp_port)
            .credentials(creds)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            mailer,
            from: config.smtp_username.clone(),
            to: config.recipient.clone(),
        })
    }

    /// Relay one validated quote request in a single synchronous send.
    pub fn send_quote(&self, quote: &QuoteRequest) -> Result<(), AppError> {
        let message = self.message(quote)?;
        self.mailer.send(&message)?;

        Ok(())
    }

    fn message(&self, quote: &QuoteRequest) -> Result<Message, AppError> {
        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(self.to.parse::<Mailbox>()?)
            // Replies go to the requester, not the relay mailbox
            .reply_to(quote.email.parse::<Mailbox>()?)
            .subject(quote.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(quote.body())?;

        Ok(message)
    }
}
