//! Digest delivery.
//!
//! # Submodules
//!
//! - [`telegram`]: Posts the digest to a chat through the Telegram Bot API
//!
//! Delivery never fails the run. Every outcome is reported as a
//! [`DeliveryStatus`] and logged where it happens.

pub mod telegram;

/// What happened to the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The messaging API answered 200.
    Sent,
    /// The messaging API answered with any other status.
    Rejected { status: u16, body: String },
    /// The request never got a response.
    Failed { reason: String },
    /// Canned run: the digest was written to the log only.
    Logged,
}

impl DeliveryStatus {
    /// True when nothing went wrong, including canned runs that only log.
    pub fn is_ok(&self) -> bool {
        matches!(self, DeliveryStatus::Sent | DeliveryStatus::Logged)
    }

    /// Short name for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Rejected { .. } => "rejected",
            DeliveryStatus::Failed { .. } => "failed",
            DeliveryStatus::Logged => "logged",
        }
    }
}
