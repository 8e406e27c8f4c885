use alloy_primitives::TxHash;

use super::constants::{MINT_CONFIRMED_MESSAGE, MINT_SENT_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "toast-info",
            NotificationLevel::Success => "toast-success",
            NotificationLevel::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}

/// Anything that can show a notification to the user
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Progress reported by the SDK for one claim transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxEvent {
    Sent(TxHash),
    Confirmed(TxHash),
    /// Message from the SDK, untouched
    Failed(String),
}

impl TxEvent {
    pub fn notification(&self) -> Notification {
        match self {
            TxEvent::Sent(_) => Notification::info(MINT_SENT_MESSAGE),
            TxEvent::Confirmed(_) => Notification::success(MINT_CONFIRMED_MESSAGE),
            TxEvent::Failed(message) => Notification::error(message.clone()),
        }
    }
}

/// Where the current mint attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MintPhase {
    #[default]
    Idle,
    /// Triggered, waiting for the wallet to submit
    Pending,
    /// Submitted, waiting for confirmation
    Sent(TxHash),
}

impl MintPhase {
    /// The mint button is disabled while this is true
    pub fn is_busy(&self) -> bool {
        !matches!(self, MintPhase::Idle)
    }

    /// Returns None when a mint is already in flight
    pub fn start(self) -> Option<MintPhase> {
        match self {
            MintPhase::Idle => Some(MintPhase::Pending),
            MintPhase::Pending | MintPhase::Sent(_) => None,
        }
    }

    pub fn apply(self, event: &TxEvent) -> MintPhase {
        match event {
            TxEvent::Sent(hash) => MintPhase::Sent(*hash),
            TxEvent::Confirmed(_) | TxEvent::Failed(_) => MintPhase::Idle,
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            MintPhase::Idle => None,
            MintPhase::Pending => Some("Waiting for wallet..."),
            MintPhase::Sent(_) => Some("Waiting for confirmation..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let hash = TxHash::repeat_byte(0x01);
        let phase = MintPhase::default();
        assert!(!phase.is_busy());

        let phase = phase.start().unwrap();
        assert!(phase.is_busy());

        let phase = phase.apply(&TxEvent::Sent(hash));
        assert_eq!(phase, MintPhase::Sent(hash));
        assert!(phase.is_busy());

        let phase = phase.apply(&TxEvent::Confirmed(hash));
        assert_eq!(phase, MintPhase::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let phase = MintPhase::Pending.apply(&TxEvent::Failed("user rejected".to_string()));
        assert_eq!(phase, MintPhase::Idle);

        let sent = MintPhase::Sent(TxHash::ZERO).apply(&TxEvent::Failed("reverted".to_string()));
        assert_eq!(sent, MintPhase::Idle);
    }

    #[test]
    fn test_start_refused_while_busy() {
        assert_eq!(MintPhase::Pending.start(), None);
        assert_eq!(MintPhase::Sent(TxHash::ZERO).start(), None);
    }

    #[test]
    fn test_notifications() {
        assert_eq!(TxEvent::Sent(TxHash::ZERO).notification(), Notification::info("Minting NFT"));
        assert_eq!(TxEvent::Confirmed(TxHash::ZERO).notification(), Notification::success("Minted successfully"));
        assert_eq!(
            TxEvent::Failed("insufficient funds for gas * price + value".to_string()).notification(),
            Notification::error("insufficient funds for gas * price + value")
        );
    }
}
