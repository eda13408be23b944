//! Protocol log event classification.
//!
//! Transaction logs arrive as free-form strings; the classifier turns
//! the lines the protocol emits into typed events and shrugs at
//! everything else. Classification never fails — an unparseable line is
//! [`ProtocolEvent::Unrecognized`], not an error, because one garbled
//! line must not abort a log subscription.

use serde::{Deserialize, Serialize};

/// Emitted when a new token and its bonding curve are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Token name.
    pub name: String,
    /// Token ticker symbol.
    pub symbol: String,
    /// Metadata URI.
    pub uri: String,
    /// Token mint address, as logged.
    pub mint: String,
    /// Creator wallet.
    pub user: String,
    /// Unix timestamp of creation.
    pub timestamp: i64,
}

/// Emitted for every executed curve trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Token mint address.
    pub mint: String,
    /// Lamports moved by the trade.
    pub sol_amount: u64,
    /// Tokens moved by the trade.
    pub token_amount: u64,
    /// `true` for a buy, `false` for a sell.
    pub is_buy: bool,
    /// Trader wallet.
    pub user: String,
    /// Unix timestamp of the trade.
    pub timestamp: i64,
    /// Virtual SOL reserves after the trade.
    pub virtual_sol_reserves: u64,
    /// Virtual token reserves after the trade.
    pub virtual_token_reserves: u64,
}

/// Emitted once when a curve sells out and migrates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteEvent {
    /// Wallet whose buy completed the curve.
    pub user: String,
    /// Token mint address.
    pub mint: String,
    /// Unix timestamp of completion.
    pub timestamp: i64,
}

/// One classified log line. The set is closed: new protocol event kinds
/// land in `Unrecognized` until the crate learns them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolEvent {
    /// Token creation.
    Create(CreateEvent),
    /// Executed trade.
    Trade(TradeEvent),
    /// Curve completion.
    Complete(CompleteEvent),
    /// Anything the classifier does not understand.
    Unrecognized,
}

impl ProtocolEvent {
    /// Returns `true` for any recognized variant.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// Stateless classifier for protocol log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventClassifier;

impl EventClassifier {
    const LOG_PREFIX: &'static str = "Program log: ";
    const CREATE_TAG: &'static str = "CreateEvent";
    const TRADE_TAG: &'static str = "TradeEvent";
    const COMPLETE_TAG: &'static str = "CompleteEvent";

    /// Classifies a single log line.
    ///
    /// Expected shape: `Program log: <Tag> <json payload>`. Anything
    /// else — a foreign program's log, an unknown tag, a payload that
    /// does not deserialize — is `Unrecognized`.
    #[must_use]
    pub fn classify(line: &str) -> ProtocolEvent {
        let Some(body) = line.strip_prefix(Self::LOG_PREFIX) else {
            return ProtocolEvent::Unrecognized;
        };
        let Some((tag, payload)) = body.split_once(' ') else {
            return ProtocolEvent::Unrecognized;
        };
        match tag {
            Self::CREATE_TAG => serde_json::from_str(payload)
                .map_or(ProtocolEvent::Unrecognized, ProtocolEvent::Create),
            Self::TRADE_TAG => serde_json::from_str(payload)
                .map_or(ProtocolEvent::Unrecognized, ProtocolEvent::Trade),
            Self::COMPLETE_TAG => serde_json::from_str(payload)
                .map_or(ProtocolEvent::Unrecognized, ProtocolEvent::Complete),
            _ => ProtocolEvent::Unrecognized,
        }
    }

    /// Classifies a batch of log lines, keeping only recognized events.
    #[must_use]
    pub fn scan<'a, I>(lines: I) -> Vec<ProtocolEvent>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(Self::classify)
            .filter(ProtocolEvent::is_recognized)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn trade_line() -> String {
        let event = TradeEvent {
            mint: "Mint111".into(),
            sol_amount: 1_000_000_000,
            token_amount: 34_612_903_225_806,
            is_buy: true,
            user: "User111".into(),
            timestamp: 1_700_000_000,
            virtual_sol_reserves: 31_000_000_000,
            virtual_token_reserves: 1_038_387_096_774_194,
        };
        let Ok(json) = serde_json::to_string(&event) else {
            panic!("expected Ok");
        };
        format!("Program log: TradeEvent {json}")
    }

    #[test]
    fn classifies_trade() {
        let ProtocolEvent::Trade(event) = EventClassifier::classify(&trade_line()) else {
            panic!("expected Trade");
        };
        assert!(event.is_buy);
        assert_eq!(event.sol_amount, 1_000_000_000);
    }

    #[test]
    fn classifies_create() {
        let event = CreateEvent {
            name: "Test Token".into(),
            symbol: "TEST".into(),
            uri: "https://example.com/meta.json".into(),
            mint: "Mint111".into(),
            user: "User111".into(),
            timestamp: 1_700_000_000,
        };
        let Ok(json) = serde_json::to_string(&event) else {
            panic!("expected Ok");
        };
        let line = format!("Program log: CreateEvent {json}");
        let ProtocolEvent::Create(parsed) = EventClassifier::classify(&line) else {
            panic!("expected Create");
        };
        assert_eq!(parsed.symbol, "TEST");
        assert_eq!(parsed.timestamp, 1_700_000_000);
    }

    #[test]
    fn classifies_complete() {
        let event = CompleteEvent {
            user: "User111".into(),
            mint: "Mint111".into(),
            timestamp: 1_700_000_000,
        };
        let Ok(json) = serde_json::to_string(&event) else {
            panic!("expected Ok");
        };
        let line = format!("Program log: CompleteEvent {json}");
        assert!(matches!(
            EventClassifier::classify(&line),
            ProtocolEvent::Complete(_)
        ));
    }

    #[test]
    fn foreign_log_unrecognized() {
        assert_eq!(
            EventClassifier::classify("Program consumed: 2000 compute units"),
            ProtocolEvent::Unrecognized
        );
    }

    #[test]
    fn unknown_tag_unrecognized() {
        assert_eq!(
            EventClassifier::classify("Program log: WithdrawEvent {}"),
            ProtocolEvent::Unrecognized
        );
    }

    #[test]
    fn malformed_payload_unrecognized() {
        assert_eq!(
            EventClassifier::classify("Program log: TradeEvent {not json"),
            ProtocolEvent::Unrecognized
        );
    }

    #[test]
    fn bare_tag_unrecognized() {
        assert_eq!(
            EventClassifier::classify("Program log: TradeEvent"),
            ProtocolEvent::Unrecognized
        );
    }

    #[test]
    fn scan_filters_noise() {
        let trade = trade_line();
        let lines = [
            "Program log: instruction: Buy",
            trade.as_str(),
            "Program consumed: 2000 compute units",
        ];
        let events = EventClassifier::scan(lines);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ProtocolEvent::Trade(_)));
    }
}
