//! Transaction record models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::DashboardError;

/// Settlement outcome of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Ok => "OK",
            TxStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Ok(TxStatus::Ok),
            "ERROR" => Ok(TxStatus::Error),
            _ => Err(DashboardError::invalid("status", s)),
        }
    }
}

/// Channel a transaction arrived through
///
/// The bank pair and the gateway pair come from different revisions of the
/// page; `ChannelSet` picks which pair the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    KakaoBank,
    TossBank,
    #[serde(rename = "OpenAPI")]
    OpenApi,
    Internal,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::KakaoBank,
        Channel::TossBank,
        Channel::OpenApi,
        Channel::Internal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::KakaoBank => "KakaoBank",
            Channel::TossBank => "TossBank",
            Channel::OpenApi => "OpenAPI",
            Channel::Internal => "Internal",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::invalid("channel", s))
    }
}

/// Which pair of channel names the mock data uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSet {
    /// KakaoBank / TossBank
    #[default]
    Banks,
    /// OpenAPI / Internal
    Gateways,
}

impl ChannelSet {
    pub fn pair(&self) -> (Channel, Channel) {
        match self {
            ChannelSet::Banks => (Channel::KakaoBank, Channel::TossBank),
            ChannelSet::Gateways => (Channel::OpenApi, Channel::Internal),
        }
    }

    /// A draw above one half selects the first channel of the pair
    pub fn pick(&self, draw: f64) -> Channel {
        let (first, second) = self.pair();
        if draw > 0.5 {
            first
        } else {
            second
        }
    }
}

impl FromStr for ChannelSet {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "banks" | "bank" => Ok(ChannelSet::Banks),
            "gateways" | "gateway" | "api" => Ok(ChannelSet::Gateways),
            _ => Err(DashboardError::invalid("channel set", s)),
        }
    }
}

/// One row of the transaction table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub time: String,
    #[serde(serialize_with = "amount_to_text", deserialize_with = "amount_from_text")]
    pub amount: u64,
    pub status: TxStatus,
    pub channel: Channel,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        amount: u64,
        status: TxStatus,
        channel: Channel,
    ) -> Self {
        Transaction {
            id: id.into(),
            time: time.into(),
            amount,
            status,
            channel,
        }
    }

    /// Build a record from display strings, rejecting unknown status or channel text
    #[cfg(test)]
    pub fn from_text(
        id: &str,
        time: &str,
        amount: &str,
        status: &str,
        channel: &str,
    ) -> Result<Self, DashboardError> {
        let amount = amount
            .trim()
            .parse::<u64>()
            .map_err(|_| DashboardError::invalid("amount", amount))?;
        Ok(Transaction::new(id, time, amount, status.parse()?, channel.parse()?))
    }

    /// The five display fields in table order
    pub fn display_fields(&self) -> [String; 5] {
        [
            self.id.clone(),
            self.time.clone(),
            self.amount.to_string(),
            self.status.to_string(),
            self.channel.to_string(),
        ]
    }
}

fn amount_to_text<S: Serializer>(amount: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&amount.to_string())
}

fn amount_from_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}
