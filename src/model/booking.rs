use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::model::employee::Badge;
use crate::utils::lenient;

/// Body of submit, alter and approval requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    #[serde(rename = "chapa")]
    pub badge: Badge,
    #[serde(rename = "dataFerias")]
    pub start_date: NaiveDate,
    #[serde(rename = "diasFerias")]
    pub days: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelRequest {
    #[serde(rename = "chapa")]
    pub badge: Badge,
}

/// The one booking an employee may already hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingBooking {
    pub badge: Badge,
    pub start_date: NaiveDate,
    pub days: u32,
    pub return_date: NaiveDate,
}

/// Reply of the booking check: `{agendado, dataFerias, dataRetorno}`.
#[derive(Debug, Default, Deserialize)]
pub struct BookingCheck {
    #[serde(default)]
    pub agendado: bool,
    #[serde(rename = "dataFerias", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dataRetorno", default)]
    pub return_date: Option<NaiveDate>,
}

impl BookingCheck {
    /// The server reports the plain `start + days` return date, so the day
    /// count is recovered from the difference. A booking without both dates,
    /// or returning before it starts, is a malformed reply.
    pub fn into_booking(self, badge: Badge) -> ClientResult<Option<ExistingBooking>> {
        if !self.agendado {
            return Ok(None);
        }
        let (Some(start_date), Some(return_date)) = (self.start_date, self.return_date) else {
            return Err(ClientError::Parse("booking check without its dates".into()));
        };
        let days = u32::try_from((return_date - start_date).num_days()).map_err(|_| {
            ClientError::Parse(format!(
                "booking returns on {} before it starts on {}",
                return_date, start_date
            ))
        })?;
        Ok(Some(ExistingBooking {
            badge,
            start_date,
            days,
            return_date,
        }))
    }
}

/// One line of the booking list, dates kept as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingRow {
    #[serde(rename = "chapa", deserialize_with = "lenient::text")]
    pub badge: String,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "area", deserialize_with = "lenient::text")]
    pub department: String,
    #[serde(rename = "dataFerias", deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(rename = "diasFerias", deserialize_with = "lenient::day_count")]
    pub days: u32,
    #[serde(rename = "data_retorno", deserialize_with = "lenient::text")]
    pub return_date: String,
}

/// The competing booking named by the server on a conflict, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictDetails {
    pub name: String,
    pub start_date: String,
    pub return_date: String,
}

/// Reply of submit and alter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReply {
    Accepted { message: String },
    /// `success: false` without a conflict, e.g. a second booking for the same badge
    Refused { message: String },
    Conflict(ConflictDetails),
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub conflito: bool,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(rename = "dataFerias", default)]
    pub start_date: Option<String>,
    #[serde(rename = "dataRetorno", default)]
    pub return_date: Option<String>,
}

impl From<SubmitResponse> for SubmitReply {
    fn from(resp: SubmitResponse) -> Self {
        if resp.conflito {
            return SubmitReply::Conflict(ConflictDetails {
                name: resp.nome.unwrap_or_default(),
                start_date: resp.start_date.unwrap_or_default(),
                return_date: resp.return_date.unwrap_or_default(),
            });
        }

        let message = resp.message.unwrap_or_default();
        match resp.success {
            Some(false) => SubmitReply::Refused { message },
            _ => SubmitReply::Accepted { message },
        }
    }
}
