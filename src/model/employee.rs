use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Employee badge number ("chapa"), the key of every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(String);

impl Badge {
    /// Trimmed badge, `None` when the input is blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Badge(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub badge: Badge,
    pub name: String,
    pub department: String,
}

/// Reply of the employee lookup: `{nome, area}`, or `{nome: null}` when the
/// badge is unknown.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeLookup {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

impl EmployeeLookup {
    pub fn into_record(self, badge: Badge) -> Option<EmployeeRecord> {
        let name = self.nome.filter(|n| !n.trim().is_empty())?;
        Some(EmployeeRecord {
            badge,
            name,
            department: self.area.unwrap_or_default(),
        })
    }
}
