use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Buy,
    Other,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Other => "other",
        }
    }

    /// Label shown in tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "شراء",
            Self::Other => "آخر",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Self::Buy),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    Piece,
    Kg,
    Litre,
}

impl AmountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Piece => "piece",
            Self::Kg => "kg",
            Self::Litre => "litre",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Piece => "قطعة",
            Self::Kg => "كيلوغرام",
            Self::Litre => "لتر",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "piece" => Some(Self::Piece),
            "kg" => Some(Self::Kg),
            "litre" => Some(Self::Litre),
            _ => None,
        }
    }
}

/// Recorded inventory/cash movement.
///
/// Income, outcome, statement and running balance keep the server's
/// Arabic field names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "_id")]
    pub record_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(rename = "typeDesc", default, skip_serializing_if = "Option::is_none")]
    pub type_desc: Option<String>,
    #[serde(rename = "amountType")]
    pub amount_type: AmountType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "وارد", default)]
    pub income: f64,
    #[serde(rename = "منصرف", default)]
    pub outcome: f64,
    #[serde(rename = "بيان", default)]
    pub statement: String,
    #[serde(rename = "رصيد", default)]
    pub running_balance: f64,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /actions/add` and `PUT /actions/update/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRequest {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(rename = "typeDesc", skip_serializing_if = "Option::is_none")]
    pub type_desc: Option<String>,
    #[serde(rename = "amountType")]
    pub amount_type: AmountType,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Result of `GET /actions/all`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionsPage {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(rename = "actionsCount", default)]
    pub actions_count: u64,
}

/// Result of action writes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub action: Option<Action>,
    #[serde(default)]
    pub message: Option<String>,
}
