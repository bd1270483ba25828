// src/domain/ledger/entity.rs
use std::fmt;

/// Header row of the submission ledger, columns A through H.
pub const LEDGER_HEADERS: [&str; 8] = [
    "Timestamp",
    "Name",
    "Email",
    "Message",
    "Type",
    "Status",
    "Notes",
    "Updated At",
];

pub const MESSAGE_SEPARATOR: &str = "\n\n--- New Message ---\n\n";
pub const DEFAULT_STATUS: &str = "New";
pub const CHAT_USER_NAME: &str = "Chat User";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerColumn {
    Timestamp,
    Name,
    Email,
    Message,
    Type,
    Status,
    Notes,
    UpdatedAt,
}

impl LedgerColumn {
    pub fn index(self) -> usize {
        match self {
            Self::Timestamp => 0,
            Self::Name => 1,
            Self::Email => 2,
            Self::Message => 3,
            Self::Type => 4,
            Self::Status => 5,
            Self::Notes => 6,
            Self::UpdatedAt => 7,
        }
    }

    pub fn letter(self) -> char {
        (b'A' + self.index() as u8) as char
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionType {
    Contact,
    Quote,
    Chatbot,
}

impl SubmissionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Quote => "quote",
            Self::Chatbot => "chatbot",
        }
    }

    /// Form mode sent by the site; anything other than `quote` is a contact.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("quote") => Self::Quote,
            _ => Self::Contact,
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single cell write addressed by 1-based sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub row: usize,
    pub column: LedgerColumn,
    pub value: String,
}

impl CellUpdate {
    pub fn new(row: usize, column: LedgerColumn, value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            value: value.into(),
        }
    }

    /// A1 notation without the sheet prefix, e.g. `D7`.
    pub fn a1(&self) -> String {
        format!("{}{}", self.column.letter(), self.row)
    }
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub kind: SubmissionType,
}

#[derive(Debug, Clone)]
pub struct ChatConversation {
    pub email: String,
    pub user_message: String,
    pub bot_response: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
}
