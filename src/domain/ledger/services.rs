// src/domain/ledger/services.rs
use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat, Utc};

use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};

use super::entity::{
    CHAT_USER_NAME, CellUpdate, ChatConversation, DEFAULT_STATUS, LEDGER_HEADERS, LedgerColumn,
    MESSAGE_SEPARATOR, NewSubmission, SubmissionType, SubmissionUpdate,
};
use super::repository::LedgerSheet;

/// Merge-by-email bookkeeping on top of a [`LedgerSheet`].
///
/// Every operation reads the sheet, scans it and then writes, with no locking
/// in between. Concurrent submissions for one email may therefore produce two
/// rows or lose one merge.
pub struct SubmissionLedger {
    sheet: Arc<dyn LedgerSheet>,
    clock: Arc<dyn Clock>,
}

impl SubmissionLedger {
    pub fn new(sheet: Arc<dyn LedgerSheet>, clock: Arc<dyn Clock>) -> Self {
        Self { sheet, clock }
    }

    /// Write the fixed header row unless row 1 already holds it.
    pub async fn ensure_headers(&self) -> DomainResult<()> {
        let current = self.sheet.read_header().await?;
        let matches = current.is_some_and(|row| row.iter().map(String::as_str).eq(LEDGER_HEADERS));
        if !matches {
            self.sheet.write_header(&LEDGER_HEADERS).await?;
        }
        Ok(())
    }

    /// Record a contact or quote submission, merging it into the first row
    /// that already carries the same email whatever its type.
    pub async fn append_submission(&self, submission: NewSubmission) -> DomainResult<()> {
        self.ensure_headers().await?;
        let timestamp = iso_timestamp(self.clock.now());
        let rows = self.sheet.read_rows().await?;

        match find_row(&rows, |row| email_matches(row, &submission.email)) {
            Some((sheet_row, row)) => {
                let existing = cell(row, LedgerColumn::Message);
                let message = if existing.is_empty() {
                    submission.message
                } else {
                    format!("{existing}{MESSAGE_SEPARATOR}{}", submission.message)
                };
                tracing::debug!(email = %submission.email, row = sheet_row, "merging submission");
                self.sheet
                    .update_cells(vec![
                        CellUpdate::new(sheet_row, LedgerColumn::Message, message),
                        CellUpdate::new(sheet_row, LedgerColumn::UpdatedAt, timestamp),
                    ])
                    .await
            }
            None => {
                self.sheet
                    .append_row(new_row(
                        &timestamp,
                        submission.name,
                        submission.email,
                        submission.message,
                        submission.kind,
                    ))
                    .await
            }
        }
    }

    /// Record one chat exchange. Only rows of type `chatbot` are merged into,
    /// so a visitor who also used the contact form gets a separate chat row.
    pub async fn append_chat_conversation(&self, chat: ChatConversation) -> DomainResult<()> {
        self.ensure_headers().await?;
        let now = self.clock.now();
        let timestamp = iso_timestamp(now);
        let entry = conversation_entry(now, &chat.user_message, &chat.bot_response);
        let rows = self.sheet.read_rows().await?;

        let chatbot_row = find_row(&rows, |row| {
            email_matches(row, &chat.email)
                && cell(row, LedgerColumn::Type).eq_ignore_ascii_case(SubmissionType::Chatbot.as_str())
        });

        match chatbot_row {
            Some((sheet_row, row)) => {
                let message = format!("{}{entry}", cell(row, LedgerColumn::Message));
                self.sheet
                    .update_cells(vec![
                        CellUpdate::new(sheet_row, LedgerColumn::Message, message),
                        CellUpdate::new(sheet_row, LedgerColumn::UpdatedAt, timestamp),
                    ])
                    .await
            }
            None => {
                self.sheet
                    .append_row(new_row(
                        &timestamp,
                        CHAT_USER_NAME.to_string(),
                        chat.email,
                        entry,
                        SubmissionType::Chatbot,
                    ))
                    .await
            }
        }
    }

    /// Set status and/or notes on the row identified by email and creation
    /// timestamp. `Updated At` is always refreshed.
    pub async fn update_submission(
        &self,
        email: &str,
        timestamp: &str,
        update: SubmissionUpdate,
    ) -> DomainResult<()> {
        let rows = self.sheet.read_rows().await?;
        if rows.len() < 2 {
            return Err(DomainError::NotFound("no submissions found".into()));
        }

        let (sheet_row, _) = find_row(&rows, |row| {
            email_matches(row, email) && cell(row, LedgerColumn::Timestamp) == timestamp
        })
        .ok_or_else(|| DomainError::NotFound("submission not found".into()))?;

        let mut cells = Vec::with_capacity(3);
        if let Some(status) = update.status {
            cells.push(CellUpdate::new(sheet_row, LedgerColumn::Status, status));
        }
        if let Some(notes) = update.notes {
            cells.push(CellUpdate::new(sheet_row, LedgerColumn::Notes, notes));
        }
        cells.push(CellUpdate::new(
            sheet_row,
            LedgerColumn::UpdatedAt,
            iso_timestamp(self.clock.now()),
        ));

        self.sheet.update_cells(cells).await
    }
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn conversation_entry(at: DateTime<Utc>, user: &str, bot: &str) -> String {
    let local = at.with_timezone(&Local).format("%-m/%-d/%Y, %-I:%M:%S %p");
    format!("[{local}]\nUser: {user}\nBot: {bot}\n\n")
}

fn new_row(
    timestamp: &str,
    name: String,
    email: String,
    message: String,
    kind: SubmissionType,
) -> Vec<String> {
    vec![
        timestamp.to_string(),
        name,
        email,
        message,
        kind.as_str().to_string(),
        DEFAULT_STATUS.to_string(),
        String::new(),
        timestamp.to_string(),
    ]
}

fn cell(row: &[String], column: LedgerColumn) -> &str {
    row.get(column.index()).map(String::as_str).unwrap_or("")
}

fn email_matches(row: &[String], email: &str) -> bool {
    let stored = cell(row, LedgerColumn::Email).trim();
    !stored.is_empty() && stored.eq_ignore_ascii_case(email.trim())
}

/// First data row satisfying `predicate`, with its 1-based sheet row number.
fn find_row<'a, P>(rows: &'a [Vec<String>], predicate: P) -> Option<(usize, &'a [String])>
where
    P: Fn(&[String]) -> bool,
{
    rows.iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| predicate(row))
        .map(|(index, row)| (index + 1, row.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ledger::memory::InMemoryLedgerSheet;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn ledger() -> (Arc<InMemoryLedgerSheet>, SubmissionLedger) {
        let sheet = Arc::new(InMemoryLedgerSheet::default());
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap(),
        ));
        (sheet.clone(), SubmissionLedger::new(sheet, clock))
    }

    fn contact(email: &str, message: &str) -> NewSubmission {
        NewSubmission {
            name: "Asha".into(),
            email: email.into(),
            message: message.into(),
            kind: SubmissionType::Contact,
        }
    }

    fn chat(email: &str) -> ChatConversation {
        ChatConversation {
            email: email.into(),
            user_message: "Do you ship makhana?".into(),
            bot_response: "Yes.".into(),
        }
    }

    #[test]
    fn timestamps_carry_milliseconds_and_zulu() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(iso_timestamp(at), "2025-03-04T05:06:07.000Z");
    }

    #[tokio::test]
    async fn headers_are_written_once() {
        let (sheet, ledger) = ledger();
        ledger.ensure_headers().await.unwrap();
        ledger.ensure_headers().await.unwrap();
        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], LEDGER_HEADERS.map(String::from).to_vec());
        assert_eq!(sheet.header_writes(), 1);
    }

    #[tokio::test]
    async fn wrong_header_is_replaced() {
        let (sheet, ledger) = ledger();
        sheet.push_row(vec!["When".into(), "Who".into()]);
        ledger.ensure_headers().await.unwrap();
        assert_eq!(sheet.snapshot()[0][0], "Timestamp");
    }

    #[tokio::test]
    async fn first_submission_appends_a_new_row() {
        let (sheet, ledger) = ledger();
        ledger
            .append_submission(contact("a@x.com", "Hello"))
            .await
            .unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            vec![
                "2025-03-04T05:06:07.000Z",
                "Asha",
                "a@x.com",
                "Hello",
                "contact",
                "New",
                "",
                "2025-03-04T05:06:07.000Z"
            ]
        );
    }

    #[tokio::test]
    async fn same_email_merges_messages() {
        let (sheet, ledger) = ledger();
        ledger.append_submission(contact("a@x.com", "Hello")).await.unwrap();
        ledger
            .append_submission(contact("  A@X.com ", "Again"))
            .await
            .unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][3], "Hello\n\n--- New Message ---\n\nAgain");
    }

    #[tokio::test]
    async fn quote_merges_into_contact_row() {
        let (sheet, ledger) = ledger();
        ledger.append_submission(contact("a@x.com", "Hello")).await.unwrap();
        let mut quote = contact("a@x.com", "Need 5 tonnes");
        quote.kind = SubmissionType::Quote;
        ledger.append_submission(quote).await.unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][4], "contact");
    }

    #[tokio::test]
    async fn chat_for_contact_email_gets_its_own_row() {
        let (sheet, ledger) = ledger();
        ledger.append_submission(contact("a@x.com", "Hello")).await.unwrap();
        ledger.append_chat_conversation(chat("a@x.com")).await.unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][1], "Chat User");
        assert_eq!(rows[2][4], "chatbot");
        assert!(rows[2][3].contains("\nUser: Do you ship makhana?\nBot: Yes.\n\n"));
        assert!(rows[2][3].starts_with('['));
    }

    #[tokio::test]
    async fn chat_exchanges_concatenate_without_separator() {
        let (sheet, ledger) = ledger();
        ledger.append_chat_conversation(chat("c@x.com")).await.unwrap();
        ledger.append_chat_conversation(chat("c@x.com")).await.unwrap();

        let rows = sheet.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][3].matches("User: Do you ship makhana?").count(), 2);
        assert!(!rows[1][3].contains("--- New Message ---"));
    }

    #[tokio::test]
    async fn update_sets_status_and_notes() {
        let (sheet, ledger) = ledger();
        ledger.append_submission(contact("a@x.com", "Hello")).await.unwrap();

        ledger
            .update_submission(
                "a@x.com",
                "2025-03-04T05:06:07.000Z",
                SubmissionUpdate {
                    status: Some("Contacted".into()),
                    notes: None,
                },
            )
            .await
            .unwrap();

        let row = &sheet.snapshot()[1];
        assert_eq!(row[5], "Contacted");
        assert_eq!(row[6], "");
    }

    #[tokio::test]
    async fn update_of_unknown_submission_fails() {
        let (_, ledger) = ledger();
        let err = ledger
            .update_submission("a@x.com", "2025", SubmissionUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        ledger.append_submission(contact("a@x.com", "Hello")).await.unwrap();
        let err = ledger
            .update_submission("a@x.com", "2024-01-01T00:00:00.000Z", SubmissionUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
