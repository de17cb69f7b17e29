//! Google Workspace OAuth scopes attached to every relayed credential.

pub const USERINFO_EMAIL: &str = "https://www.googleapis.com/auth/userinfo.email";
pub const OPENID: &str = "openid";

pub const CALENDAR_READONLY: &str = "https://www.googleapis.com/auth/calendar.readonly";
pub const CALENDAR_EVENTS: &str = "https://www.googleapis.com/auth/calendar.events";

pub const DRIVE_READONLY: &str = "https://www.googleapis.com/auth/drive.readonly";
pub const DRIVE_FILE: &str = "https://www.googleapis.com/auth/drive.file";

pub const GMAIL_READONLY: &str = "https://www.googleapis.com/auth/gmail.readonly";
pub const GMAIL_SEND: &str = "https://www.googleapis.com/auth/gmail.send";
pub const GMAIL_COMPOSE: &str = "https://www.googleapis.com/auth/gmail.compose";
pub const GMAIL_MODIFY: &str = "https://www.googleapis.com/auth/gmail.modify";
pub const GMAIL_LABELS: &str = "https://www.googleapis.com/auth/gmail.labels";

pub const DOCS_READONLY: &str = "https://www.googleapis.com/auth/documents.readonly";
pub const DOCS_WRITE: &str = "https://www.googleapis.com/auth/documents";

pub const CHAT_MESSAGES_READONLY: &str = "https://www.googleapis.com/auth/chat.messages.readonly";
pub const CHAT_SPACES_READONLY: &str = "https://www.googleapis.com/auth/chat.spaces.readonly";
pub const CHAT_MEMBERSHIPS_READONLY: &str =
    "https://www.googleapis.com/auth/chat.memberships.readonly";
pub const CHAT_MESSAGES: &str = "https://www.googleapis.com/auth/chat.messages";

pub const SHEETS_READONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
pub const SHEETS_WRITE: &str = "https://www.googleapis.com/auth/spreadsheets";

pub const FORMS_BODY: &str = "https://www.googleapis.com/auth/forms.body";
pub const FORMS_BODY_READONLY: &str = "https://www.googleapis.com/auth/forms.body.readonly";
pub const FORMS_RESPONSES_READONLY: &str =
    "https://www.googleapis.com/auth/forms.responses.readonly";

pub const SLIDES_READONLY: &str = "https://www.googleapis.com/auth/presentations.readonly";
pub const SLIDES: &str = "https://www.googleapis.com/auth/presentations";

pub const BASE_SCOPES: &[&str] = &[USERINFO_EMAIL, OPENID];
pub const CALENDAR_SCOPES: &[&str] = &[CALENDAR_READONLY, CALENDAR_EVENTS];
pub const DRIVE_SCOPES: &[&str] = &[DRIVE_READONLY, DRIVE_FILE];
pub const GMAIL_SCOPES: &[&str] = &[
    GMAIL_READONLY,
    GMAIL_SEND,
    GMAIL_COMPOSE,
    GMAIL_MODIFY,
    GMAIL_LABELS,
];
pub const DOCS_SCOPES: &[&str] = &[DOCS_READONLY, DOCS_WRITE];
pub const CHAT_SCOPES: &[&str] = &[
    CHAT_MESSAGES_READONLY,
    CHAT_SPACES_READONLY,
    CHAT_MEMBERSHIPS_READONLY,
    CHAT_MESSAGES,
];
pub const SHEETS_SCOPES: &[&str] = &[SHEETS_READONLY, SHEETS_WRITE];
pub const FORMS_SCOPES: &[&str] = &[FORMS_BODY, FORMS_BODY_READONLY, FORMS_RESPONSES_READONLY];
pub const SLIDES_SCOPES: &[&str] = &[SLIDES_READONLY, SLIDES];

/// Every scope granted to a relayed credential, in grant order.
pub const RELAY_SCOPES: &[&str] = &[
    USERINFO_EMAIL,
    OPENID,
    CALENDAR_READONLY,
    CALENDAR_EVENTS,
    DRIVE_READONLY,
    DRIVE_FILE,
    GMAIL_READONLY,
    GMAIL_SEND,
    GMAIL_COMPOSE,
    GMAIL_MODIFY,
    GMAIL_LABELS,
    DOCS_READONLY,
    DOCS_WRITE,
    CHAT_MESSAGES_READONLY,
    CHAT_SPACES_READONLY,
    CHAT_MEMBERSHIPS_READONLY,
    CHAT_MESSAGES,
    SHEETS_READONLY,
    SHEETS_WRITE,
    FORMS_BODY,
    FORMS_BODY_READONLY,
    FORMS_RESPONSES_READONLY,
    SLIDES_READONLY,
    SLIDES,
];
