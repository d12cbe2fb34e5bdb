//! Quoting of SQL identifiers.

use alloc::borrow::Cow;
use alloc::string::String;

/// Reserved words that must be quoted when used as identifiers, sorted.
const RESERVED_KEYWORDS: &[&str] = &[
    "all",
    "analyse",
    "analyze",
    "and",
    "any",
    "array",
    "as",
    "asc",
    "asymmetric",
    "both",
    "case",
    "cast",
    "check",
    "collate",
    "column",
    "constraint",
    "create",
    "current_date",
    "current_role",
    "current_time",
    "current_timestamp",
    "current_user",
    "default",
    "deferrable",
    "desc",
    "distinct",
    "do",
    "else",
    "end",
    "except",
    "false",
    "for",
    "foreign",
    "from",
    "grant",
    "group",
    "having",
    "in",
    "initially",
    "intersect",
    "into",
    "leading",
    "limit",
    "localtime",
    "localtimestamp",
    "new",
    "not",
    "null",
    "off",
    "offset",
    "old",
    "on",
    "only",
    "or",
    "order",
    "placing",
    "primary",
    "references",
    "returning",
    "select",
    "session_user",
    "some",
    "symmetric",
    "table",
    "then",
    "to",
    "trailing",
    "true",
    "union",
    "unique",
    "user",
    "using",
    "when",
    "where",
];

/// Whether `word` is a reserved keyword.
#[must_use]
pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS.binary_search(&word).is_ok()
}

/// Quotes an SQL identifier when needed.
///
/// Identifiers made only of `[a-z0-9_]` that are not reserved keywords are
/// returned unchanged. Anything else is wrapped in double quotes with inner
/// double quotes doubled.
#[must_use]
pub fn quote_ident(ident: &str) -> Cow<'_, str> {
    let plain = ident
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if plain && !is_reserved_keyword(ident) {
        return Cow::Borrowed(ident);
    }

    let mut out = String::with_capacity(ident.len() + 2);
    out.push('"');
    out.push_str(&ident.replace('"', "\"\""));
    out.push('"');
    Cow::Owned(out)
}

/// Quotes a fully qualified identifier.
///
/// The first `.` separates the schema from the object name and both parts
/// are quoted separately.
#[must_use]
pub fn quote_fqident(ident: &str) -> String {
    match ident.split_once('.') {
        Some((schema, name)) => alloc::format!("{}.{}", quote_ident(schema), quote_ident(name)),
        None => quote_ident(ident).into_owned(),
    }
}
