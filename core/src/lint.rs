//! Identifier lint: explains why names would need quoting.
use crate::diagnostics::warning::{self, Severity, Warning};
use crate::dialect::{IdentifierPreparer, QuotingReason};

/// Check each name as it would be written in SQL.
///
/// Reserved words and special characters are lossy: the name can only ever be
/// used quoted. Mixed case is informational since quoting preserves it.
pub fn lint_identifiers<'a, I>(preparer: &IdentifierPreparer, names: I) -> Vec<Warning>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut warnings = Vec::new();
    for name in names {
        let Some(reason) = preparer.quoting_reason(name) else {
            continue;
        };
        let (code, severity) = match reason {
            QuotingReason::Reserved => (warning::IDENT_RESERVED, Severity::Lossy),
            QuotingReason::InvalidStart | QuotingReason::SpecialChars => {
                (warning::IDENT_SPECIAL_CHARS, Severity::Lossy)
            }
            QuotingReason::MixedCase => (warning::IDENT_CASE_SENSITIVE, Severity::Info),
        };
        warnings.push(
            Warning::new(code, severity, format!("requires quoting: {reason}")).with_object(name),
        );
    }
    warnings
}
