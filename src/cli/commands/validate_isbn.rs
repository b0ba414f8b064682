//! Validate-ISBN command - check an identifier's format

use libcat::core::models::Isbn;
use libcat::output::{IsbnCheckResult, OutputMode, Render};

/// Report whether `isbn` is well-formed, exiting non-zero if it is not
pub fn validate_isbn(isbn: &str, mode: OutputMode) -> anyhow::Result<()> {
    let result = IsbnCheckResult {
        isbn: isbn.to_string(),
        valid: Isbn::is_valid(isbn),
    };
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
