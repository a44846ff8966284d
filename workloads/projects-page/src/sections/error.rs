//! Error section.

use folio_core::PageError;

use super::html_escape;

/// Render the error shown in place of the page content.
pub fn render_error(error: &PageError) -> String {
    format!(
        r#"<section class="page-error" data-section="error" data-status="{}">
    <h1 class="error-status">{} {}</h1>
    <p class="error-message">{}</p>
</section>"#,
        error.status,
        error.status,
        error.reason(),
        html_escape(&error.message)
    )
}
