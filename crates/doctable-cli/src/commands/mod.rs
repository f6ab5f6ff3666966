//! Command implementations for the doctable CLI, one module per pass.

mod fix_links;
mod sync_versions;
mod validate_links;

pub use fix_links::execute as fix_links;
pub use sync_versions::execute as sync_versions;
pub use validate_links::execute as validate_links;

/// Renders up to `max` items followed by a "... and N more" tail, for the
/// console summaries that list affected packages or URLs.
pub(crate) fn preview(items: &[String], max: usize) -> String {
    let shown = items
        .iter()
        .take(max)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > max {
        format!("{shown} ... and {} more", items.len() - max)
    } else {
        shown
    }
}
