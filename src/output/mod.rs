//! Output modes
//!
//! Turns rendered Mermaid text into what the selected output type prints:
//! the text itself, or a link to the hosted viewer carrying the compressed
//! diagram.

mod payload;

pub use payload::{Pan, ViewerState, encode_payload};

use console::style;

use crate::cli::OutputType;
use crate::constants::viewer::{IMAGE_URL_PREFIX, LIVE_EDIT_URL_PREFIX};
use crate::error::Deps2MermaidError;

pub fn image_url(token: &str) -> String {
    format!("{IMAGE_URL_PREFIX}{token}")
}

pub fn live_edit_url(token: &str) -> String {
    format!("{LIVE_EDIT_URL_PREFIX}{token}")
}

/// Markdown image of the diagram linking to the live editor
pub fn markdown_embed(token: &str) -> String {
    format!("[![]({})]({})", image_url(token), live_edit_url(token))
}

/// The text printed for `output_type`
///
/// For [`OutputType::Live`] this is the editor URL; opening it is up to the
/// caller.
pub fn format_output(output_type: OutputType, code: &str) -> Result<String, Deps2MermaidError> {
    if !output_type.needs_payload() {
        return Ok(code.to_string());
    }

    let token = encode_payload(code)?;
    Ok(match output_type {
        OutputType::Markdown => markdown_embed(&token),
        OutputType::Image => image_url(&token),
        OutputType::Url | OutputType::Live => live_edit_url(&token),
        OutputType::Mermaid => code.to_string(),
    })
}

/// Open `url` in the default browser, warning instead of failing
pub fn open_in_browser(url: &str) -> bool {
    match open::that(url) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "{} Could not open a browser ({}), open the link manually",
                style("⚠").yellow(),
                e
            );
            false
        }
    }
}
