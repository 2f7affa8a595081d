//! vCard 3.0 export for the "Add to contacts" action.

use std::path::{Path, PathBuf};

use crate::config::{is_plain_file_name, BusinessDetails};
use crate::error::{CardError, CardResult};

/// Escape a text value per RFC 2426 section 4.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// Render the business contact as a vCard. Lines end with CRLF.
pub fn render(details: &BusinessDetails) -> String {
    let mut card = String::new();
    let mut line = |text: String| {
        card.push_str(&text);
        card.push_str("\r\n");
    };

    line("BEGIN:VCARD".into());
    line("VERSION:3.0".into());
    line(format!("FN:{}", escape(&details.contact_name)));
    line(format!("N:{};;;;", escape(&details.contact_name)));
    line(format!("ORG:{}", escape(&details.business_name)));
    line(format!("TEL;TYPE=CELL,VOICE:{}", escape(&details.phone_display)));
    if !details.email.is_empty() {
        line(format!("EMAIL;TYPE=INTERNET:{}", escape(&details.email)));
    }
    if !details.website.is_empty() {
        line(format!("URL:{}", escape(&details.website)));
    }
    if !details.tagline.is_empty() {
        line(format!("NOTE:{}", escape(&details.tagline)));
    }
    line("END:VCARD".into());
    card
}

/// Write the vCard into `dir` under the configured file name.
pub fn save(details: &BusinessDetails, dir: &Path) -> CardResult<PathBuf> {
    if !is_plain_file_name(&details.vcard_file_name) {
        return Err(CardError::Download(format!(
            "invalid vCard file name {:?}",
            details.vcard_file_name
        )));
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&details.vcard_file_name);
    std::fs::write(&path, render(details))?;
    tracing::info!(path = %path.display(), "vCard saved");
    Ok(path)
}
