//! Year resolution for the free-text dates found in extracted resumes.
//!
//! The extractor passes dates through untouched, so the same field can hold
//! "2019", "01/03/2019", "2019-03", "20190301", or "présent". Anything the
//! resolver cannot read resolves to `None` and is skipped upstream; a bad
//! date must never sink a whole record.

use super::candidate::Experience;
use tracing::{debug, warn};

/// Resolve a free-text date to a calendar year.
///
/// Rules, in order: empty or "present"/"présent" means the present year; a
/// slash- or dash-separated value with three parts takes the year from
/// whichever end carries four digits (covers both D/M/YYYY and YYYY-MM-DD),
/// and with two parts from the *first* part (the upstream convention, kept
/// as-is); a bare 4-digit value is a year; an 8-digit value is YYYYMMDD and
/// the leading four digits are the year.
pub fn resolve_year(raw: &str, present_year: i32) -> Option<i32> {
    let text = raw.trim();
    if text.is_empty() || text.to_lowercase() == "présent" || text.eq_ignore_ascii_case("present") {
        return Some(present_year);
    }

    if text.contains('/') || text.contains('-') {
        let separator = if text.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
        // Three-part dates arrive both as D/M/YYYY and YYYY-MM-DD, so prefer
        // whichever end carries the 4-digit component, last part winning.
        let year_part = match parts.as_slice() {
            [first, _, last] => {
                if looks_like_year(last) || !looks_like_year(first) {
                    Some(last)
                } else {
                    Some(first)
                }
            }
            [first, _] => Some(first),
            _ => None,
        };
        return match year_part.and_then(|part| part.trim().parse::<i32>().ok()) {
            Some(year) => Some(year),
            None => {
                warn!(date = text, "unrecognized separated date format");
                None
            }
        };
    }

    if text.len() == 4 && text.bytes().all(|byte| byte.is_ascii_digit()) {
        return text.parse().ok();
    }
    if text.len() == 8 && text.bytes().all(|byte| byte.is_ascii_digit()) {
        return text[..4].parse().ok();
    }

    warn!(date = text, "unrecognized date format");
    None
}

fn looks_like_year(part: &str) -> bool {
    part.len() == 4 && part.bytes().all(|byte| byte.is_ascii_digit())
}

/// Total years of professional experience across all readable entries.
///
/// Entries with an unresolvable start or end are skipped, as are entries
/// whose span is zero or negative (noise, not negative experience). A
/// missing end date means the position is current.
pub fn total_experience_years(experiences: &[Experience], present_year: i32) -> u32 {
    let mut total_years = 0;
    for experience in experiences {
        let start = resolve_year(experience.start_date.as_deref().unwrap_or(""), present_year);
        let end = match experience.end_date.as_deref() {
            Some(raw) => resolve_year(raw, present_year),
            None => Some(present_year),
        };

        let (Some(start), Some(end)) = (start, end) else {
            warn!(
                title = experience.title.as_deref().unwrap_or("inconnue"),
                "cannot compute duration, skipping experience"
            );
            continue;
        };

        let duration = end - start;
        if duration > 0 {
            total_years += duration as u32;
            debug!(
                title = experience.title.as_deref().unwrap_or("inconnue"),
                years = duration,
                "counted experience"
            );
        } else {
            warn!(
                title = experience.title.as_deref().unwrap_or("inconnue"),
                "zero or negative duration, skipping experience"
            );
        }
    }
    debug!(total_years, "aggregated professional experience");
    total_years
}
