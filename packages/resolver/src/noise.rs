//! Leading-noise removal for resolved street values.
//!
//! Sources sometimes prepend a business or union name before the
//! numeric street address ("Teamsters Local 251, 1201 Elmwood Ave.").
//! Scanning comma segments from the end toward the start, the first
//! segment opening with a digit marks the true street; everything
//! before it is discarded.

/// Strips a leading non-address segment from a street value.
///
/// Returns the input unchanged when it has no commas or when no
/// segment starts with a digit.
#[must_use]
pub fn strip_leading_noise(street: &str) -> &str {
    let mut keep_from = None;
    let mut offset = 0;

    for segment in street.split(',') {
        let trimmed = segment.trim_start();
        if trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            keep_from = Some(offset + (segment.len() - trimmed.len()));
        }
        offset += segment.len() + 1;
    }

    keep_from.map_or(street, |start| &street[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_organization_name() {
        assert_eq!(
            strip_leading_noise("Teamsters Local 251, 1201 Elmwood Ave."),
            "1201 Elmwood Ave."
        );
    }

    #[test]
    fn keeps_trailing_segments_after_the_number() {
        assert_eq!(
            strip_leading_noise("Acme Mills, 12 Depot Sq, Floor 2"),
            "12 Depot Sq, Floor 2"
        );
    }

    #[test]
    fn leaves_street_without_digit_segment_unmodified() {
        assert_eq!(
            strip_leading_noise("One Financial Plaza, Suite West"),
            "One Financial Plaza, Suite West"
        );
    }

    #[test]
    fn leaves_plain_street_unmodified() {
        assert_eq!(strip_leading_noise("1201 Elmwood Ave."), "1201 Elmwood Ave.");
    }
}
