use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEX_RUN: Regex =
        Regex::new(r"[a-fA-F0-9]{32}").expect("invalid regex expression");
    static ref DASHED_UUID: Regex = Regex::new(
        r"[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12}"
    )
    .expect("invalid regex expression");
    static ref PAGE_ID: Regex =
        Regex::new(r"^[a-f0-9\-]{32,36}$").expect("invalid regex expression");
}

/// Bring a page or database identifier into the dashed 8-4-4-4-12 form.
///
/// Accepts bare 32-digit hex, already-dashed UUIDs, and share URLs carrying
/// either form (query strings are dropped first). Anything unrecognizable
/// comes back trimmed but otherwise unchanged.
pub fn normalize_page_id(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let clean = raw.split('?').next().unwrap_or_default();

    if let Some(found) = HEX_RUN.find(clean) {
        let hex = found.as_str();
        return format!(
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        );
    }
    if let Some(found) = DASHED_UUID.find(clean) {
        return found.as_str().to_string();
    }
    clean.trim().to_string()
}

/// Whether a property value looks like a page identifier that still needs
/// title resolution, rather than an already-resolved display name.
pub fn is_page_id(value: &str) -> bool {
    PAGE_ID.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hex_gets_dashes() {
        assert_eq!(
            normalize_page_id("598337872cf94fdf8782e53db20768a5"),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
    }

    #[test]
    fn test_share_url_with_query_string() {
        assert_eq!(
            normalize_page_id(
                "https://www.notion.so/Some-Page-598337872cf94fdf8782e53db20768a5?pvs=4"
            ),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
    }

    #[test]
    fn test_dashed_uuid_passes_through() {
        assert_eq!(
            normalize_page_id("59833787-2cf9-4fdf-8782-e53db20768a5"),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
    }

    #[test]
    fn test_dashed_uuid_extracted_from_url() {
        assert_eq!(
            normalize_page_id("https://example.com/p/59833787-2cf9-4fdf-8782-e53db20768a5"),
            "59833787-2cf9-4fdf-8782-e53db20768a5"
        );
    }

    #[test]
    fn test_unrecognizable_input_is_trimmed() {
        assert_eq!(normalize_page_id("  not an id  "), "not an id");
        assert_eq!(normalize_page_id(""), "");
    }

    #[test]
    fn test_is_page_id() {
        assert!(is_page_id("598337872cf94fdf8782e53db20768a5"));
        assert!(is_page_id("59833787-2cf9-4fdf-8782-e53db20768a5"));
        assert!(!is_page_id("Cardiology"));
        assert!(!is_page_id("abc"));
    }
}
