// Helper functions for safe logging

/// Masks phone numbers for safe logging
/// Keeps the leading `+` and country digit plus the last two digits
///
/// # Example
/// ```ignore
/// let masked = safe_phone_log("+7 (999) 123-45-67");
/// // Returns: "+7***67"
/// ```
pub fn safe_phone_log(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return "***".to_string();
    }

    let prefix = if phone.trim_start().starts_with('+') { "+" } else { "" };
    let tail: String = digits[digits.len() - 2..].iter().collect();
    format!("{}{}***{}", prefix, digits[0], tail)
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
///
/// # Example
/// ```ignore
/// let masked = safe_token_log("123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw");
/// // Returns: "1234...Dsaw"
/// ```
pub fn safe_token_log(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}
