use super::*;

#[test]
fn validate_access_token_input_trims_and_requires_value() {
    assert_eq!(validate_access_token_input("  secret  "), Ok("secret".to_owned()));
    assert_eq!(validate_access_token_input("   "), Err("Enter an access token first."));
    assert_eq!(validate_access_token_input(""), Err("Enter an access token first."));
}

#[test]
fn destination_hint_names_recorded_path() {
    assert_eq!(destination_hint("/reports/42"), Some("You will continue to /reports/42".to_owned()));
}

#[test]
fn destination_hint_is_hidden_for_base_or_empty() {
    assert_eq!(destination_hint("/"), None);
    assert_eq!(destination_hint(""), None);
}
