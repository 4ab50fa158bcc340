use phishscan::input::{detect_input, InputType};
use std::io::Write;

#[test]
fn test_detect_http_url() {
    let input = "http://secure-login.example.com/account";
    assert_eq!(detect_input(input), InputType::Url(input.to_string()));
}

#[test]
fn test_detect_bare_www_url() {
    let input = "www.example.com/reset";
    assert!(matches!(detect_input(input), InputType::Url(_)));
}

#[test]
fn test_surrounding_whitespace_is_trimmed_for_urls() {
    assert_eq!(
        detect_input("  https://example.com  \n"),
        InputType::Url("https://example.com".to_string())
    );
}

#[test]
fn test_detect_existing_eml_file() {
    let mut file = tempfile::Builder::new().suffix(".eml").tempfile().unwrap();
    writeln!(file, "Subject: Unusual sign-in activity").unwrap();
    let path = file.path().to_string_lossy().to_string();

    assert_eq!(detect_input(&path), InputType::EmailFile(path.clone().into()));
}

#[test]
fn test_text_ending_in_file_extension_stays_email_text() {
    let input = "Please open the attached invoice.txt";
    assert_eq!(detect_input(input), InputType::EmailText(input.to_string()));

    let input = "./inbox/missing.eml";
    assert_eq!(detect_input(input), InputType::EmailText(input.to_string()));
}

#[test]
fn test_detect_existing_file_without_extension() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Your password expiration is today").unwrap();
    let path = file.path().to_string_lossy().to_string();

    assert_eq!(detect_input(&path), InputType::EmailFile(path.clone().into()));
}

#[test]
fn test_detect_pasted_text_is_kept_verbatim() {
    let input = "  Hello,\nplease confirm your details.\n";
    assert_eq!(detect_input(input), InputType::EmailText(input.to_string()));
}

#[test]
fn test_empty_input_is_email_text() {
    assert_eq!(detect_input(""), InputType::EmailText(String::new()));
}
