use std::collections::BTreeMap;
use std::net::IpAddr;

use url::{Host, Url};

pub mod blog_model;
pub mod user_models;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL.";

/// Validation failures keyed by form field name. At most one message per field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already failed an earlier rule.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// One input of a rendered form.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub input_type: &'static str,
    pub multiline: bool,
    pub error: Option<String>,
}

impl FieldView {
    pub fn text(name: &'static str, label: &'static str, value: &str, errors: &FormErrors) -> Self {
        Self {
            name,
            label,
            value: value.to_string(),
            input_type: "text",
            multiline: false,
            error: errors.get(name).map(str::to_string),
        }
    }

    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

/// Whitespace-only input counts as missing.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Absolute URL with an alphabetic scheme and a host that is an IP address or a
/// dotted domain ending in an alphabetic TLD. The value is checked exactly as it
/// will be stored, so surrounding whitespace fails.
pub fn is_url(value: &str) -> bool {
    if value.trim() != value {
        return false;
    }
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !url.username().is_empty() || url.password().is_some() {
        return false;
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => is_domain_with_tld(domain),
        None => false,
    }
}

fn is_domain_with_tld(domain: &str) -> bool {
    if domain.parse::<IpAddr>().is_ok() {
        return true;
    }

    let labels: Vec<&str> = domain.trim_end_matches('.').split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let valid_labels = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    valid_labels
        && ((tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
            || tld.starts_with("xn--"))
}
