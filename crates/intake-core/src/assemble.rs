//! Record-to-contact assembly.
//!
//! Four strictly sequential steps: name, email, phone, company. No
//! retries and no invented data; a record that cannot satisfy the
//! validity invariant is a [`ValidationError`].

use intake_extract::{find_emails, find_phones, normalize_phone, split_name};
use intake_model::{CanonicalField, CanonicalRecord, NormalizedContact, ValidationError};

/// Assemble one canonical record into a validated contact.
pub fn assemble_contact(record: &CanonicalRecord) -> Result<NormalizedContact, ValidationError> {
    let mut contact = NormalizedContact::default();
    resolve_name(record, &mut contact);
    contact.email = resolve_email(record);
    contact.phone = resolve_phone(record);
    contact.company = resolve_company(record);
    contact.validate()?;
    Ok(contact)
}

fn resolve_name(record: &CanonicalRecord, contact: &mut NormalizedContact) {
    let first = record.canonical(CanonicalField::FirstName);
    let last = record.canonical(CanonicalField::LastName);
    if first.is_some() || last.is_some() {
        contact.first_name = first.map(str::to_string);
        contact.last_name = last.map(str::to_string);
        return;
    }
    if let Some(full) = record.canonical(CanonicalField::FullName) {
        (contact.first_name, contact.last_name) = split_name(full);
        return;
    }
    // Headerless rows carry no name column; the leading cell is the
    // conventional spot for one, as long as it is not itself an email
    // or a phone.
    if record.is_positional()
        && let Some(candidate) = record.iter().next().map(|(_, value)| value.trim())
        && !candidate.is_empty()
        && find_emails(candidate).is_empty()
        && normalize_phone(candidate).is_none()
    {
        (contact.first_name, contact.last_name) = split_name(candidate);
    }
}

fn resolve_email(record: &CanonicalRecord) -> Option<String> {
    if let Some(value) = record.canonical(CanonicalField::Email)
        && value.contains('@')
        && let Some(email) = find_emails(value).into_iter().next()
    {
        return Some(email);
    }
    // No usable email column; scan every field in iteration order.
    for (field, value) in record.iter() {
        if let Some(email) = find_emails(value).into_iter().next() {
            tracing::debug!(field, "email recovered by fallback scan");
            return Some(email);
        }
    }
    None
}

fn resolve_phone(record: &CanonicalRecord) -> Option<String> {
    if let Some(value) = record.canonical(CanonicalField::Phone)
        && let Some(phone) = normalize_phone(value)
    {
        return Some(phone);
    }
    for (field, value) in record.iter() {
        if let Some(candidate) = find_phones(value).into_iter().next()
            && let Some(phone) = normalize_phone(&candidate)
        {
            tracing::debug!(field, "phone recovered by fallback scan");
            return Some(phone);
        }
    }
    None
}

fn resolve_company(record: &CanonicalRecord) -> Option<String> {
    if let Some(company) = record.canonical(CanonicalField::Company) {
        return Some(company.to_string());
    }
    if !record.is_positional() {
        return None;
    }
    // Headerless rows: the first later cell holding neither an email
    // nor a phone is taken as the company.
    for (index, (_, value)) in record.iter().enumerate() {
        if index < 2 {
            continue;
        }
        let value = value.trim();
        if value.is_empty() || value.contains('@') || normalize_phone(value).is_some() {
            continue;
        }
        return Some(value.to_string());
    }
    None
}
