//! Static header-synonym tables.
//!
//! Each canonical field maps to the raw header substrings recognized as
//! referring to it, covering English plus the Spanish, French, and
//! German variants seen in real exports. The tables are compile-time
//! constants: init-only, never mutated, safe for concurrent reads.

use intake_model::CanonicalField;

const FIRST_NAME: &[&str] = &[
    "first name",
    "first_name",
    "fname",
    "first",
    "given name",
    "given_name",
    "given",
    "nombre",
    "prenom",
    "vorname",
];

const LAST_NAME: &[&str] = &[
    "last name",
    "last_name",
    "lname",
    "last",
    "surname",
    "family name",
    "family_name",
    "family",
    "apellidos",
    "apellido",
    "nom",
    "nachname",
];

const EMAIL: &[&str] = &[
    "email",
    "e-mail",
    "email address",
    "email_address",
    "mail",
    "correo",
    "courriel",
    "e_mail",
];

const PHONE: &[&str] = &[
    "phone",
    "phone number",
    "phone_number",
    "tel",
    "telephone",
    "mobile",
    "cell",
    "cellular",
    "work phone",
    "home phone",
    "teléfono",
    "telefono",
    "téléphone",
];

const COMPANY: &[&str] = &[
    "company",
    "organization",
    "org",
    "employer",
    "business",
    "empresa",
    "société",
    "unternehmen",
];

const FULL_NAME: &[&str] = &[
    "name",
    "full name",
    "full_name",
    "display name",
    "contact name",
    "contact",
    "nombre completo",
];

/// Recognized header substrings for one canonical field.
#[must_use]
pub fn synonyms(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::FirstName => FIRST_NAME,
        CanonicalField::LastName => LAST_NAME,
        CanonicalField::FullName => FULL_NAME,
        CanonicalField::Email => EMAIL,
        CanonicalField::Phone => PHONE,
        CanonicalField::Company => COMPANY,
    }
}
