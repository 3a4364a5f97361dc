//! Agreement records and the raw form they are submitted in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AgreementError;

/// Format of `date_signed` on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A signed agreement between two parties.
///
/// Agreements wait in the transaction pool until they are sealed into a
/// block; after that they are never modified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agreement {
    pub party_a: String,
    pub party_b: String,
    pub agreement_title: String,
    pub terms: String,
    pub date_signed: NaiveDate,
}

impl Agreement {
    /// Build an agreement, rejecting any empty text field.
    pub fn new(
        party_a: impl Into<String>,
        party_b: impl Into<String>,
        agreement_title: impl Into<String>,
        terms: impl Into<String>,
        date_signed: NaiveDate,
    ) -> Result<Self, AgreementError> {
        let agreement = Self {
            party_a: party_a.into(),
            party_b: party_b.into(),
            agreement_title: agreement_title.into(),
            terms: terms.into(),
            date_signed,
        };
        agreement.validate()?;
        Ok(agreement)
    }

    /// Check structural completeness: every text field must carry something
    /// other than whitespace.
    pub fn validate(&self) -> Result<(), AgreementError> {
        for (name, value) in self.text_fields() {
            if value.trim().is_empty() {
                return Err(AgreementError::EmptyField(name));
            }
        }
        Ok(())
    }

    fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("party_a", &self.party_a),
            ("party_b", &self.party_b),
            ("agreement_title", &self.agreement_title),
            ("terms", &self.terms),
        ]
    }
}

/// An agreement as it arrives from a form: every field optional, the date
/// still unparsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementDraft {
    #[serde(default)]
    pub party_a: Option<String>,
    #[serde(default)]
    pub party_b: Option<String>,
    #[serde(default)]
    pub agreement_title: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub date_signed: Option<String>,
}

impl AgreementDraft {
    /// Turn the draft into an [`Agreement`].
    ///
    /// Fields are checked in declaration order, so the first missing or empty
    /// field is the one reported.
    pub fn into_agreement(self) -> Result<Agreement, AgreementError> {
        let party_a = required("party_a", self.party_a)?;
        let party_b = required("party_b", self.party_b)?;
        let agreement_title = required("agreement_title", self.agreement_title)?;
        let terms = required("terms", self.terms)?;
        let date_raw = required("date_signed", self.date_signed)?;

        let date_signed = NaiveDate::parse_from_str(date_raw.trim(), DATE_FORMAT)
            .map_err(|_| AgreementError::InvalidDate { value: date_raw })?;

        Agreement::new(party_a, party_b, agreement_title, terms, date_signed)
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, AgreementError> {
    match value {
        None => Err(AgreementError::MissingField(name)),
        Some(v) if v.trim().is_empty() => Err(AgreementError::EmptyField(name)),
        Some(v) => Ok(v),
    }
}
