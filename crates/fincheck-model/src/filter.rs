use chrono::NaiveDate;

use crate::field::RegistryField;

/// Fields searched by the free-text query.
pub const FREE_TEXT_FIELDS: [RegistryField; 5] = [
    RegistryField::Company,
    RegistryField::System,
    RegistryField::Website,
    RegistryField::License,
    RegistryField::BusinessType,
];

/// Criteria for one filtering pass.
///
/// Empty strings and `None` bounds impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Matched against every field in [`FREE_TEXT_FIELDS`].
    pub query: String,
    pub company: String,
    pub system: String,
    pub license: String,
    pub business_type: String,
    pub website: String,
    /// Inclusive lower bound on the registration date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the registration date (whole day).
    pub date_to: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec with only a free-text query.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    #[must_use]
    pub fn with_business_type(mut self, business_type: impl Into<String>) -> Self {
        self.business_type = business_type.into();
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    #[must_use]
    pub fn with_date_from(mut self, date: Option<NaiveDate>) -> Self {
        self.date_from = date;
        self
    }

    #[must_use]
    pub fn with_date_to(mut self, date: Option<NaiveDate>) -> Self {
        self.date_to = date;
        self
    }

    /// Per-field filters paired with the field they constrain, in a fixed order.
    pub fn field_filters(&self) -> [(RegistryField, &str); 5] {
        [
            (RegistryField::Company, self.company.as_str()),
            (RegistryField::System, self.system.as_str()),
            (RegistryField::License, self.license.as_str()),
            (RegistryField::BusinessType, self.business_type.as_str()),
            (RegistryField::Website, self.website.as_str()),
        ]
    }

    pub fn has_date_range(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// True once any criterion is set.
    ///
    /// Separates "no search performed yet" from "search found nothing".
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.field_filters().iter().any(|(_, term)| !term.is_empty())
            || self.has_date_range()
    }

    /// Drop every criterion.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
