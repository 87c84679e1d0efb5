//! The declarative field map: UI field name to record path, one entry
//! per text input of the profile form. `project` and `collect` iterate
//! this table instead of addressing fields one statement at a time.

use crate::field_path::{
    CompanyField, EducationField, FieldPath, PersonalField, SocialField,
};

#[derive(Debug, Clone, Copy)]
pub struct FieldBinding {
    /// The UI field name (the element id on the page).
    pub field: &'static str,
    pub path: FieldPath,
}

pub const FIELD_BINDINGS: &[FieldBinding] = &[
    FieldBinding {
        field: "firstName",
        path: FieldPath::Personal(PersonalField::FirstName),
    },
    FieldBinding {
        field: "lastName",
        path: FieldPath::Personal(PersonalField::LastName),
    },
    FieldBinding {
        field: "tagline",
        path: FieldPath::Personal(PersonalField::Tagline),
    },
    FieldBinding {
        field: "email",
        path: FieldPath::Personal(PersonalField::Email),
    },
    FieldBinding {
        field: "phone",
        path: FieldPath::Personal(PersonalField::Phone),
    },
    FieldBinding {
        field: "homeAddress",
        path: FieldPath::Personal(PersonalField::HomeAddress),
    },
    FieldBinding {
        field: "state",
        path: FieldPath::Personal(PersonalField::State),
    },
    FieldBinding {
        field: "class12",
        path: FieldPath::Education(EducationField::Class12),
    },
    FieldBinding {
        field: "grade12",
        path: FieldPath::Education(EducationField::Grade12),
    },
    FieldBinding {
        field: "class10",
        path: FieldPath::Education(EducationField::Class10),
    },
    FieldBinding {
        field: "grade10",
        path: FieldPath::Education(EducationField::Grade10),
    },
    FieldBinding {
        field: "companyName",
        path: FieldPath::Company(CompanyField::Name),
    },
    FieldBinding {
        field: "companyAddress",
        path: FieldPath::Company(CompanyField::Address),
    },
    FieldBinding {
        field: "companyPhone",
        path: FieldPath::Company(CompanyField::Phone),
    },
    FieldBinding {
        field: "website",
        path: FieldPath::Company(CompanyField::Website),
    },
    FieldBinding {
        field: "companyDescription",
        path: FieldPath::Company(CompanyField::Description),
    },
    FieldBinding {
        field: "industry",
        path: FieldPath::Company(CompanyField::Industry),
    },
    FieldBinding {
        field: "foundedYear",
        path: FieldPath::Company(CompanyField::FoundedYear),
    },
    FieldBinding {
        field: "teamSize",
        path: FieldPath::Company(CompanyField::TeamSize),
    },
    FieldBinding {
        field: "fundingStage",
        path: FieldPath::Company(CompanyField::FundingStage),
    },
    FieldBinding {
        field: "instagram",
        path: FieldPath::Social(SocialField::Instagram),
    },
    FieldBinding {
        field: "linkedin",
        path: FieldPath::Social(SocialField::Linkedin),
    },
];

/// Looks up the binding declared for a UI field name.
pub fn binding_for(field: &str) -> Option<&'static FieldBinding> {
    FIELD_BINDINGS.iter().find(|b| b.field == field)
}
