//! Record paths the form fields bind to.
//!
//! A `FieldPath` is one addressable text slot inside a `ProfileRecord`.
//! Reads of a section that was never filled in come back as the empty
//! string - a missing nested section can never fault the projection of
//! any field.

use tx_core::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    Tagline,
    Email,
    Phone,
    HomeAddress,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Class12,
    Grade12,
    Class10,
    Grade10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Address,
    Phone,
    Website,
    Description,
    Industry,
    FoundedYear,
    TeamSize,
    FundingStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialField {
    Instagram,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Personal(PersonalField),
    Education(EducationField),
    Company(CompanyField),
    Social(SocialField),
}

impl FieldPath {
    /// Reads the addressed slot.
    pub fn get<'r>(&self, record: &'r ProfileRecord) -> &'r str {
        match self {
            Self::Personal(field) => {
                let p = &record.personal;
                match field {
                    PersonalField::FirstName => &p.first_name,
                    PersonalField::LastName => &p.last_name,
                    PersonalField::Tagline => &p.tagline,
                    PersonalField::Email => &p.email,
                    PersonalField::Phone => &p.phone,
                    PersonalField::HomeAddress => &p.home_address,
                    PersonalField::State => &p.state,
                }
            }
            Self::Education(field) => {
                let e = &record.education;
                match field {
                    EducationField::Class12 => &e.class12,
                    EducationField::Grade12 => &e.grade12,
                    EducationField::Class10 => &e.class10,
                    EducationField::Grade10 => &e.grade10,
                }
            }
            Self::Company(field) => {
                let c = &record.company;
                match field {
                    CompanyField::Name => &c.name,
                    CompanyField::Address => &c.address,
                    CompanyField::Phone => &c.phone,
                    CompanyField::Website => &c.website,
                    CompanyField::Description => &c.description,
                    CompanyField::Industry => &c.industry,
                    CompanyField::FoundedYear => &c.founded_year,
                    CompanyField::TeamSize => &c.team_size,
                    CompanyField::FundingStage => &c.funding_stage,
                }
            }
            Self::Social(field) => {
                let s = &record.social_media;
                match field {
                    SocialField::Instagram => &s.instagram,
                    SocialField::Linkedin => &s.linkedin,
                }
            }
        }
    }

    /// Writes the addressed slot.
    pub fn set(&self, record: &mut ProfileRecord, value: String) {
        match self {
            Self::Personal(field) => {
                let p = &mut record.personal;
                match field {
                    PersonalField::FirstName => p.first_name = value,
                    PersonalField::LastName => p.last_name = value,
                    PersonalField::Tagline => p.tagline = value,
                    PersonalField::Email => p.email = value,
                    PersonalField::Phone => p.phone = value,
                    PersonalField::HomeAddress => p.home_address = value,
                    PersonalField::State => p.state = value,
                }
            }
            Self::Education(field) => {
                let e = &mut record.education;
                match field {
                    EducationField::Class12 => e.class12 = value,
                    EducationField::Grade12 => e.grade12 = value,
                    EducationField::Class10 => e.class10 = value,
                    EducationField::Grade10 => e.grade10 = value,
                }
            }
            Self::Company(field) => {
                let c = &mut record.company;
                match field {
                    CompanyField::Name => c.name = value,
                    CompanyField::Address => c.address = value,
                    CompanyField::Phone => c.phone = value,
                    CompanyField::Website => c.website = value,
                    CompanyField::Description => c.description = value,
                    CompanyField::Industry => c.industry = value,
                    CompanyField::FoundedYear => c.founded_year = value,
                    CompanyField::TeamSize => c.team_size = value,
                    CompanyField::FundingStage => c.funding_stage = value,
                }
            }
            Self::Social(field) => {
                let s = &mut record.social_media;
                match field {
                    SocialField::Instagram => s.instagram = value,
                    SocialField::Linkedin => s.linkedin = value,
                }
            }
        }
    }
}
