//! Records shared by the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use prw_form::{FieldValue, FormRecord, Result};
use prw_model::OptionValue;

/// Organisation details step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Organisation {
    pub org_id: String,
    pub name: String,
    pub abn: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrgField {
    OrgId,
    Name,
    Abn,
    Phone,
}

impl FormRecord for Organisation {
    type Field = OrgField;

    const FIELDS: &'static [OrgField] = &[
        OrgField::OrgId,
        OrgField::Name,
        OrgField::Abn,
        OrgField::Phone,
    ];

    fn field_name(field: OrgField) -> &'static str {
        match field {
            OrgField::OrgId => "orgID",
            OrgField::Name => "name",
            OrgField::Abn => "abn",
            OrgField::Phone => "phone",
        }
    }

    fn get(&self, field: OrgField) -> FieldValue {
        match field {
            OrgField::OrgId => self.org_id.as_str().into(),
            OrgField::Name => self.name.as_str().into(),
            OrgField::Abn => self.abn.as_str().into(),
            OrgField::Phone => self.phone.as_str().into(),
        }
    }

    fn set(&mut self, field: OrgField, value: FieldValue) -> Result<()> {
        let name = Self::field_name(field);
        let text = value.into_text(name)?;
        match field {
            OrgField::OrgId => self.org_id = text,
            OrgField::Name => self.name = text,
            OrgField::Abn => self.abn = text,
            OrgField::Phone => self.phone = text,
        }
        Ok(())
    }
}

/// One qualification held by a trainer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qualification {
    pub title: String,
    pub institution: Option<OptionValue>,
    pub course: Option<OptionValue>,
    pub unit: Option<OptionValue>,
    pub completed: Option<NaiveDate>,
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualField {
    Title,
    Institution,
    Course,
    Unit,
    Completed,
    Current,
}

impl FormRecord for Qualification {
    type Field = QualField;

    const FIELDS: &'static [QualField] = &[
        QualField::Title,
        QualField::Institution,
        QualField::Course,
        QualField::Unit,
        QualField::Completed,
        QualField::Current,
    ];

    fn field_name(field: QualField) -> &'static str {
        match field {
            QualField::Title => "title",
            QualField::Institution => "institution",
            QualField::Course => "course",
            QualField::Unit => "unit",
            QualField::Completed => "completed",
            QualField::Current => "current",
        }
    }

    fn get(&self, field: QualField) -> FieldValue {
        match field {
            QualField::Title => self.title.as_str().into(),
            QualField::Institution => self.institution.clone().into(),
            QualField::Course => self.course.clone().into(),
            QualField::Unit => self.unit.clone().into(),
            QualField::Completed => self.completed.into(),
            QualField::Current => self.current.into(),
        }
    }

    fn set(&mut self, field: QualField, value: FieldValue) -> Result<()> {
        let name = Self::field_name(field);
        match field {
            QualField::Title => self.title = value.into_text(name)?,
            QualField::Institution => self.institution = value.into_choice(name)?,
            QualField::Course => self.course = value.into_choice(name)?,
            QualField::Unit => self.unit = value.into_choice(name)?,
            QualField::Completed => self.completed = value.into_date(name)?,
            QualField::Current => self.current = value.into_flag(name)?,
        }
        Ok(())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
