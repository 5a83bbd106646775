//! Sample record used by the unit tests in this crate.

use chrono::NaiveDate;
use prw_model::OptionValue;

use crate::error::Result;
use crate::record::{FieldValue, FormRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Registration {
    pub org_id: String,
    pub abn: String,
    pub phone: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub institution: Option<OptionValue>,
    pub course: Option<OptionValue>,
    pub unit: Option<OptionValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Reg {
    OrgId,
    Abn,
    Phone,
    StartDate,
    EndDate,
    Institution,
    Course,
    Unit,
}

impl FormRecord for Registration {
    type Field = Reg;

    const FIELDS: &'static [Reg] = &[
        Reg::OrgId,
        Reg::Abn,
        Reg::Phone,
        Reg::StartDate,
        Reg::EndDate,
        Reg::Institution,
        Reg::Course,
        Reg::Unit,
    ];

    fn field_name(field: Reg) -> &'static str {
        match field {
            Reg::OrgId => "orgID",
            Reg::Abn => "abn",
            Reg::Phone => "phone",
            Reg::StartDate => "start_date",
            Reg::EndDate => "end_date",
            Reg::Institution => "institution",
            Reg::Course => "course",
            Reg::Unit => "unit",
        }
    }

    fn get(&self, field: Reg) -> FieldValue {
        match field {
            Reg::OrgId => self.org_id.as_str().into(),
            Reg::Abn => self.abn.as_str().into(),
            Reg::Phone => self.phone.as_str().into(),
            Reg::StartDate => self.start_date.into(),
            Reg::EndDate => self.end_date.into(),
            Reg::Institution => self.institution.clone().into(),
            Reg::Course => self.course.clone().into(),
            Reg::Unit => self.unit.clone().into(),
        }
    }

    fn set(&mut self, field: Reg, value: FieldValue) -> Result<()> {
        let name = Self::field_name(field);
        match field {
            Reg::OrgId => self.org_id = value.into_text(name)?,
            Reg::Abn => self.abn = value.into_text(name)?,
            Reg::Phone => self.phone = value.into_text(name)?,
            Reg::StartDate => self.start_date = value.into_date(name)?,
            Reg::EndDate => self.end_date = value.into_date(name)?,
            Reg::Institution => self.institution = value.into_choice(name)?,
            Reg::Course => self.course = value.into_choice(name)?,
            Reg::Unit => self.unit = value.into_choice(name)?,
        }
        Ok(())
    }
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
