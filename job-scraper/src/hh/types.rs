use serde::Serialize;

use crate::hh::SALARY_NOT_SPECIFIED;

/// One vacancy card from the search results. Field names double as the
/// spreadsheet column headers.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    #[serde(rename = "Вакансия")]
    pub title: String,
    #[serde(rename = "Работодатель")]
    pub employer: String,
    #[serde(rename = "Заработная плата")]
    pub salary: String,
    #[serde(rename = "Ссылка")]
    pub link: String,
    #[serde(rename = "Местоположение")]
    pub location: String,
}

impl Listing {
    pub fn has_salary(&self) -> bool {
        self.salary != SALARY_NOT_SPECIFIED
    }
}
