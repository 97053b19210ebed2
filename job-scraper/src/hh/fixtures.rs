//! Html builders mimicking the hh.ru search result markup.

pub(crate) struct Vacancy {
    title: Option<String>,
    employer: Option<String>,
    salary: Option<String>,
    link: Option<String>,
    address: Option<String>,
}

impl Vacancy {
    pub(crate) fn new(title: &str, link: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            employer: Some("Яндекс".to_owned()),
            salary: None,
            link: Some(link.to_owned()),
            address: Some("Москва".to_owned()),
        }
    }

    pub(crate) fn employer(mut self, employer: &str) -> Self {
        self.employer = Some(employer.to_owned());
        self
    }

    pub(crate) fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_owned());
        self
    }

    pub(crate) fn without_employer(mut self) -> Self {
        self.employer = None;
        self
    }

    pub(crate) fn salary(mut self, salary: &str) -> Self {
        self.salary = Some(salary.to_owned());
        self
    }

    pub(crate) fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub(crate) fn without_link(mut self) -> Self {
        self.link = None;
        self
    }

    pub(crate) fn without_address(mut self) -> Self {
        self.address = None;
        self
    }

    fn html(&self) -> String {
        let title = self
            .title
            .as_ref()
            .map(|title| format!(r#"<span data-qa="serp-item__title-text">{}</span>"#, title))
            .unwrap_or_default();
        let heading = match &self.link {
            Some(link) => format!(r#"<a data-qa="serp-item__title" href="{}">{}</a>"#, link, title),
            None => format!("<h2>{}</h2>", title),
        };
        let salary = self
            .salary
            .as_ref()
            .map(|salary| {
                format!(
                    r#"<div class="narrow-container--HaV4hduxPuElpx0V"><span class="magritte-text___pbpft_3-0-41">{}</span></div>"#,
                    salary
                )
            })
            .unwrap_or_default();
        let employer = self
            .employer
            .as_ref()
            .map(|employer| {
                format!(
                    r#"<span data-qa="vacancy-serp__vacancy-employer-text">{}</span>"#,
                    employer
                )
            })
            .unwrap_or_default();
        let address = self
            .address
            .as_ref()
            .map(|address| {
                format!(
                    r#"<span data-qa="vacancy-serp__vacancy-address">{}</span>"#,
                    address
                )
            })
            .unwrap_or_default();
        format!(
            r#"<div data-qa="vacancy-serp__vacancy">{}{}{}{}</div>"#,
            heading, salary, employer, address
        )
    }
}

/// A pager control: label, target url, whether it is the current page.
pub(crate) type PagerControl<'a> = (&'a str, &'a str, bool);

pub(crate) fn results_page(vacancies: &[Vacancy], pager: &[PagerControl]) -> String {
    let cards = vacancies.iter().map(Vacancy::html).collect::<String>();
    let controls = pager
        .iter()
        .map(|(label, href, active)| {
            let current = if *active { r#" aria-current="true""# } else { "" };
            format!(
                r#"<a data-qa="pager-page" href="{}"{}><span>{}</span></a>"#,
                href, current, label
            )
        })
        .collect::<String>();
    format!(
        r#"<html><head><title>hh</title></head><body><main>{}</main><nav>{}</nav></body></html>"#,
        cards, controls
    )
}
