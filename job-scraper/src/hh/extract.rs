use lazy_static::lazy_static;
use regex::Regex;

use crate::browser::Page;
use crate::hh::types::Listing;
use crate::hh::{
    Error, Result, ADDRESS_SELECTOR, CURRENCY_MARKER, EMPLOYER_SELECTOR, LINK_SELECTOR,
    SALARY_NOT_SPECIFIED, SALARY_SELECTOR, TITLE_SELECTOR,
};

/// Strips narrow no-break (U+202F) and no-break (U+00A0) spaces, then trims.
pub fn normalize(raw: &str) -> String {
    lazy_static! {
        static ref NBSP: Regex = Regex::new("[\u{202f}\u{a0}]").unwrap();
    }
    NBSP.replace_all(raw, "").trim().to_owned()
}

/// Normalized salary text, or the "not specified" marker when there is no
/// salary block or it carries no rouble amount.
pub fn normalize_salary(raw: Option<&str>) -> String {
    match raw.map(normalize) {
        Some(salary) if salary.contains(CURRENCY_MARKER) => salary,
        _ => SALARY_NOT_SPECIFIED.to_owned(),
    }
}

async fn first_within<P: Page>(
    page: &P,
    card: &P::Element,
    selector: &str,
) -> Result<Option<P::Element>> {
    Ok(page.locate_within(card, selector).await?.into_iter().next())
}

async fn required_text<P: Page>(
    page: &P,
    card: &P::Element,
    selector: &str,
    field: &'static str,
) -> Result<String> {
    let element = first_within(page, card, selector)
        .await?
        .ok_or(Error::ContentNotFound(field))?;
    let text = page.text(&element).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::ContentNotFound(field));
    }
    Ok(text.to_owned())
}

/// Extracts every field of one vacancy card. Any missing required field fails
/// the whole card.
pub async fn extract_listing<P: Page>(page: &P, card: &P::Element) -> Result<Listing> {
    let title = required_text(page, card, TITLE_SELECTOR, "title").await?;

    let employer = normalize(&required_text(page, card, EMPLOYER_SELECTOR, "employer").await?);

    let salary = match first_within(page, card, SALARY_SELECTOR).await? {
        Some(element) => Some(page.text(&element).await?),
        None => None,
    };
    let salary = normalize_salary(salary.as_deref());

    let link_element = first_within(page, card, LINK_SELECTOR)
        .await?
        .ok_or(Error::ContentNotFound("link"))?;
    let link = page
        .attribute(&link_element, "href")
        .await?
        .filter(|href| !href.trim().is_empty())
        .ok_or(Error::ContentNotFound("link"))?;

    let location = required_text(page, card, ADDRESS_SELECTOR, "location").await?;

    Ok(Listing {
        title,
        employer,
        salary,
        link,
        location,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::browser::snapshot::SnapshotPage;
    use crate::hh::fixtures::{results_page, Vacancy};
    use crate::hh::VACANCY_SELECTOR;

    async fn extract_single(vacancy: Vacancy) -> Result<Listing> {
        let page = SnapshotPage::new().with_document("/", results_page(&[vacancy], &[]));
        page.navigate("/").await.unwrap();
        let card = page.locate(VACANCY_SELECTOR).await.unwrap().remove(0);
        extract_listing(&page, &card).await
    }

    #[test]
    fn test_normalize_strips_nbsp() {
        assert_eq!(normalize("120\u{202f}000\u{a0}₽"), "120000₽");
        assert_eq!(normalize("  ООО\u{a0}Ромашка \n"), "ОООРомашка");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "",
            " \u{a0} ",
            "от 150\u{202f}000 до 250\u{202f}000\u{a0}₽ за месяц",
            "\u{a0}  Яндекс  \u{202f}",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_salary() {
        assert_eq!(normalize_salary(Some("120 000\u{a0}₽")), "120 000₽");
        assert_eq!(normalize_salary(Some("по договорённости")), SALARY_NOT_SPECIFIED);
        assert_eq!(normalize_salary(Some("3\u{202f}000 $")), SALARY_NOT_SPECIFIED);
        assert_eq!(normalize_salary(None), SALARY_NOT_SPECIFIED);
    }

    #[tokio::test]
    async fn test_extract_full_card() {
        let listing = extract_single(
            Vacancy::new("Python backend developer", "/vacancy/1")
                .employer("ООО\u{a0}Ромашка")
                .salary("от 200\u{202f}000\u{a0}₽ за месяц"),
        )
        .await
        .unwrap();
        assert_eq!(
            listing,
            Listing {
                title: "Python backend developer".to_owned(),
                employer: "ОООРомашка".to_owned(),
                salary: "от 200000₽ за месяц".to_owned(),
                link: "/vacancy/1".to_owned(),
                location: "Москва".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn test_salary_without_currency_is_not_specified() {
        let listing = extract_single(
            Vacancy::new("Backend", "/vacancy/2").salary("по договорённости"),
        )
        .await
        .unwrap();
        assert_eq!(listing.salary, SALARY_NOT_SPECIFIED);
        assert!(!listing.has_salary());
    }

    #[tokio::test]
    async fn test_missing_salary_block_is_not_specified() {
        let listing = extract_single(Vacancy::new("Backend", "/vacancy/3"))
            .await
            .unwrap();
        assert_eq!(listing.salary, SALARY_NOT_SPECIFIED);
    }

    #[tokio::test]
    async fn test_missing_required_fields_fail_the_card() {
        let missing_title = extract_single(Vacancy::new("Backend", "/vacancy/4").without_title()).await;
        assert!(matches!(missing_title, Err(Error::ContentNotFound("title"))));

        let missing_link = extract_single(Vacancy::new("Backend", "/vacancy/5").without_link()).await;
        assert!(matches!(missing_link, Err(Error::ContentNotFound("link"))));

        let missing_address =
            extract_single(Vacancy::new("Backend", "/vacancy/6").without_address()).await;
        assert!(matches!(
            missing_address,
            Err(Error::ContentNotFound("location"))
        ));

        let missing_employer =
            extract_single(Vacancy::new("Backend", "/vacancy/7").without_employer()).await;
        assert!(matches!(
            missing_employer,
            Err(Error::ContentNotFound("employer"))
        ));
    }

    #[tokio::test]
    async fn test_blank_required_fields_fail_the_card() {
        let nbsp_employer =
            extract_single(Vacancy::new("Backend", "/vacancy/8").employer("\u{a0}\u{202f}\u{a0}")).await;
        assert!(matches!(
            nbsp_employer,
            Err(Error::ContentNotFound("employer"))
        ));

        let empty_href = extract_single(Vacancy::new("Backend", "")).await;
        assert!(matches!(empty_href, Err(Error::ContentNotFound("link"))));

        let blank_title = extract_single(Vacancy::new(" \n ", "/vacancy/9")).await;
        assert!(matches!(blank_title, Err(Error::ContentNotFound("title"))));

        let blank_address =
            extract_single(Vacancy::new("Backend", "/vacancy/10").address("  ")).await;
        assert!(matches!(
            blank_address,
            Err(Error::ContentNotFound("location"))
        ));
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let listing = extract_single(
            Vacancy::new("\n  Python developer \n", "/vacancy/11").address("\n Москва, Арбатская  "),
        )
        .await
        .unwrap();
        assert_eq!(listing.title, "Python developer");
        assert_eq!(listing.location, "Москва, Арбатская");
    }
}
