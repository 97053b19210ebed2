use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use job_scraper::Listing;
use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Run summaries accumulate here across runs.
pub const LOG_FILE: &str = "log.txt";
/// Sheet names are limited to 31 characters by the xlsx format.
pub const SHEET_NAME: &str = "Вакансии python-backend Москва";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Spreadsheet error: '{0}'")]
    Xlsx(#[from] XlsxError),
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
}

/// Moment a run started, used to give each run its own spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp(DateTime<Local>);

impl RunStamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn spreadsheet_name(&self) -> String {
        format!("результаты_{}.xlsx", self.0.format("%Y-%m-%d_%H-%M-%S"))
    }
}

impl From<DateTime<Local>> for RunStamp {
    fn from(started_at: DateTime<Local>) -> Self {
        Self(started_at)
    }
}

#[derive(Debug)]
pub struct ExportSummary {
    pub spreadsheet: PathBuf,
    pub total: usize,
    pub without_salary: usize,
}

pub fn count_without_salary(listings: &[Listing]) -> usize {
    listings.iter().filter(|listing| !listing.has_salary()).count()
}

fn log_line(at: DateTime<Local>, total: usize, without_salary: usize) -> String {
    format!(
        "[{}] Собрано: {}, из них без зарплаты: {}\n",
        at.format("%Y-%m-%d %H:%M:%S%.6f"),
        total,
        without_salary
    )
}

fn write_spreadsheet(path: &Path, listings: &[Listing]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.serialize_headers(0, 0, &Listing::default())?;
    for listing in listings {
        worksheet.serialize(listing)?;
    }
    workbook.save(path)?;
    Ok(())
}

async fn append_log(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

/// Writes the listings to a fresh spreadsheet in `out_dir` and appends a run
/// summary to the log file next to it.
pub async fn export(listings: &[Listing], stamp: &RunStamp, out_dir: &Path) -> Result<ExportSummary> {
    let spreadsheet = out_dir.join(stamp.spreadsheet_name());
    let without_salary = count_without_salary(listings);

    write_spreadsheet(&spreadsheet, listings)?;
    log::info!(
        "wrote {} vacancies to {}",
        listings.len(),
        spreadsheet.display()
    );

    let line = log_line(Local::now(), listings.len(), without_salary);
    append_log(&out_dir.join(LOG_FILE), &line).await?;

    Ok(ExportSummary {
        spreadsheet,
        total: listings.len(),
        without_salary,
    })
}
