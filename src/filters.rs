use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Render an ISO `YYYY-MM-DD` date as e.g. `Feb 15, 2024`.
#[askama::filter_fn]
pub fn date(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
    let date = Date::parse(value, ISO_DATE).map_err(|e| askama::Error::Custom(Box::new(e)))?;

    date.format(DISPLAY_DATE)
        .map_err(|e| askama::Error::Custom(Box::new(e)))
}
