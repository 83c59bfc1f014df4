use chrono::NaiveDate;
use js_sys::Date;

/// Calendar date of a JS `Date` in the browser's local time zone
pub fn naive_date_from_js(date: &Date) -> Option<NaiveDate> {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    naive_date_from_js(&Date::new_0()).unwrap_or_default()
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_components_are_used() {
        // Month argument is 0-based on the JS side
        let js = Date::new_with_year_month_day(2024, 2, 10);
        assert_eq!(naive_date_from_js(&js), NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[wasm_bindgen_test]
    fn test_today_matches_js_clock() {
        let now = Date::new_0();
        let today = today();
        assert_eq!(today, naive_date_from_js(&now).unwrap());
    }
}
