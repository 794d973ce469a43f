use terraquiz::models::Country;
use terraquiz::storage::Storage;

pub fn country(code: &str, name: &str, capital: Option<&str>, currency: Option<&str>) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        capital: capital.map(str::to_string),
        currency: currency.map(str::to_string),
        currency_code: currency.map(|_| "XTS".to_string()),
        currency_symbol: None,
        flag_url: format!("https://flagcdn.com/{}.svg", code.to_lowercase()),
        flag_png_url: format!("https://flagcdn.com/w320/{}.png", code.to_lowercase()),
        region: "Test Region".to_string(),
        subregion: None,
        population: 5_000_000,
    }
}

/// Twenty countries with full data, enough for any mode at the default count.
pub fn world() -> Vec<Country> {
    vec![
        country("FRA", "France", Some("Paris"), Some("Euro")),
        country("DEU", "Germany", Some("Berlin"), Some("Euro")),
        country("ESP", "Spain", Some("Madrid"), Some("Euro")),
        country("ITA", "Italy", Some("Rome"), Some("Euro")),
        country("JPN", "Japan", Some("Tokyo"), Some("Japanese yen")),
        country("BRA", "Brazil", Some("Brasília"), Some("Brazilian real")),
        country("CAN", "Canada", Some("Ottawa"), Some("Canadian dollar")),
        country("AUS", "Australia", Some("Canberra"), Some("Australian dollar")),
        country("EGY", "Egypt", Some("Cairo"), Some("Egyptian pound")),
        country("IND", "India", Some("New Delhi"), Some("Indian rupee")),
        country("MEX", "Mexico", Some("Mexico City"), Some("Mexican peso")),
        country("NOR", "Norway", Some("Oslo"), Some("Norwegian krone")),
        country("KEN", "Kenya", Some("Nairobi"), Some("Kenyan shilling")),
        country("THA", "Thailand", Some("Bangkok"), Some("Thai baht")),
        country("ARG", "Argentina", Some("Buenos Aires"), Some("Argentine peso")),
        country("ZAF", "South Africa", Some("Pretoria"), Some("South African rand")),
        country("KOR", "South Korea", Some("Seoul"), Some("South Korean won")),
        country("TUR", "Turkey", Some("Ankara"), Some("Turkish lira")),
        country("POL", "Poland", Some("Warsaw"), Some("Polish złoty")),
        country("PER", "Peru", Some("Lima"), Some("Peruvian sol")),
    ]
}

pub fn temp_storage() -> Storage {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir =
        std::env::temp_dir().join(format!("terraquiz_test_{}_{}", std::process::id(), id));
    let _ = std::fs::remove_dir_all(&dir);
    Storage::with_dir(dir)
}
